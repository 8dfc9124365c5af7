use gloo_net::http::Request;
use yew::AttrValue;

use crate::api::friend::FriendApi;
use crate::api::{token, AUTHORIZE_HEADER};
use crate::error::Result;
use crate::model::friend::FriendRequest;
use crate::model::user::User;

use super::RespStatus;

pub struct FriendHttp;

#[async_trait::async_trait(?Send)]
impl FriendApi for FriendHttp {
    async fn get_friends(&self) -> Result<Vec<User>> {
        let friends: Vec<User> = Request::get("/api/users/friends")
            .header(AUTHORIZE_HEADER, &token())
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(friends)
    }

    async fn get_recommended(&self) -> Result<Vec<User>> {
        let users: Vec<User> = Request::get("/api/users")
            .header(AUTHORIZE_HEADER, &token())
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(users)
    }

    async fn get_outgoing_requests(&self) -> Result<Vec<FriendRequest>> {
        let reqs: Vec<FriendRequest> = Request::get("/api/users/outgoing-friend-requests")
            .header(AUTHORIZE_HEADER, &token())
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(reqs)
    }

    async fn get_incoming_requests(&self) -> Result<Vec<FriendRequest>> {
        let reqs: Vec<FriendRequest> = Request::get("/api/users/friend-requests")
            .header(AUTHORIZE_HEADER, &token())
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(reqs)
    }

    async fn send_request(&self, user_id: &AttrValue) -> Result<()> {
        Request::post(&format!("/api/users/friend-request/{}", user_id))
            .header(AUTHORIZE_HEADER, &token())
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn accept_request(&self, request_id: &AttrValue) -> Result<()> {
        Request::put(&format!("/api/users/friend-request/{}/accept", request_id))
            .header(AUTHORIZE_HEADER, &token())
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }
}
