use yew::AttrValue;

use crate::error::Result;
use crate::model::friend::FriendRequest;
use crate::model::user::User;

#[async_trait::async_trait(?Send)]
pub trait FriendApi {
    /// accepted friends of the current user
    async fn get_friends(&self) -> Result<Vec<User>>;

    /// discoverable users; the server already excludes the current user
    /// and existing friends
    async fn get_recommended(&self) -> Result<Vec<User>>;

    /// pending requests where the current user is the sender
    async fn get_outgoing_requests(&self) -> Result<Vec<FriendRequest>>;

    /// pending requests where the current user is the recipient
    async fn get_incoming_requests(&self) -> Result<Vec<FriendRequest>>;

    async fn send_request(&self, user_id: &AttrValue) -> Result<()>;

    async fn accept_request(&self, request_id: &AttrValue) -> Result<()>;
}
