use async_trait::async_trait;
use gloo_net::http::Response;

pub use friend::FriendHttp;
pub use user::UserHttp;

use crate::error::{Error, Result, ServerError};

mod friend;
mod user;

#[async_trait(?Send)]
pub trait RespStatus: Sized {
    async fn success(self) -> Result<Self>;
}

#[async_trait(?Send)]
impl RespStatus for Response {
    async fn success(self) -> Result<Self> {
        match self.status() {
            status if (200..=299).contains(&status) => Ok(self),
            401 => Err(Error::UnAuthorized),
            _ => {
                // deserialize the server's error payload, fall back to an
                // empty one when the body is not what we expect
                let err = self
                    .json::<ServerError>()
                    .await
                    .unwrap_or_default();
                Err(Error::Server(err))
            }
        }
    }
}
