use crate::model::TOKEN;

use self::{
    friend::FriendApi,
    http::{FriendHttp, UserHttp},
    user::UserApi,
};

mod friend;
mod http;
mod user;

pub use friend::*;
pub use user::*;

pub const AUTHORIZE_HEADER: &str = "Authorization";

pub fn token() -> String {
    let token = utils::get_local_storage(TOKEN).unwrap_or_default();
    format!("Bearer {}", token)
}

pub fn users() -> Box<dyn UserApi> {
    Box::new(UserHttp)
}

pub fn friends() -> Box<dyn FriendApi> {
    Box::new(FriendHttp)
}
