pub mod friend_card;
pub mod layout;
pub mod navbar;
pub mod no_friends_found;
pub mod notification;
pub mod sidebar;
pub mod user_card;
