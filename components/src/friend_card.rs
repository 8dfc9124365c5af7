use yew::prelude::*;

use conversy_sdk::model::{language_flag, user::User};
use icons::MapPinIcon;

#[derive(Properties, Clone, PartialEq)]
pub struct FriendCardProps {
    pub friend: User,
}

/// card in the friends grid: avatar, name, language badges
#[function_component(FriendCard)]
pub fn friend_card(props: &FriendCardProps) -> Html {
    let friend = &props.friend;
    html! {
        <div class="card friend-card">
            <div class="card-header">
                <div class="avatar">
                    <img src={friend.profile_pic.clone()} alt={friend.full_name.clone()}/>
                </div>
                <div>
                    <h3 class="card-title">{friend.full_name.clone()}</h3>
                    if !friend.location.is_empty() {
                        <div class="card-location">
                            <MapPinIcon />
                            {friend.location.clone()}
                        </div>
                    }
                </div>
            </div>
            <div class="card-badges">
                <span class="badge badge-primary">
                    {language_flag(&friend.native_language).unwrap_or_default()}
                    {" Native: "}{utils::capitalize(&friend.native_language)}
                </span>
                <span class="badge badge-outline">
                    {language_flag(&friend.learning_language).unwrap_or_default()}
                    {" Learning: "}{utils::capitalize(&friend.learning_language)}
                </span>
            </div>
            if !friend.bio.is_empty() {
                <p class="card-bio">{friend.bio.clone()}</p>
            }
        </div>
    }
}
