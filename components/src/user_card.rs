use yew::prelude::*;

use conversy_sdk::model::friend::RelationshipStatus;
use conversy_sdk::model::{language_flag, user::User};
use conversy_sdk::relationship::SendState;
use icons::{CheckCircleIcon, MapPinIcon, UserPlusIcon};

#[derive(Properties, Clone, PartialEq)]
pub struct UserCardProps {
    pub user: User,
    pub status: RelationshipStatus,
    pub send_state: SendState,
    pub on_send: Callback<AttrValue>,
}

/// discover card: profile summary plus the send-request affordance.
/// The button is disabled once a request is known to be sent or while one
/// is in flight for this user; a failed send re-enables it with the
/// reason shown inline.
#[function_component(UserCard)]
pub fn user_card(props: &UserCardProps) -> Html {
    let user = &props.user;
    let already_related = props.status != RelationshipStatus::None;
    let pending = props.send_state == SendState::Pending;

    let onclick = {
        let on_send = props.on_send.clone();
        let id = user.id.clone();
        Callback::from(move |_| on_send.emit(id.clone()))
    };

    let error_line = match &props.send_state {
        SendState::Error(reason) if !already_related => {
            html! { <p class="card-error">{reason.clone()}</p> }
        }
        _ => html!(),
    };

    let button = match props.status {
        RelationshipStatus::None if pending => html! {
            <button class="btn btn-primary" disabled=true>
                <span class="loading loading-spinner loading-sm"></span>
                {"Sending..."}
            </button>
        },
        RelationshipStatus::None => html! {
            <button class="btn btn-primary" {onclick}>
                <UserPlusIcon />
                {"Send Friend Request"}
            </button>
        },
        RelationshipStatus::RequestSent => html! {
            <button class="btn btn-disabled" disabled=true>
                <CheckCircleIcon />
                {"Request Sent"}
            </button>
        },
        RelationshipStatus::Friends => html! {
            <button class="btn btn-disabled" disabled=true>
                <CheckCircleIcon />
                {"Friends"}
            </button>
        },
    };

    html! {
        <div class="card user-card">
            <div class="card-header">
                <div class="avatar">
                    <img src={user.profile_pic.clone()} alt={user.full_name.clone()}/>
                </div>
                <div>
                    <h3 class="card-title">{user.full_name.clone()}</h3>
                    if !user.location.is_empty() {
                        <div class="card-location">
                            <MapPinIcon />
                            {user.location.clone()}
                        </div>
                    }
                </div>
            </div>
            <div class="card-badges">
                <span class="badge badge-primary">
                    {language_flag(&user.native_language).unwrap_or_default()}
                    {" Native: "}{utils::capitalize(&user.native_language)}
                </span>
                <span class="badge badge-outline">
                    {language_flag(&user.learning_language).unwrap_or_default()}
                    {" Learning: "}{utils::capitalize(&user.learning_language)}
                </span>
            </div>
            if !user.bio.is_empty() {
                <p class="card-bio">{user.bio.clone()}</p>
            }
            {button}
            {error_line}
        </div>
    }
}
