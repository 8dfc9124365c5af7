use yew::prelude::*;

use components::friend_card::FriendCard;
use components::no_friends_found::NoFriendsFound;
use conversy_sdk::api;
use conversy_sdk::error::Error;
use conversy_sdk::model::user::User;
use conversy_sdk::relationship::Snapshot;

pub struct Friends {
    friends: Snapshot<User>,
}

pub enum FriendsMsg {
    Loaded(Result<Vec<User>, Error>),
}

impl Component for Friends {
    type Message = FriendsMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link()
            .send_future(async { FriendsMsg::Loaded(api::friends().get_friends().await) });
        Self {
            friends: Snapshot::Loading,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FriendsMsg::Loaded(Ok(friends)) => {
                self.friends = Snapshot::Ready(friends);
                true
            }
            FriendsMsg::Loaded(Err(err)) => {
                log::error!("failed to load friends: {}", err);
                self.friends = Snapshot::Failed(err.to_string().into());
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let content = match &self.friends {
            Snapshot::Loading => html! {
                <div class="page-loading">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            },
            Snapshot::Failed(_) => html! {
                <div class="fetch-error">{"Failed to load friends."}</div>
            },
            Snapshot::Ready(friends) if friends.is_empty() => html!(<NoFriendsFound />),
            Snapshot::Ready(friends) => html! {
                <div class="grid friends-grid">
                    {friends
                        .iter()
                        .map(|friend| html!(<FriendCard friend={friend.clone()} key={friend.id.as_str()}/>))
                        .collect::<Html>()}
                </div>
            },
        };

        html! {
            <div class="page friends-page">
                <h1>{"Your Friends 🤝"}</h1>
                {content}
            </div>
        }
    }
}
