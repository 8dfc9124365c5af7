use std::rc::Rc;

use yew::prelude::*;
use yewdux::Dispatch;

use components::friend_card::FriendCard;
use components::no_friends_found::NoFriendsFound;
use components::user_card::UserCard;
use conversy_sdk::api;
use conversy_sdk::error::Error;
use conversy_sdk::model::friend::FriendRequest;
use conversy_sdk::model::notification::Notification;
use conversy_sdk::model::page::Page;
use conversy_sdk::model::user::User;
use conversy_sdk::relationship::{Epoch, RelationshipEngine, SendDecision, SendOutcome, Snapshot};
use conversy_sdk::state::AppState;
use icons::UsersIcon;
use yew_router::prelude::Link;

/// drives the relationship engine: three independent reads on mount,
/// send-request actions, and the targeted outgoing refetch after a
/// successful send
pub struct Home {
    engine: RelationshipEngine,
    _app_dis: Dispatch<AppState>,
}

pub enum HomeMsg {
    FriendsLoaded(Epoch, Result<Vec<User>, Error>),
    RecommendedLoaded(Epoch, Result<Vec<User>, Error>),
    OutgoingLoaded(Epoch, Result<Vec<FriendRequest>, Error>),
    SendRequest(AttrValue),
    SendRequestDone(Epoch, AttrValue, Result<(), Error>),
    AppStateChanged(Rc<AppState>),
}

impl Component for Home {
    type Message = HomeMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let app_dis =
            Dispatch::global().subscribe_silent(ctx.link().callback(HomeMsg::AppStateChanged));
        let home = Self {
            engine: RelationshipEngine::new(),
            _app_dis: app_dis,
        };
        home.fetch_friends(ctx);
        home.fetch_recommended(ctx);
        home.fetch_outgoing(ctx);
        home
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            HomeMsg::FriendsLoaded(epoch, result) => self.engine.apply_friends(epoch, result),
            HomeMsg::RecommendedLoaded(epoch, result) => {
                self.engine.apply_recommended(epoch, result)
            }
            HomeMsg::OutgoingLoaded(epoch, result) => self.engine.apply_outgoing(epoch, result),
            HomeMsg::SendRequest(target) => match self.engine.begin_send(&target) {
                SendDecision::Proceed => {
                    let epoch = self.engine.epoch();
                    ctx.link().send_future(async move {
                        let result = api::friends().send_request(&target).await;
                        HomeMsg::SendRequestDone(epoch, target, result)
                    });
                    true
                }
                decision => {
                    log::debug!("send to {target} rejected: {decision:?}");
                    false
                }
            },
            HomeMsg::SendRequestDone(epoch, target, result) => {
                match self.engine.finish_send(epoch, &target, result) {
                    SendOutcome::RefetchOutgoing => {
                        self.fetch_outgoing(ctx);
                        true
                    }
                    SendOutcome::Failed(reason) => {
                        Notification::warn(format!("Friend request failed: {reason}")).notify();
                        true
                    }
                    SendOutcome::Stale => false,
                }
            }
            HomeMsg::AppStateChanged(state) => {
                // logout while fetches are in flight: their results must
                // not reach the engine
                if !state.is_logged_in() {
                    self.engine.reset();
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="page home-page">
                <div class="page-header">
                    <h2>{"Your Friends 🤝"}</h2>
                    <Link<Page> to={Page::Notifications} classes="btn btn-outline btn-sm">
                        <UsersIcon />
                        {"Friend Requests"}
                    </Link<Page>>
                </div>
                {self.view_friends()}
                <section class="discover">
                    <div>
                        <h2>{"Meet New Learners 🌍"}</h2>
                        <p class="subtitle">{"Discover perfect language exchange partners"}</p>
                    </div>
                    {self.view_discover(ctx)}
                </section>
            </div>
        }
    }
}

impl Home {
    fn fetch_friends(&self, ctx: &Context<Self>) {
        let epoch = self.engine.epoch();
        ctx.link().send_future(async move {
            HomeMsg::FriendsLoaded(epoch, api::friends().get_friends().await)
        });
    }

    fn fetch_recommended(&self, ctx: &Context<Self>) {
        let epoch = self.engine.epoch();
        ctx.link().send_future(async move {
            HomeMsg::RecommendedLoaded(epoch, api::friends().get_recommended().await)
        });
    }

    fn fetch_outgoing(&self, ctx: &Context<Self>) {
        let epoch = self.engine.epoch();
        ctx.link().send_future(async move {
            HomeMsg::OutgoingLoaded(epoch, api::friends().get_outgoing_requests().await)
        });
    }

    fn view_friends(&self) -> Html {
        match self.engine.friends() {
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
        }
    }

    fn view_discover(&self, ctx: &Context<Self>) -> Html {
        let recommended = match self.engine.recommended() {
            Snapshot::Loading => {
                return html! {
                    <div class="page-loading">
                        <span class="loading loading-spinner loading-lg"></span>
                    </div>
                }
            }
            Snapshot::Failed(_) => {
                return html! {
                    <div class="fetch-error">{"Failed to load recommendations."}</div>
                }
            }
            Snapshot::Ready(users) => users,
        };

        if recommended.is_empty() {
            return html! {
                <div class="card empty-state">
                    <h3>{"No recommendations available"}</h3>
                    <p>{"Check back later for new language partners!"}</p>
                </div>
            };
        }

        // recomputed from the latest snapshots on every render, never
        // cached across refetches
        let projection = self.engine.project();
        let on_send = ctx.link().callback(HomeMsg::SendRequest);

        html! {
            <div class="grid discover-grid">
                {recommended
                    .iter()
                    .map(|user| {
                        let status = projection.get(&user.id).copied().unwrap_or_default();
                        html! {
                            <UserCard
                                key={user.id.as_str()}
                                user={user.clone()}
                                {status}
                                send_state={self.engine.send_state(&user.id)}
                                on_send={on_send.clone()} />
                        }
                    })
                    .collect::<Html>()}
            </div>
        }
    }
}
