use std::collections::HashSet;

use yew::prelude::*;

use conversy_sdk::api;
use conversy_sdk::error::Error;
use conversy_sdk::model::friend::FriendRequest;
use conversy_sdk::model::notification::Notification;
use conversy_sdk::relationship::Snapshot;
use icons::UserPlusIcon;

/// incoming pending friend requests with an accept action
pub struct Notifications {
    incoming: Snapshot<FriendRequest>,
    accepting: HashSet<AttrValue>,
}

pub enum NotificationsMsg {
    Loaded(Result<Vec<FriendRequest>, Error>),
    Accept(AttrValue),
    Accepted(AttrValue, Result<(), Error>),
}

impl Component for Notifications {
    type Message = NotificationsMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self::fetch(ctx);
        Self {
            incoming: Snapshot::Loading,
            accepting: HashSet::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            NotificationsMsg::Loaded(Ok(reqs)) => {
                self.incoming = Snapshot::Ready(reqs);
                true
            }
            NotificationsMsg::Loaded(Err(err)) => {
                log::error!("failed to load friend requests: {}", err);
                self.incoming = Snapshot::Failed(err.to_string().into());
                true
            }
            NotificationsMsg::Accept(id) => {
                // one accept per request at a time
                if !self.accepting.insert(id.clone()) {
                    return false;
                }
                ctx.link().send_future(async move {
                    let result = api::friends().accept_request(&id).await;
                    NotificationsMsg::Accepted(id, result)
                });
                true
            }
            NotificationsMsg::Accepted(id, result) => {
                self.accepting.remove(&id);
                match result {
                    Ok(()) => {
                        Notification::info("Friend request accepted").notify();
                        Self::fetch(ctx);
                    }
                    Err(err) => {
                        log::error!("failed to accept friend request: {}", err);
                        Notification::error(&err).notify();
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let content = match &self.incoming {
            Snapshot::Loading => html! {
                <div class="page-loading">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            },
            Snapshot::Failed(_) => html! {
                <div class="fetch-error">{"Failed to load friend requests."}</div>
            },
            Snapshot::Ready(reqs) if reqs.is_empty() => html! {
                <div class="card empty-state">
                    <h3>{"No notifications yet"}</h3>
                    <p>{"When someone sends you a friend request, it will show up here."}</p>
                </div>
            },
            Snapshot::Ready(reqs) => reqs
                .iter()
                .map(|req| self.view_request(ctx, req))
                .collect::<Html>(),
        };

        html! {
            <div class="page notifications-page">
                <h1>{"Notifications 🔔"}</h1>
                {content}
            </div>
        }
    }
}

impl Notifications {
    fn fetch(ctx: &Context<Self>) {
        ctx.link().send_future(async {
            NotificationsMsg::Loaded(api::friends().get_incoming_requests().await)
        });
    }

    fn view_request(&self, ctx: &Context<Self>, req: &FriendRequest) -> Html {
        let accepting = self.accepting.contains(&req.id);
        let onaccept = {
            let id = req.id.clone();
            ctx.link()
                .callback(move |_| NotificationsMsg::Accept(id.clone()))
        };
        // the server populates the sender side for incoming requests
        let (name, avatar) = match req.sender.profile() {
            Some(user) => (user.full_name.clone(), user.profile_pic.clone()),
            None => (AttrValue::from("Unknown user"), AttrValue::default()),
        };

        html! {
            <div class="card request-card" key={req.id.as_str()}>
                <div class="card-header">
                    <div class="avatar">
                        <img src={avatar} alt={name.clone()}/>
                    </div>
                    <div>
                        <h3 class="card-title">{name}</h3>
                        <p class="subtitle">{"wants to be your friend"}</p>
                    </div>
                </div>
                <button class="btn btn-primary" onclick={onaccept} disabled={accepting}>
                    <UserPlusIcon />
                    {if accepting { "Accepting..." } else { "Accept" }}
                </button>
            </div>
        }
    }
}
