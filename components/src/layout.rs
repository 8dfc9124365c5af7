use std::rc::Rc;

use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;
use yewdux::Dispatch;

use conversy_sdk::api;
use conversy_sdk::error::Error;
use conversy_sdk::model::notification::Notification;
use conversy_sdk::model::page::Page;
use conversy_sdk::model::user::AuthResponse;
use conversy_sdk::state::{AppState, Notify, ThemeState};

use crate::navbar::Navbar;
use crate::sidebar::Sidebar;

/// shell around every authenticated page: probes the session once,
/// redirects to login/onboarding when needed, and only mounts its
/// children after the probe settled so they never fetch with a dead
/// session
pub struct Layout {
    ready: bool,
    _theme_dis: Dispatch<ThemeState>,
}

pub enum LayoutMsg {
    AuthLoaded(Result<AuthResponse, Error>),
    SwitchTheme(Rc<ThemeState>),
}

#[derive(Properties, Clone, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
}

impl Component for Layout {
    type Message = LayoutMsg;
    type Properties = LayoutProps;

    fn create(ctx: &Context<Self>) -> Self {
        let theme_dis = Dispatch::<ThemeState>::global()
            .subscribe_silent(ctx.link().callback(LayoutMsg::SwitchTheme));
        utils::set_theme(&theme_dis.get().to_string());

        let ready = AppState::get().is_logged_in();
        if !ready {
            ctx.link()
                .send_future(async { LayoutMsg::AuthLoaded(api::users().auth_user().await) });
        }
        Self {
            ready,
            _theme_dis: theme_dis,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LayoutMsg::AuthLoaded(Ok(resp)) => {
                if !resp.user.is_onboarded {
                    ctx.link().navigator().unwrap().push(&Page::Onboarding);
                }
                AppState {
                    login_user: resp.user,
                }
                .notify();
                self.ready = true;
                true
            }
            LayoutMsg::AuthLoaded(Err(err)) => {
                if !err.is_unauthorized() {
                    log::error!("auth probe failed: {}", err);
                    Notification::error(&err).notify();
                }
                ctx.link().navigator().unwrap().push(&Page::Login);
                false
            }
            LayoutMsg::SwitchTheme(theme) => {
                utils::set_theme(&theme.to_string());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.ready {
            return html! {
                <div class="page-loading">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            };
        }
        html! {
            <div class="app-shell">
                <Sidebar />
                <div class="app-main">
                    <Navbar />
                    <main>
                        {ctx.props().children.clone()}
                    </main>
                </div>
            </div>
        }
    }
}
