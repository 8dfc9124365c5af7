use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::Link;
use yew_router::scope_ext::RouterScopeExt;
use yewdux::Dispatch;

use conversy_sdk::api;
use conversy_sdk::error::Error;
use conversy_sdk::model::notification::Notification;
use conversy_sdk::model::page::Page;
use conversy_sdk::model::TOKEN;
use conversy_sdk::state::{AppState, Notify, ThemeState};
use icons::{BellIcon, LogoIcon, LogoutIcon, MoonIcon, SunIcon};

pub struct Navbar {
    app_state: Rc<AppState>,
    _app_dis: Dispatch<AppState>,
    theme: Rc<ThemeState>,
    _theme_dis: Dispatch<ThemeState>,
}

pub enum NavbarMsg {
    AppStateChanged(Rc<AppState>),
    ThemeChanged(Rc<ThemeState>),
    ToggleTheme,
    Logout,
    LogoutDone(Result<(), Error>),
}

impl Component for Navbar {
    type Message = NavbarMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let app_dis =
            Dispatch::global().subscribe_silent(ctx.link().callback(NavbarMsg::AppStateChanged));
        let theme_dis =
            Dispatch::global().subscribe_silent(ctx.link().callback(NavbarMsg::ThemeChanged));
        Self {
            app_state: app_dis.get(),
            _app_dis: app_dis,
            theme: theme_dis.get(),
            _theme_dis: theme_dis,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            NavbarMsg::AppStateChanged(state) => {
                self.app_state = state;
                true
            }
            NavbarMsg::ThemeChanged(theme) => {
                self.theme = theme;
                true
            }
            NavbarMsg::ToggleTheme => {
                Dispatch::<ThemeState>::global().reduce(|theme| theme.toggle().into());
                false
            }
            NavbarMsg::Logout => {
                ctx.link()
                    .send_future(async { NavbarMsg::LogoutDone(api::users().logout().await) });
                false
            }
            NavbarMsg::LogoutDone(result) => {
                // the local session is cleared even when the server call
                // failed; the user asked to leave
                if let Err(err) = result {
                    log::error!("logout request failed: {}", err);
                    Notification::error(&err).notify();
                }
                if let Err(err) = utils::remove_local_storage(TOKEN) {
                    log::error!("failed to clear token: {:?}", err);
                }
                AppState::default().notify();
                ctx.link().navigator().unwrap().push(&Page::Login);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let user = &self.app_state.login_user;
        let theme_icon = match *self.theme {
            ThemeState::Light => html!(<MoonIcon />),
            ThemeState::Dark => html!(<SunIcon />),
        };
        let onlogout = ctx.link().callback(|_| NavbarMsg::Logout);
        let ontheme = ctx.link().callback(|_| NavbarMsg::ToggleTheme);

        html! {
            <nav class="navbar">
                <Link<Page> to={Page::Home} classes="navbar-logo">
                    <LogoIcon />
                    <span class="brand">{"Conversy"}</span>
                </Link<Page>>
                <div class="navbar-actions">
                    <Link<Page> to={Page::Notifications} classes="btn btn-ghost btn-circle">
                        <BellIcon />
                    </Link<Page>>
                    <button class="btn btn-ghost btn-circle" onclick={ontheme} title="Toggle theme">
                        {theme_icon}
                    </button>
                    <div class="avatar">
                        <img src={user.profile_pic.clone()} alt="User Avatar" referrerpolicy="no-referrer"/>
                    </div>
                    <button class="btn btn-ghost btn-circle" onclick={onlogout} title="Logout">
                        <LogoutIcon />
                    </button>
                </div>
            </nav>
        }
    }
}
