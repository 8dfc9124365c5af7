use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::Link;
use yew_router::scope_ext::RouterScopeExt;
use yewdux::Dispatch;

use conversy_sdk::model::page::Page;
use conversy_sdk::state::AppState;
use icons::{BellIcon, HomeIcon, LogoIcon, UsersIcon};

pub struct Sidebar {
    app_state: Rc<AppState>,
    _app_dis: Dispatch<AppState>,
}

pub enum SidebarMsg {
    AppStateChanged(Rc<AppState>),
}

impl Component for Sidebar {
    type Message = SidebarMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let app_dis =
            Dispatch::global().subscribe_silent(ctx.link().callback(SidebarMsg::AppStateChanged));
        Self {
            app_state: app_dis.get(),
            _app_dis: app_dis,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SidebarMsg::AppStateChanged(state) => {
                self.app_state = state;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let current = ctx.link().route::<Page>().unwrap_or(Page::Home);
        let user = &self.app_state.login_user;

        let nav_class = |page: &Page| {
            if current == *page {
                "nav-link active"
            } else {
                "nav-link"
            }
        };

        html! {
            <aside class="sidebar">
                <div class="sidebar-logo">
                    <Link<Page> to={Page::Home} classes="navbar-logo">
                        <LogoIcon />
                        <span class="brand">{"Conversy"}</span>
                    </Link<Page>>
                </div>
                <nav class="sidebar-nav">
                    <Link<Page> to={Page::Home} classes={nav_class(&Page::Home)}>
                        <HomeIcon />
                        {"Home"}
                    </Link<Page>>
                    <Link<Page> to={Page::Friends} classes={nav_class(&Page::Friends)}>
                        <UsersIcon />
                        {"Friends"}
                    </Link<Page>>
                    <Link<Page> to={Page::Notifications} classes={nav_class(&Page::Notifications)}>
                        <BellIcon />
                        {"Notifications"}
                    </Link<Page>>
                </nav>
                <div class="sidebar-profile">
                    <div class="avatar">
                        <img src={user.profile_pic.clone()} alt="User Avatar" referrerpolicy="no-referrer"/>
                    </div>
                    <div class="sidebar-profile-info">
                        <p class="name">{user.full_name.clone()}</p>
                        <p class="online">
                            <span class="online-dot"></span>
                            {"Online"}
                        </p>
                    </div>
                </div>
            </aside>
        }
    }
}
