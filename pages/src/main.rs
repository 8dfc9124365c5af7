mod friends;
mod home;
mod login;
mod notifications;
mod onboarding;
mod register;

use yew::prelude::*;
use yew_router::prelude::Redirect;
use yew_router::{BrowserRouter, Switch};

use components::layout::Layout;
use components::notification::NotificationCom;
use conversy_sdk::model::page::Page;
use conversy_sdk::state::{Notify, ThemeState};

use crate::friends::Friends;
use crate::home::Home;
use crate::login::Login;
use crate::notifications::Notifications;
use crate::onboarding::Onboarding;
use crate::register::Register;

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Page> render={move |page|
                match page {
                    Page::Home => html!{<Layout><Home/></Layout>},
                    Page::Friends => html!{<Layout><Friends/></Layout>},
                    Page::Notifications => html!{<Layout><Notifications/></Layout>},
                    Page::Login => html!{<Login/>},
                    Page::Register => html!{<Register/>},
                    Page::Onboarding => html!{<Onboarding/>},
                    Page::NotFound => html!{<Redirect<Page> to={Page::Home}/>},
                }
            }/>
            <NotificationCom />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    utils::set_theme(&ThemeState::get().to_string());
    yew::Renderer::<App>::new().render();
}
