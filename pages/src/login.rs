use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;
use yew_router::scope_ext::RouterScopeExt;

use conversy_sdk::api;
use conversy_sdk::error::Error;
use conversy_sdk::model::page::Page;
use conversy_sdk::model::user::{AuthResponse, LoginRequest};
use conversy_sdk::model::TOKEN;
use conversy_sdk::state::{AppState, Notify};
use icons::LogoIcon;

#[derive(Default)]
pub struct Login {
    email_ref: NodeRef,
    pwd_ref: NodeRef,
    logging_in: bool,
    error: Option<AttrValue>,
}

pub enum LoginMsg {
    Submit(SubmitEvent),
    Login,
    Success(Box<AuthResponse>),
    Failed(Error),
}

impl Component for Login {
    type Message = LoginMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        // already signed in: nothing to do here
        if AppState::get().is_logged_in() {
            ctx.link().navigator().unwrap().push(&Page::Home);
        }
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LoginMsg::Submit(event) => {
                event.prevent_default();
                ctx.link().send_message(LoginMsg::Login);
                false
            }
            LoginMsg::Login => {
                let email = self.email_ref.cast::<HtmlInputElement>().unwrap().value();
                let password = self.pwd_ref.cast::<HtmlInputElement>().unwrap().value();
                ctx.link().send_future(async move {
                    match api::users().sign_in(LoginRequest { email, password }).await {
                        Ok(resp) => LoginMsg::Success(Box::new(resp)),
                        Err(err) => LoginMsg::Failed(err),
                    }
                });
                self.logging_in = true;
                self.error = None;
                true
            }
            LoginMsg::Success(resp) => {
                if let Some(token) = &resp.token {
                    if let Err(err) = utils::set_local_storage(TOKEN, token) {
                        log::error!("failed to store token: {:?}", err);
                    }
                }
                let onboarded = resp.user.is_onboarded;
                AppState {
                    login_user: resp.user,
                }
                .notify();
                let page = if onboarded { Page::Home } else { Page::Onboarding };
                ctx.link().navigator().unwrap().push(&page);
                false
            }
            LoginMsg::Failed(err) => {
                log::error!("login failed: {}", err);
                self.logging_in = false;
                self.error = Some(err.to_string().into());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(LoginMsg::Submit);
        let error = match &self.error {
            Some(reason) => html!(<div class="form-error">{reason.clone()}</div>),
            None => html!(),
        };
        let submit_label = if self.logging_in {
            "Signing in…"
        } else {
            "Sign in 🚀"
        };

        html! {
            <div class="auth-page">
                <div class="auth-grid">
                    <div class="auth-card">
                        <div class="auth-logo">
                            <LogoIcon />
                            <span class="brand">{"Conversy"}</span>
                        </div>
                        <h1>{"Welcome back 👋"}</h1>
                        <p class="subtitle">{"Sign in and continue chatting without borders."}</p>
                        {error}
                        <form {onsubmit}>
                            <input
                                type="email"
                                ref={self.email_ref.clone()}
                                placeholder="Email address"
                                required=true />
                            <input
                                type="password"
                                ref={self.pwd_ref.clone()}
                                placeholder="Password"
                                required=true />
                            <button type="submit" class="btn btn-primary" disabled={self.logging_in}>
                                {submit_label}
                            </button>
                        </form>
                        <p class="auth-switch">
                            {"New here? "}
                            <Link<Page> to={Page::Register}>{"Create an account"}</Link<Page>>
                        </p>
                    </div>
                    <div class="auth-brand-side">
                        <div class="auth-brand-card">
                            <LogoIcon />
                            <h2>{"Conversations feel better here ✨"}</h2>
                            <p>{"Practice real conversations, make friends worldwide, and grow naturally, together."}</p>
                        </div>
                    </div>
                </div>
            </div>
        }
    }
}
