use regex::Regex;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;
use yew_router::scope_ext::RouterScopeExt;
use zxcvbn::zxcvbn;

use conversy_sdk::api;
use conversy_sdk::error::Error;
use conversy_sdk::model::page::Page;
use conversy_sdk::model::user::{AuthResponse, SignupRequest};
use conversy_sdk::model::TOKEN;
use conversy_sdk::state::{AppState, Notify};
use icons::LogoIcon;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Default)]
pub struct Register {
    name_ref: NodeRef,
    email_ref: NodeRef,
    pwd_ref: NodeRef,
    pwd_strength: u8,
    submitting: bool,
    error: Option<AttrValue>,
}

pub enum RegisterMsg {
    Submit(SubmitEvent),
    Signup,
    OnPwdInput(InputEvent),
    Success(Box<AuthResponse>),
    Failed(Error),
}

impl Component for Register {
    type Message = RegisterMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        if AppState::get().is_logged_in() {
            ctx.link().navigator().unwrap().push(&Page::Home);
        }
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            RegisterMsg::Submit(event) => {
                event.prevent_default();
                ctx.link().send_message(RegisterMsg::Signup);
                false
            }
            RegisterMsg::Signup => {
                let full_name = self.name_ref.cast::<HtmlInputElement>().unwrap().value();
                let email = self.email_ref.cast::<HtmlInputElement>().unwrap().value();
                let password = self.pwd_ref.cast::<HtmlInputElement>().unwrap().value();

                let email_re = Regex::new(r"^[\w.+-]+@[\w-]+(\.[\w-]+)+$").unwrap();
                if !email_re.is_match(&email) {
                    self.error = Some("Please enter a valid email address".into());
                    return true;
                }
                if password.len() < MIN_PASSWORD_LEN {
                    self.error =
                        Some("Password must be at least 6 characters long".into());
                    return true;
                }

                ctx.link().send_future(async move {
                    let req = SignupRequest {
                        full_name,
                        email,
                        password,
                    };
                    match api::users().signup(req).await {
                        Ok(resp) => RegisterMsg::Success(Box::new(resp)),
                        Err(err) => RegisterMsg::Failed(err),
                    }
                });
                self.submitting = true;
                self.error = None;
                true
            }
            RegisterMsg::OnPwdInput(event) => {
                let input: HtmlInputElement = event.target_unchecked_into();
                self.pwd_strength = zxcvbn(&input.value(), &[])
                    .map(|entropy| entropy.score())
                    .unwrap_or(0);
                true
            }
            RegisterMsg::Success(resp) => {
                if let Some(token) = &resp.token {
                    if let Err(err) = utils::set_local_storage(TOKEN, token) {
                        log::error!("failed to store token: {:?}", err);
                    }
                }
                AppState {
                    login_user: resp.user,
                }
                .notify();
                // fresh accounts always go through onboarding
                ctx.link().navigator().unwrap().push(&Page::Onboarding);
                false
            }
            RegisterMsg::Failed(err) => {
                log::error!("signup failed: {}", err);
                self.submitting = false;
                self.error = Some(err.to_string().into());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(RegisterMsg::Submit);
        let onpwd = ctx.link().callback(RegisterMsg::OnPwdInput);
        let error = match &self.error {
            Some(reason) => html!(<div class="form-error">{reason.clone()}</div>),
            None => html!(),
        };
        let strength = match self.pwd_strength {
            0 | 1 => "weak",
            2 => "fair",
            3 => "good",
            _ => "strong",
        };

        html! {
            <div class="auth-page">
                <div class="auth-grid">
                    <div class="auth-card">
                        <div class="auth-logo">
                            <LogoIcon />
                            <span class="brand">{"Conversy"}</span>
                        </div>
                        <h1>{"Create an account 🎉"}</h1>
                        <p class="subtitle">{"Join Conversy and start your language journey."}</p>
                        {error}
                        <form {onsubmit}>
                            <input
                                type="text"
                                ref={self.name_ref.clone()}
                                placeholder="Full name"
                                required=true />
                            <input
                                type="email"
                                ref={self.email_ref.clone()}
                                placeholder="Email address"
                                required=true />
                            <input
                                type="password"
                                ref={self.pwd_ref.clone()}
                                oninput={onpwd}
                                placeholder="Password"
                                required=true />
                            <div class={classes!("pwd-strength", strength)}>
                                {"Password strength: "}{strength}
                            </div>
                            <button type="submit" class="btn btn-primary" disabled={self.submitting}>
                                {if self.submitting { "Creating account…" } else { "Sign up" }}
                            </button>
                        </form>
                        <p class="auth-switch">
                            {"Already have an account? "}
                            <Link<Page> to={Page::Login}>{"Sign in"}</Link<Page>>
                        </p>
                    </div>
                    <div class="auth-brand-side">
                        <div class="auth-brand-card">
                            <LogoIcon />
                            <h2>{"Learn by talking 🌍"}</h2>
                            <p>{"Find native speakers of the language you are learning and help them with yours."}</p>
                        </div>
                    </div>
                </div>
            </div>
        }
    }
}
