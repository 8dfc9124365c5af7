use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use conversy_sdk::api;
use conversy_sdk::error::Error;
use conversy_sdk::model::notification::Notification;
use conversy_sdk::model::page::Page;
use conversy_sdk::model::user::{AuthResponse, OnboardingRequest, User};
use conversy_sdk::model::{AVATAR_SERVICE, LANGUAGES};
use conversy_sdk::state::{AppState, Notify};
use icons::{CameraIcon, LoaderIcon, LogoIcon, MapPinIcon, ShuffleIcon};

pub struct Onboarding {
    name_ref: NodeRef,
    bio_ref: NodeRef,
    native_ref: NodeRef,
    learning_ref: NodeRef,
    location_ref: NodeRef,
    avatar: AttrValue,
    user: Option<User>,
    submitting: bool,
    prefilled: bool,
}

pub enum OnboardingMsg {
    AuthLoaded(Result<AuthResponse, Error>),
    RandomAvatar,
    Submit(SubmitEvent),
    Done(Result<AuthResponse, Error>),
}

impl Component for Onboarding {
    type Message = OnboardingMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let state = AppState::get();
        let user = if state.is_logged_in() {
            Some(state.login_user.clone())
        } else {
            ctx.link()
                .send_future(async { OnboardingMsg::AuthLoaded(api::users().auth_user().await) });
            None
        };
        let avatar = user
            .as_ref()
            .map(|u| u.profile_pic.clone())
            .unwrap_or_default();
        Self {
            name_ref: NodeRef::default(),
            bio_ref: NodeRef::default(),
            native_ref: NodeRef::default(),
            learning_ref: NodeRef::default(),
            location_ref: NodeRef::default(),
            avatar,
            user,
            submitting: false,
            prefilled: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            OnboardingMsg::AuthLoaded(Ok(resp)) => {
                self.avatar = resp.user.profile_pic.clone();
                AppState {
                    login_user: resp.user.clone(),
                }
                .notify();
                self.user = Some(resp.user);
                true
            }
            OnboardingMsg::AuthLoaded(Err(err)) => {
                if !err.is_unauthorized() {
                    Notification::error(&err).notify();
                }
                ctx.link().navigator().unwrap().push(&Page::Login);
                false
            }
            OnboardingMsg::RandomAvatar => {
                self.avatar =
                    format!("{}/{}.png", AVATAR_SERVICE, utils::random_avatar_index()).into();
                Notification::info("Random profile picture generated!").notify();
                true
            }
            OnboardingMsg::Submit(event) => {
                event.prevent_default();
                let req = OnboardingRequest {
                    full_name: self.name_ref.cast::<HtmlInputElement>().unwrap().value(),
                    bio: self.bio_ref.cast::<HtmlTextAreaElement>().unwrap().value(),
                    native_language: self.native_ref.cast::<HtmlSelectElement>().unwrap().value(),
                    learning_language: self
                        .learning_ref
                        .cast::<HtmlSelectElement>()
                        .unwrap()
                        .value(),
                    location: self.location_ref.cast::<HtmlInputElement>().unwrap().value(),
                    profile_pic: self.avatar.to_string(),
                };
                if req.full_name.is_empty()
                    || req.native_language.is_empty()
                    || req.learning_language.is_empty()
                {
                    Notification::warn("Please fill in your name and languages").notify();
                    return false;
                }
                ctx.link().send_future(async move {
                    OnboardingMsg::Done(api::users().complete_onboarding(req).await)
                });
                self.submitting = true;
                true
            }
            OnboardingMsg::Done(Ok(resp)) => {
                Notification::info("Profile onboarded successfully").notify();
                AppState {
                    login_user: resp.user,
                }
                .notify();
                ctx.link().navigator().unwrap().push(&Page::Home);
                false
            }
            OnboardingMsg::Done(Err(err)) => {
                log::error!("onboarding failed: {}", err);
                Notification::error(&err).notify();
                self.submitting = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.user.is_none() {
            return html! {
                <div class="page-loading">
                    <span class="loading loading-spinner loading-lg"></span>
                </div>
            };
        }

        let onsubmit = ctx.link().callback(OnboardingMsg::Submit);
        let onshuffle = ctx.link().callback(|_| OnboardingMsg::RandomAvatar);
        let avatar = if self.avatar.is_empty() {
            html!(<div class="avatar-placeholder"><CameraIcon /></div>)
        } else {
            html!(<img src={self.avatar.clone()} alt="Profile Preview"/>)
        };
        let submit_label = if self.submitting {
            html! { <><LoaderIcon />{" Onboarding..."}</> }
        } else {
            html! { <><LogoIcon />{" Complete Onboarding"}</> }
        };

        html! {
            <div class="auth-page">
                <div class="auth-card onboarding-card">
                    <div class="onboarding-header">
                        <LogoIcon />
                        <h1>{"Complete your profile ✨"}</h1>
                        <p class="subtitle">
                            {"Help others know you better and find the right language partners"}
                        </p>
                    </div>
                    <form {onsubmit}>
                        <div class="avatar-preview">
                            {avatar}
                            <button type="button" class="btn btn-ghost" onclick={onshuffle}>
                                <ShuffleIcon />
                                {"Generate Random Avatar"}
                            </button>
                        </div>
                        <input
                            type="text"
                            ref={self.name_ref.clone()}
                            placeholder="Your full name" />
                        <textarea
                            ref={self.bio_ref.clone()}
                            placeholder="Tell others about yourself and your language goals" />
                        <div class="form-row">
                            <select ref={self.native_ref.clone()}>
                                <option value="" selected=true>{"Native language"}</option>
                                {Self::language_options()}
                            </select>
                            <select ref={self.learning_ref.clone()}>
                                <option value="" selected=true>{"Learning language"}</option>
                                {Self::language_options()}
                            </select>
                        </div>
                        <div class="input-with-icon">
                            <MapPinIcon />
                            <input
                                type="text"
                                ref={self.location_ref.clone()}
                                placeholder="City, Country" />
                        </div>
                        <button type="submit" class="btn btn-primary" disabled={self.submitting}>
                            {submit_label}
                        </button>
                    </form>
                </div>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.prefilled {
            return;
        }
        // prefill from the current profile once the form exists; refs
        // instead of controlled inputs, so this only has to happen once
        if let Some(user) = &self.user {
            self.prefilled = true;
            if let Some(input) = self.name_ref.cast::<HtmlInputElement>() {
                input.set_value(&user.full_name);
            }
            if let Some(area) = self.bio_ref.cast::<HtmlTextAreaElement>() {
                area.set_value(&user.bio);
            }
            if let Some(select) = self.native_ref.cast::<HtmlSelectElement>() {
                select.set_value(&user.native_language);
            }
            if let Some(select) = self.learning_ref.cast::<HtmlSelectElement>() {
                select.set_value(&user.learning_language);
            }
            if let Some(input) = self.location_ref.cast::<HtmlInputElement>() {
                input.set_value(&user.location);
            }
        }
    }
}

impl Onboarding {
    fn language_options() -> Html {
        LANGUAGES
            .iter()
            .map(|lang| {
                html! {
                    <option value={*lang} key={*lang}>{utils::capitalize(lang)}</option>
                }
            })
            .collect()
    }
}
