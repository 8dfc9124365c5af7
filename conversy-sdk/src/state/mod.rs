use std::fmt::{Display, Formatter};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yewdux::{Dispatch, Store};

use crate::model::user::User;

/// publish/read helpers shared by every global store
pub trait Notify: Store {
    fn notify(self)
    where
        Self: Sized,
    {
        Dispatch::<Self>::global().set(self);
    }

    fn get() -> Rc<Self>
    where
        Self: Sized,
    {
        Dispatch::<Self>::global().get()
    }
}

impl<T: Store> Notify for T {}

/// signed-in user, set after login or a successful auth probe
#[derive(Default, Debug, Clone, PartialEq, Store)]
pub struct AppState {
    pub login_user: User,
}

impl AppState {
    pub fn is_logged_in(&self) -> bool {
        !self.login_user.id.is_empty()
    }
}

#[derive(Default, Clone, PartialEq, Debug, Store, Serialize, Deserialize)]
#[store(storage = "local")]
#[serde(rename_all = "lowercase")]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

impl ThemeState {
    pub fn toggle(&self) -> Self {
        match self {
            ThemeState::Light => ThemeState::Dark,
            ThemeState::Dark => ThemeState::Light,
        }
    }
}

impl Display for ThemeState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeState::Light => write!(f, "light"),
            ThemeState::Dark => write!(f, "dark"),
        }
    }
}

impl From<&str> for ThemeState {
    fn from(value: &str) -> Self {
        match value {
            "dark" => ThemeState::Dark,
            _ => ThemeState::Light,
        }
    }
}
