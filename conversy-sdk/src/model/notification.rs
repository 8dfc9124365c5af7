use yew::AttrValue;
use yewdux::{Dispatch, Store};

use crate::error::Error;

/// toast message, published through yewdux and rendered by the
/// notification component
#[derive(Default, Debug, Clone, PartialEq, Store)]
pub struct Notification {
    pub id: i64,
    pub content: AttrValue,
    pub delay: u32,
    pub type_: NotificationType,
}

impl Notification {
    pub fn info(content: impl ToString) -> Self {
        Self {
            id: chrono::Utc::now().timestamp_millis(),
            content: content.to_string().into(),
            type_: NotificationType::Info,
            delay: 3000,
        }
    }

    pub fn warn(content: impl ToString) -> Self {
        Self {
            id: chrono::Utc::now().timestamp_millis(),
            content: content.to_string().into(),
            type_: NotificationType::Warn,
            delay: 3000,
        }
    }

    pub fn error(err: &Error) -> Self {
        Self {
            id: chrono::Utc::now().timestamp_millis(),
            content: err.to_string().into(),
            type_: NotificationType::Error,
            delay: 5000,
        }
    }

    pub fn notify(self) {
        Dispatch::<Notification>::global().set(self);
    }
}

#[derive(Default, Clone, Debug, PartialEq)]
pub enum NotificationType {
    #[default]
    Info,
    Warn,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_toasts_linger_longer() {
        let info = Notification::info("saved");
        let warn = Notification::warn("check your input");
        let error = Notification::error(&Error::Network("connection refused".into()));

        assert_eq!(info.type_, NotificationType::Info);
        assert_eq!(warn.delay, info.delay);
        assert!(error.delay > info.delay);
        assert_eq!(error.content.as_str(), "network error: connection refused");
    }
}
