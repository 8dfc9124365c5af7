use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// error payload the server sends along with a non-2xx status
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerError {
    pub message: Option<String>,
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}", msg),
            None => write!(f, "unknown server error"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// request never reached the server or the response could not be read
    #[error("network error: {0}")]
    Network(String),
    /// server rejected the request with its own message
    #[error("{0}")]
    Server(ServerError),
    /// missing or expired session
    #[error("unauthorized")]
    UnAuthorized,
    /// browser side failure, local storage for the most part
    #[error("javascript error: {0}")]
    JavaScript(String),
}

impl From<gloo_net::Error> for Error {
    fn from(value: gloo_net::Error) -> Self {
        Self::Network(value.to_string())
    }
}

impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::JavaScript(format!("{:?}", value))
    }
}

impl Error {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::UnAuthorized)
    }
}
