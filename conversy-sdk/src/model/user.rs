use serde::{Deserialize, Serialize};
use yew::AttrValue;

/// user profile as the server sends it
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: AttrValue,
    pub full_name: AttrValue,
    #[serde(default)]
    pub email: Option<AttrValue>,
    #[serde(default)]
    pub bio: AttrValue,
    #[serde(default)]
    pub profile_pic: AttrValue,
    #[serde(default)]
    pub native_language: AttrValue,
    #[serde(default)]
    pub learning_language: AttrValue,
    #[serde(default)]
    pub location: AttrValue,
    #[serde(default)]
    pub is_onboarded: bool,
}

#[derive(Debug, Default, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// profile fields submitted when completing onboarding
#[derive(Debug, Default, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRequest {
    pub full_name: String,
    pub bio: String,
    pub native_language: String,
    pub learning_language: String,
    pub location: String,
    pub profile_pic: String,
}

/// shape shared by the signup/login/me/onboarding endpoints
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub user: User,
    #[serde(default)]
    pub token: Option<AttrValue>,
}
