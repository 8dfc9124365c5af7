use crate::error::Result;
use crate::model::user::{AuthResponse, LoginRequest, OnboardingRequest, SignupRequest};

#[async_trait::async_trait(?Send)]
pub trait UserApi {
    async fn signup(&self, req: SignupRequest) -> Result<AuthResponse>;

    async fn sign_in(&self, req: LoginRequest) -> Result<AuthResponse>;

    async fn logout(&self) -> Result<()>;

    /// current session's user, `Error::UnAuthorized` without a valid token
    async fn auth_user(&self) -> Result<AuthResponse>;

    async fn complete_onboarding(&self, req: OnboardingRequest) -> Result<AuthResponse>;
}
