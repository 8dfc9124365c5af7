use gloo_net::http::Request;

use crate::api::user::UserApi;
use crate::api::{token, AUTHORIZE_HEADER};
use crate::error::Result;
use crate::model::user::{AuthResponse, LoginRequest, OnboardingRequest, SignupRequest};

use super::RespStatus;

pub struct UserHttp;

#[async_trait::async_trait(?Send)]
impl UserApi for UserHttp {
    async fn signup(&self, req: SignupRequest) -> Result<AuthResponse> {
        let resp: AuthResponse = Request::post("/api/auth/signup")
            .json(&req)?
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(resp)
    }

    async fn sign_in(&self, req: LoginRequest) -> Result<AuthResponse> {
        let resp: AuthResponse = Request::post("/api/auth/login")
            .json(&req)?
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(resp)
    }

    async fn logout(&self) -> Result<()> {
        Request::post("/api/auth/logout")
            .header(AUTHORIZE_HEADER, &token())
            .send()
            .await?
            .success()
            .await?;
        Ok(())
    }

    async fn auth_user(&self) -> Result<AuthResponse> {
        let resp: AuthResponse = Request::get("/api/auth/me")
            .header(AUTHORIZE_HEADER, &token())
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(resp)
    }

    async fn complete_onboarding(&self, req: OnboardingRequest) -> Result<AuthResponse> {
        let resp: AuthResponse = Request::post("/api/auth/onboarding")
            .header(AUTHORIZE_HEADER, &token())
            .json(&req)?
            .send()
            .await?
            .success()
            .await?
            .json()
            .await?;
        Ok(resp)
    }
}
