//! Client for the authentication endpoints.

use crate::client::api::base_url::{resolve_base_url, ExecutionContext};

#[cfg(feature = "web")]
use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::auth::{SessionDto, SignInDto, SignOutDto, SignUpDto},
};

/// Authentication client bound to one base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthClient {
    base_url: String,
}

impl AuthClient {
    /// Creates a client for the base URL resolved from `context`.
    pub fn new(context: &ExecutionContext) -> Self {
        Self {
            base_url: resolve_base_url(context),
        }
    }

    /// Creates a client for the environment the code is running in.
    pub fn detect() -> Self {
        Self::new(&ExecutionContext::detect())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/auth/{}", self.base_url, path)
    }
}

#[cfg(feature = "web")]
impl AuthClient {
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SessionDto, ApiError> {
        let body = serialize_json(&SignInDto {
            email: email.to_string(),
            password: password.to_string(),
        })?;

        let request = post(&self.endpoint("sign-in/email")).body(body);
        let response = send_request(request).await?;
        parse_response(response).await
    }

    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<SessionDto, ApiError> {
        let body = serialize_json(&SignUpDto {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })?;

        let request = post(&self.endpoint("sign-up/email")).body(body);
        let response = send_request(request).await?;
        parse_response(response).await
    }

    pub async fn sign_out(&self) -> Result<(), ApiError> {
        let response = send_request(post(&self.endpoint("sign-out"))).await?;
        let _: SignOutDto = parse_response(response).await?;
        Ok(())
    }

    /// Returns the signed-in session, or `None` when nobody is signed in.
    pub async fn get_session(&self) -> Result<Option<SessionDto>, ApiError> {
        let response = send_request(get(&self.endpoint("get-session"))).await?;
        parse_response(response).await
    }
}
