//! Client for the list endpoints.

use crate::client::api::base_url::{resolve_base_url, ExecutionContext};

#[cfg(feature = "web")]
use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::{classes::ClassDto, quran::SurahDto, role::RoleDto, tag::TagDto},
};

/// List client bound to the same resolved base URL as `AuthClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListClient {
    base_url: String,
}

impl ListClient {
    pub fn new(context: &ExecutionContext) -> Self {
        Self {
            base_url: resolve_base_url(context),
        }
    }

    pub fn detect() -> Self {
        Self::new(&ExecutionContext::detect())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }
}

#[cfg(feature = "web")]
impl ListClient {
    pub async fn classes(&self) -> Result<Vec<ClassDto>, ApiError> {
        let response = send_request(get(&self.endpoint("kelas"))).await?;
        parse_response(response).await
    }

    pub async fn quran(&self) -> Result<Vec<SurahDto>, ApiError> {
        let response = send_request(get(&self.endpoint("quran"))).await?;
        parse_response(response).await
    }

    pub async fn tags(&self) -> Result<Vec<TagDto>, ApiError> {
        let response = send_request(get(&self.endpoint("tags"))).await?;
        parse_response(response).await
    }

    /// Requires a signed-in session; fails with status 401 otherwise.
    pub async fn roles(&self) -> Result<Vec<RoleDto>, ApiError> {
        let response = send_request(get(&self.endpoint("admin/roles"))).await?;
        parse_response(response).await
    }
}

#[cfg(feature = "web")]
pub async fn get_classes() -> Result<Vec<ClassDto>, ApiError> {
    ListClient::detect().classes().await
}

#[cfg(feature = "web")]
pub async fn get_quran() -> Result<Vec<SurahDto>, ApiError> {
    ListClient::detect().quran().await
}

#[cfg(feature = "web")]
pub async fn get_tags() -> Result<Vec<TagDto>, ApiError> {
    ListClient::detect().tags().await
}

#[cfg(feature = "web")]
pub async fn get_roles() -> Result<Vec<RoleDto>, ApiError> {
    ListClient::detect().roles().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::api::auth::AuthClient;

    #[test]
    fn builds_list_endpoints_from_resolved_base_url() {
        let client = ListClient::new(&ExecutionContext {
            origin: None,
            app_url: Some("https://tahfidz.example/".to_string()),
        });

        assert_eq!(client.endpoint("kelas"), "https://tahfidz.example/api/kelas");
        assert_eq!(
            client.endpoint("admin/roles"),
            "https://tahfidz.example/api/admin/roles"
        );
    }

    #[test]
    fn shares_base_url_with_auth_client() {
        let context = ExecutionContext {
            origin: Some("https://pondok.example".to_string()),
            app_url: Some("https://app.example".to_string()),
        };

        let list = ListClient::new(&context);
        let auth = AuthClient::new(&context);

        assert_eq!(list.base_url, auth.base_url());
    }
}
