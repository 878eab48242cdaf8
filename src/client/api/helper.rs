use crate::{client::model::error::ApiError, model::api::ErrorDto};
use reqwasm::http::{Request, RequestCredentials, Response};
use serde::de::DeserializeOwned;

/// Parses a JSON response, turning non-2xx statuses into `ApiError` with the server's message.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::client(format!("Failed to parse response: {}", e)))
    } else {
        let message = if let Ok(error_dto) = response.json::<ErrorDto>().await {
            error_dto.error
        } else {
            response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string())
        };

        Err(ApiError { status, message })
    }
}

/// Create a GET request with credentials
pub fn get(url: &str) -> Request {
    Request::get(url).credentials(RequestCredentials::Include)
}

/// Create a POST request with credentials and JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::client(format!("Failed to send request: {}", e)))
}

pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::client(format!("Failed to serialize request: {}", e)))
}
