use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the request's session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user ID that no longer exists.
    ///
    /// Happens when a user is deleted while their session is still alive.
    /// Results in a 401 Unauthorized response.
    #[error("User {0} stored in session was not found in the database")]
    UserNotInDatabase(i32),

    /// Sign-in failed because the email is unknown or the password is wrong.
    ///
    /// Both cases share one message so the response does not reveal which emails
    /// are registered. Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Sign-up attempted with an email that already belongs to a user.
    ///
    /// Results in a 422 Unprocessable Entity response.
    #[error("User already exists")]
    UserAlreadyExists,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Unauthorized"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
/// - `UserAlreadyExists` → 422 Unprocessable Entity with "User already exists"
///
/// Session failures are logged at debug level for diagnostics while keeping the
/// client-facing message generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Unauthorized".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::UserAlreadyExists => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
