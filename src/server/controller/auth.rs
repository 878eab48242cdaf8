use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{SessionDto, SignInDto, SignOutDto, SignUpDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::auth::AuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

#[utoipa::path(
    post,
    path = "/api/auth/sign-up/email",
    tag = AUTH_TAG,
    request_body = SignUpDto,
    responses(
        (status = 200, description = "User registered and signed in", body = SessionDto),
        (status = 400, description = "Invalid name, email or password", body = ErrorDto),
        (status = 422, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<SignUpDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let user = AuthService::new(&state.db)
        .sign_up(&payload.name, &payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::info!("Registered user {}", user.id);

    Ok((StatusCode::OK, Json(user.into_session_dto())))
}

#[utoipa::path(
    post,
    path = "/api/auth/sign-in/email",
    tag = AUTH_TAG,
    request_body = SignInDto,
    responses(
        (status = 200, description = "Signed in", body = SessionDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<SignInDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let user = AuthService::new(&state.db)
        .sign_in(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_session_dto())))
}

/// POST /api/auth/sign-out - End the current session
///
/// Succeeds whether or not the caller was signed in.
#[utoipa::path(
    post,
    path = "/api/auth/sign-out",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session ended", body = SignOutDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_out(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).flush().await?;

    Ok((StatusCode::OK, Json(SignOutDto { success: true })))
}

/// GET /api/auth/get-session - Read the signed-in user
///
/// Returns `null` rather than 401 when nobody is signed in, so the client can probe
/// the session on startup.
#[utoipa::path(
    get,
    path = "/api/auth/get-session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current session, or null when signed out", body = Option<SessionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    Ok((StatusCode::OK, Json(user.map(|u| u.into_session_dto()))))
}
