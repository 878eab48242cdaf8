use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, role::RoleDto},
    server::{
        controller::listing::list_endpoint, error::AppError, model::role::RoleList,
        state::AppState,
    },
};

pub static ROLE_TAG: &str = "role";

/// GET /api/admin/roles - List every role
///
/// # Authentication
/// Requires a session whose user still exists
#[utoipa::path(
    get,
    path = "/api/admin/roles",
    tag = ROLE_TAG,
    responses(
        (status = 200, description = "All roles ordered by ID", body = Vec<RoleDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_roles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let roles = list_endpoint::<RoleList>(&state, &session).await?;

    Ok((StatusCode::OK, Json(roles)))
}
