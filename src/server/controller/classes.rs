use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, classes::ClassDto},
    server::{
        controller::listing::list_endpoint, error::AppError, model::classes::ClassList,
        state::AppState,
    },
};

pub static CLASS_TAG: &str = "kelas";

#[utoipa::path(
    get,
    path = "/api/kelas",
    tag = CLASS_TAG,
    responses(
        (status = 200, description = "All classes ordered by name", body = Vec<ClassDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_classes(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let classes = list_endpoint::<ClassList>(&state, &session).await?;

    Ok((StatusCode::OK, Json(classes)))
}
