use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, tag::TagDto},
    server::{
        controller::listing::list_endpoint, error::AppError, model::tag::TagList, state::AppState,
    },
};

pub static TAG_TAG: &str = "tag";

#[utoipa::path(
    get,
    path = "/api/tags",
    tag = TAG_TAG,
    responses(
        (status = 200, description = "All tags ordered by category, then text", body = Vec<TagDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tags(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let tags = list_endpoint::<TagList>(&state, &session).await?;

    Ok((StatusCode::OK, Json(tags)))
}
