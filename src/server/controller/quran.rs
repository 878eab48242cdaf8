use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, quran::SurahDto},
    server::{
        controller::listing::list_endpoint, error::AppError, model::quran::SurahList,
        state::AppState,
    },
};

pub static QURAN_TAG: &str = "quran";

#[utoipa::path(
    get,
    path = "/api/quran",
    tag = QURAN_TAG,
    responses(
        (status = 200, description = "All surahs ordered by surah number", body = Vec<SurahDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_quran(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let surahs = list_endpoint::<SurahList>(&state, &session).await?;

    Ok((StatusCode::OK, Json(surahs)))
}
