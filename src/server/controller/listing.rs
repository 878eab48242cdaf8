use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::listing::{Access, ListResource},
    service::listing::ListService,
    state::AppState,
};

/// Shared body of every read-list endpoint.
///
/// For `Access::Authenticated` resources the session must resolve to an existing user
/// before the table is touched. `Access::Public` resources never read the session.
///
/// # Returns
/// - `Ok(Vec<R::Dto>)` - Every row of the resource, in resource order
/// - `Err(AppError::AuthErr)` - Authenticated resource and no valid session
/// - `Err(AppError::DbErr | SessionErr)` - Query or session store failure
pub async fn list_endpoint<R: ListResource>(
    state: &AppState,
    session: &Session,
) -> Result<Vec<R::Dto>, AppError> {
    if R::ACCESS == Access::Authenticated {
        let _ = AuthGuard::new(&state.db, session).require().await?;
    }

    let items = ListService::new(&state.db).list::<R>().await?;

    tracing::debug!("Listed {} {}", items.len(), R::NAME);

    Ok(items)
}
