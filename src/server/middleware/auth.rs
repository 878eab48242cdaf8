use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Resolves the authenticated principal for a request.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged-in user or fails with an authentication error.
    ///
    /// The session only stores a user ID; the user must also still exist in the
    /// database for the session to count as valid.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AppError::AuthErr(UserNotInSession))` - No user ID in session
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - User ID no longer exists
    /// - `Err(AppError::SessionErr | DbErr)` - Session store or database failure
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(user) = self.current_user().await? else {
            let auth_session = AuthSession::new(self.session);
            return match auth_session.get_user_id().await? {
                Some(user_id) => Err(AuthError::UserNotInDatabase(user_id).into()),
                None => Err(AuthError::UserNotInSession.into()),
            };
        };

        Ok(user)
    }

    /// Returns the logged-in user if there is one.
    ///
    /// Unlike `require`, a missing or stale session is not an error.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Session holds the ID of an existing user
    /// - `Ok(None)` - No user in session, or the user no longer exists
    /// - `Err(AppError)` - Session store or database failure
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(user_id) = auth_session.get_user_id().await? else {
            return Ok(None);
        };

        let user_repo = UserRepository::new(self.db);
        let user = user_repo.find_by_id(user_id).await?;

        Ok(user)
    }
}
