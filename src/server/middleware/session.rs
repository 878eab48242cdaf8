//! Type-safe session management wrappers.
//!
//! Wraps the raw `tower_sessions::Session` so the rest of the backend never handles
//! session keys or value types directly.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles user authentication state including storing and retrieving the
/// authenticated user's ID and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Establishes a logged-in session for the user.
    ///
    /// Cycles the session ID before storing the user so a session ID issued before
    /// authentication cannot be reused after it.
    ///
    /// # Arguments
    /// - `user_id` - ID of the authenticated user
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Removes all data from the session and deletes it from the store.
    ///
    /// Used during sign-out; the session cookie is invalidated as well.
    pub async fn flush(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
