use dioxus::prelude::*;

use crate::{
    client::model::error::ApiError,
    model::{auth::SessionDto, user::UserDto},
};

/// Shared authentication state, provided once at the app root.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn set(&mut self, state: AuthState) {
        self.inner.set(state);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    /// Initial state - haven't checked the session yet
    Initializing,
    Authenticated(UserDto),
    /// No active session
    NotLoggedIn,
    /// Failed to check the session
    Error(ApiError),
}

impl From<Option<SessionDto>> for AuthState {
    fn from(session: Option<SessionDto>) -> Self {
        match session {
            Some(session) => AuthState::Authenticated(session.user),
            None => AuthState::NotLoggedIn,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_maps_to_authenticated_user() {
        let user = UserDto {
            id: 3,
            name: "Ahmad".to_string(),
            email: "ahmad@example.com".to_string(),
        };

        let state = AuthState::from(Some(SessionDto { user: user.clone() }));

        assert!(state.is_authenticated());
        assert_eq!(state.user(), Some(&user));
    }

    #[test]
    fn missing_session_maps_to_logged_out() {
        let state = AuthState::from(None);

        assert_eq!(state, AuthState::NotLoggedIn);
        assert!(state.user().is_none());
    }
}
