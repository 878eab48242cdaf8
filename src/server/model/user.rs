//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::{auth::SessionDto, user::UserDto};

/// Registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            created_at: entity.created_at,
        }
    }

    /// Converts the user into its public `{id, name, email}` projection.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }

    /// Wraps the user as the principal of a session response.
    pub fn into_session_dto(self) -> SessionDto {
        SessionDto {
            user: self.into_dto(),
        }
    }
}

/// Parameters for creating a user together with their credential account.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    /// Normalized (trimmed, lowercase) email.
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
}
