//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for looking up users and registering new
//! users together with their credential account.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr, TransactionTrait,
};

use crate::server::{
    data::account::CREDENTIAL_PROVIDER,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by their ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their email.
    ///
    /// The email is matched exactly; callers normalize it first.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Creates a user and their credential account in a single transaction.
    ///
    /// Either both rows are written or neither is. A unique violation on email maps
    /// to `UserAlreadyExists`.
    ///
    /// # Arguments
    /// - `param` - Name, normalized email and password hash of the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::AuthErr(UserAlreadyExists))` - Email already registered
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn create_with_credential(&self, param: CreateUserParam) -> Result<User, AppError> {
        let txn = self.db.begin().await?;

        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(duplicate_email)?;

        entity::account::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            provider_id: ActiveValue::Set(CREDENTIAL_PROVIDER.to_string()),
            password: ActiveValue::Set(param.password_hash),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(User::from_entity(user))
    }
}

fn duplicate_email(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AuthError::UserAlreadyExists.into(),
        _ => err.into(),
    }
}
