//! Email and password authentication.
//!
//! `AuthService` normalizes and validates credentials, registers users and checks
//! passwords. Session handling stays in the controller; this layer only decides who
//! the caller is.

pub mod password;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{account::AccountRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, User},
    service::auth::password::{spawn_hash_password, spawn_verify_password},
};

/// Inclusive bounds on password length, in characters.
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 128;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user with an email and password.
    ///
    /// The email is trimmed and lowercased before the uniqueness check and storage.
    /// The name is trimmed and must not be empty.
    ///
    /// # Arguments
    /// - `name` - Display name
    /// - `email` - Email as typed by the user
    /// - `password` - Plain text password, 8 to 128 characters
    ///
    /// # Returns
    /// - `Ok(User)` - The newly registered user
    /// - `Err(AppError::BadRequest)` - Name, email or password failed validation
    /// - `Err(AppError::AuthErr(UserAlreadyExists))` - Email already registered, either
    ///   at lookup or by the unique index at insert
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<User, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }

        let email = normalize_email(email);
        if email.is_empty() {
            return Err(AppError::BadRequest("Email is required".to_string()));
        }

        validate_password(password)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = spawn_hash_password(password.to_string()).await?;

        let user = user_repo
            .create_with_credential(CreateUserParam {
                name: name.to_string(),
                email,
                password_hash,
            })
            .await?;

        Ok(user)
    }

    /// Checks an email and password pair.
    ///
    /// Unknown emails, users without a credential account and wrong passwords all
    /// fail with the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Credentials are not valid
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = normalize_email(email);

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(stored_hash) = AccountRepository::new(self.db)
            .find_password_hash(user.id)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !spawn_verify_password(password.to_string(), stored_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_password(password: &str) -> Result<(), AppError> {
    let length = password.chars().count();

    if !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&length) {
        return Err(AppError::BadRequest(format!(
            "Password must be between {} and {} characters",
            PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH
        )));
    }

    Ok(())
}
