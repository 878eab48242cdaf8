//! Account factory for creating test credential records.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test accounts with customizable fields.
///
/// The password is stored as given; hash it first when a test signs in with it.
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    provider_id: String,
    password: String,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory for the given user.
    ///
    /// Defaults:
    /// - provider_id: `"credential"`
    /// - password: `"not-a-real-hash"`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            provider_id: "credential".to_string(),
            password: "not-a-real-hash".to_string(),
        }
    }

    pub fn provider_id(mut self, provider_id: impl Into<String>) -> Self {
        self.provider_id = provider_id.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Builds and inserts the account entity into the database.
    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        entity::account::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            provider_id: ActiveValue::Set(self.provider_id),
            password: ActiveValue::Set(self.password),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
