//! Credential account repository.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect};

/// Provider identifier of email and password accounts.
pub const CREDENTIAL_PROVIDER: &str = "credential";

pub struct AccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the stored password hash of a user's credential account.
    ///
    /// # Arguments
    /// - `user_id` - ID of the account owner
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Argon2 PHC string of the user's password
    /// - `Ok(None)` - User has no credential account
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_password_hash(&self, user_id: i32) -> Result<Option<String>, DbErr> {
        entity::prelude::Account::find()
            .select_only()
            .column(entity::account::Column::Password)
            .filter(entity::account::Column::UserId.eq(user_id))
            .filter(entity::account::Column::ProviderId.eq(CREDENTIAL_PROVIDER))
            .into_tuple::<String>()
            .one(self.db)
            .await
    }
}
