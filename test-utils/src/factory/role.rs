//! Role factory for creating test role entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test roles with customizable fields.
pub struct RoleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
}

impl<'a> RoleFactory<'a> {
    /// Creates a new RoleFactory with default values.
    ///
    /// Defaults:
    /// - name: `"role_{n}"` where n is a unique counter value
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("role_{}", next_id()),
            description: None,
        }
    }

    /// Sets the unique role name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the role description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the role entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::role::Model)` - Created role entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::role::Model, DbErr> {
        entity::role::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a role with default values.
pub async fn create_role(db: &DatabaseConnection) -> Result<entity::role::Model, DbErr> {
    RoleFactory::new(db).build().await
}
