//! Class factory for creating test class (kelas) entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test classes with customizable fields.
pub struct ClassFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
}

impl<'a> ClassFactory<'a> {
    /// Creates a new ClassFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Kelas {n}"`
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Kelas {}", next_id()),
            description: None,
        }
    }

    /// Sets the class name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the class description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the class entity into the database.
    pub async fn build(self) -> Result<entity::classes::Model, DbErr> {
        entity::classes::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a class with the given name and no description.
pub async fn create_class(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::classes::Model, DbErr> {
    ClassFactory::new(db).name(name).build().await
}
