//! Master tag factory for creating test tag entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tags with customizable fields.
pub struct MasterTagFactory<'a> {
    db: &'a DatabaseConnection,
    category: String,
    tag_text: String,
    description: Option<String>,
}

impl<'a> MasterTagFactory<'a> {
    /// Creates a new MasterTagFactory with default values.
    ///
    /// Defaults:
    /// - category: `"general"`
    /// - tag_text: `"tag {n}"`
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            category: "general".to_string(),
            tag_text: format!("tag {}", next_id()),
            description: None,
        }
    }

    /// Sets the tag category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the tag text.
    pub fn tag_text(mut self, tag_text: impl Into<String>) -> Self {
        self.tag_text = tag_text.into();
        self
    }

    /// Sets the tag description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the tag entity into the database.
    pub async fn build(self) -> Result<entity::master_tags::Model, DbErr> {
        entity::master_tags::ActiveModel {
            category: ActiveValue::Set(self.category),
            tag_text: ActiveValue::Set(self.tag_text),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tag with the given category and text.
pub async fn create_tag(
    db: &DatabaseConnection,
    category: impl Into<String>,
    tag_text: impl Into<String>,
) -> Result<entity::master_tags::Model, DbErr> {
    MasterTagFactory::new(db)
        .category(category)
        .tag_text(tag_text)
        .build()
        .await
}
