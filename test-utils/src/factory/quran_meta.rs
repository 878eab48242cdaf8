//! Surah metadata factory.
//!
//! Surah ids are natural keys (the surah number) rather than auto-incremented, so
//! callers choose the id explicitly when ordering matters.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test surah metadata rows.
pub struct QuranMetaFactory<'a> {
    db: &'a DatabaseConnection,
    id: i32,
    surah_name: String,
    surah_name_arabic: String,
    total_ayat: i32,
    juz_number: i32,
}

impl<'a> QuranMetaFactory<'a> {
    /// Creates a new QuranMetaFactory with default values.
    ///
    /// Defaults:
    /// - id: unique counter value offset past the 114 real surahs
    /// - surah_name: `"Surah {id}"`
    /// - surah_name_arabic: `"سورة"`
    /// - total_ayat: `7`
    /// - juz_number: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = 1000 + next_id() as i32;
        Self {
            db,
            id,
            surah_name: format!("Surah {}", id),
            surah_name_arabic: "سورة".to_string(),
            total_ayat: 7,
            juz_number: 1,
        }
    }

    /// Sets the surah number.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the transliterated surah name.
    pub fn surah_name(mut self, surah_name: impl Into<String>) -> Self {
        self.surah_name = surah_name.into();
        self
    }

    /// Sets the surah name in Arabic script.
    pub fn surah_name_arabic(mut self, surah_name_arabic: impl Into<String>) -> Self {
        self.surah_name_arabic = surah_name_arabic.into();
        self
    }

    /// Sets the number of verses in the surah.
    pub fn total_ayat(mut self, total_ayat: i32) -> Self {
        self.total_ayat = total_ayat;
        self
    }

    /// Sets the juz the surah starts in.
    pub fn juz_number(mut self, juz_number: i32) -> Self {
        self.juz_number = juz_number;
        self
    }

    /// Builds and inserts the surah metadata row into the database.
    pub async fn build(self) -> Result<entity::quran_meta::Model, DbErr> {
        entity::quran_meta::ActiveModel {
            id: ActiveValue::Set(self.id),
            surah_name: ActiveValue::Set(self.surah_name),
            surah_name_arabic: ActiveValue::Set(self.surah_name_arabic),
            total_ayat: ActiveValue::Set(self.total_ayat),
            juz_number: ActiveValue::Set(self.juz_number),
        }
        .insert(self.db)
        .await
    }
}

/// Creates surah metadata with the given surah number and default fields.
pub async fn create_surah(
    db: &DatabaseConnection,
    id: i32,
) -> Result<entity::quran_meta::Model, DbErr> {
    QuranMetaFactory::new(db).id(id).build().await
}
