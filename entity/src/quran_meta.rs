//! Surah metadata, one row per surah of the Qur'an.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "quran_meta")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Surah number (1..=114).
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub surah_name: String,
    pub surah_name_arabic: String,
    pub total_ayat: i32,
    pub juz_number: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
