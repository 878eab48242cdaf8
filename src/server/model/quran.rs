use entity::quran_meta::{Column, Entity};
use sea_orm::FromQueryResult;

use crate::{
    model::quran::SurahDto,
    server::model::listing::{Access, ListResource},
};

/// Projection of a surah metadata row.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct SurahRow {
    pub id: i32,
    pub surah_name: String,
    pub surah_name_arabic: String,
    pub total_ayat: i32,
    pub juz_number: i32,
}

/// Every surah, in mushaf order (by surah number).
pub struct SurahList;

impl ListResource for SurahList {
    type Entity = Entity;
    type Row = SurahRow;
    type Dto = SurahDto;

    const NAME: &'static str = "quran_meta";
    const ACCESS: Access = Access::Public;

    fn projection() -> Vec<Column> {
        vec![
            Column::Id,
            Column::SurahName,
            Column::SurahNameArabic,
            Column::TotalAyat,
            Column::JuzNumber,
        ]
    }

    fn ordering() -> Vec<Column> {
        vec![Column::Id]
    }

    fn into_dto(row: SurahRow) -> SurahDto {
        SurahDto {
            id: row.id,
            surah_name: row.surah_name,
            surah_name_arabic: row.surah_name_arabic,
            total_ayat: row.total_ayat,
            juz_number: row.juz_number,
        }
    }
}
