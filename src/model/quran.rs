use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Metadata for a single surah.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SurahDto {
    /// Surah number.
    pub id: i32,
    pub surah_name: String,
    pub surah_name_arabic: String,
    pub total_ayat: i32,
    /// Juz the surah begins in.
    pub juz_number: i32,
}
