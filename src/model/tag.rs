use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// A predefined tag used to annotate memorization records.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub id: i32,
    pub category: String,
    pub tag_text: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
