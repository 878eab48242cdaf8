use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Public projection of a user: never carries credentials or timestamps.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}
