use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::user::UserDto;

/// Email and password sign-in request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SignInDto {
    pub email: String,
    pub password: String,
}

/// Email and password registration request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SignUpDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// The authenticated principal attached to the current session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SessionDto {
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SignOutDto {
    pub success: bool,
}
