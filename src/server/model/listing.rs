//! Read-list resource abstraction.
//!
//! A list endpoint is fully described by the table it reads, the columns it projects,
//! the order it sorts by, how a row becomes a response DTO, and whether the caller must
//! be signed in. `ListResource` captures exactly those parameters so one repository,
//! one service and one controller function serve every list endpoint.

use sea_orm::{EntityTrait, FromQueryResult};
use serde::Serialize;

/// Who may call a list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone, no session lookup is performed.
    Public,
    /// Only callers whose session resolves to an existing user.
    Authenticated,
}

/// Parameters of a full-table, sorted, projected read.
pub trait ListResource {
    /// Table the rows are read from.
    type Entity: EntityTrait;

    /// Shape each selected row is decoded into.
    ///
    /// Field names must match the projected column names.
    type Row: FromQueryResult + Send + Sync;

    /// Shape each row is serialized as in the response.
    type Dto: Serialize + Send;

    /// Resource name used in logs.
    const NAME: &'static str;

    /// Who may read the resource.
    const ACCESS: Access;

    /// Columns to select. An empty list selects every column.
    fn projection() -> Vec<<Self::Entity as EntityTrait>::Column> {
        Vec::new()
    }

    /// Columns to sort by, ascending, highest priority first.
    fn ordering() -> Vec<<Self::Entity as EntityTrait>::Column>;

    /// Converts a selected row into its response DTO.
    fn into_dto(row: Self::Row) -> Self::Dto;
}
