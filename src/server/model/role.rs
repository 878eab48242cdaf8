//! Role listing.
//!
//! Roles are returned in full; the endpoint requires an authenticated session.

use entity::role::{Column, Entity, Model};

use crate::{
    model::role::RoleDto,
    server::model::listing::{Access, ListResource},
};

/// Every role, ordered by ID.
pub struct RoleList;

impl ListResource for RoleList {
    type Entity = Entity;
    type Row = Model;
    type Dto = RoleDto;

    const NAME: &'static str = "roles";
    const ACCESS: Access = Access::Authenticated;

    fn ordering() -> Vec<Column> {
        vec![Column::Id]
    }

    fn into_dto(row: Model) -> RoleDto {
        RoleDto {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}
