use entity::classes::{Column, Entity};
use sea_orm::FromQueryResult;

use crate::{
    model::classes::ClassDto,
    server::model::listing::{Access, ListResource},
};

/// Projection of a class row.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ClassRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Every class, ordered by name.
pub struct ClassList;

impl ListResource for ClassList {
    type Entity = Entity;
    type Row = ClassRow;
    type Dto = ClassDto;

    const NAME: &'static str = "classes";
    const ACCESS: Access = Access::Public;

    fn projection() -> Vec<Column> {
        vec![Column::Id, Column::Name, Column::Description]
    }

    fn ordering() -> Vec<Column> {
        vec![Column::Name]
    }

    fn into_dto(row: ClassRow) -> ClassDto {
        ClassDto {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}
