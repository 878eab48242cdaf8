use entity::master_tags::{Column, Entity, Model};

use crate::{
    model::tag::TagDto,
    server::model::listing::{Access, ListResource},
};

/// Every tag, grouped by category and sorted by text within a category.
pub struct TagList;

impl ListResource for TagList {
    type Entity = Entity;
    type Row = Model;
    type Dto = TagDto;

    const NAME: &'static str = "master_tags";
    const ACCESS: Access = Access::Public;

    fn ordering() -> Vec<Column> {
        vec![Column::Category, Column::TagText]
    }

    fn into_dto(row: Model) -> TagDto {
        TagDto {
            id: row.id,
            category: row.category,
            tag_text: row.tag_text,
            description: row.description,
            created_at: row.created_at,
        }
    }
}
