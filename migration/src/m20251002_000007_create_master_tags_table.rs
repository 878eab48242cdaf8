use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MasterTags::Table)
                    .if_not_exists()
                    .col(pk_auto(MasterTags::Id))
                    .col(string(MasterTags::Category))
                    .col(string(MasterTags::TagText))
                    .col(text_null(MasterTags::Description))
                    .col(timestamp_with_time_zone(MasterTags::CreatedAt))
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_master_tags_category_tag_unique")
                            .col(MasterTags::Category)
                            .col(MasterTags::TagText),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MasterTags::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MasterTags {
    Table,
    Id,
    Category,
    TagText,
    Description,
    CreatedAt,
}
