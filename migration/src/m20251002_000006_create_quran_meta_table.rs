use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QuranMeta::Table)
                    .if_not_exists()
                    .col(integer(QuranMeta::Id).primary_key())
                    .col(string(QuranMeta::SurahName))
                    .col(string(QuranMeta::SurahNameArabic))
                    .col(integer(QuranMeta::TotalAyat))
                    .col(integer(QuranMeta::JuzNumber))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuranMeta::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum QuranMeta {
    Table,
    Id,
    SurahName,
    SurahNameArabic,
    TotalAyat,
    JuzNumber,
}
