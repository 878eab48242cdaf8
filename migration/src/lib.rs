pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_user_table;
mod m20251001_000002_create_account_table;
mod m20251001_000003_create_role_table;
mod m20251001_000004_create_user_role_table;
mod m20251002_000005_create_classes_table;
mod m20251002_000006_create_quran_meta_table;
mod m20251002_000007_create_master_tags_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_user_table::Migration),
            Box::new(m20251001_000002_create_account_table::Migration),
            Box::new(m20251001_000003_create_role_table::Migration),
            Box::new(m20251001_000004_create_user_role_table::Migration),
            Box::new(m20251002_000005_create_classes_table::Migration),
            Box::new(m20251002_000006_create_quran_meta_table::Migration),
            Box::new(m20251002_000007_create_master_tags_table::Migration),
        ]
    }
}
