pub use sea_orm_migration::prelude::*;

mod m20250815_000001_create_lms_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250815_000001_create_lms_tables::Migration)]
    }
}
