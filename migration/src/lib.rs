pub use sea_orm_migration::prelude::*;

mod m20250214_000001_create_outlets_table;
mod m20250214_000002_create_categories_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250214_000001_create_outlets_table::Migration),
            Box::new(m20250214_000002_create_categories_table::Migration),
        ]
    }
}
