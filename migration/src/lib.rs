mod utils;

pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_contacts_table;
mod m20261001_000002_create_error_reports_table;
mod m20261001_000003_create_students_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_contacts_table::Migration),
            Box::new(m20261001_000002_create_error_reports_table::Migration),
            Box::new(m20261001_000003_create_students_table::Migration),
        ]
    }
}
