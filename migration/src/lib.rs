pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_unit_and_role_tables;
mod m20250101_000002_create_user_table;
mod m20250102_000001_create_employee_table;
mod m20250102_000002_create_time_record_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_unit_and_role_tables::Migration),
            Box::new(m20250101_000002_create_user_table::Migration),
            Box::new(m20250102_000001_create_employee_table::Migration),
            Box::new(m20250102_000002_create_time_record_table::Migration),
        ]
    }
}
