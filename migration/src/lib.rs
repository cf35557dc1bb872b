//! Database migrations for the workforce dataset.
//!
//! Tables are created in dependency order: departments, employees, then the
//! per-employee history tables.

pub use sea_orm_migration::prelude::*;

mod m2025_11_10_000001_create_departments;
mod m2025_11_10_000002_create_employees;
mod m2025_11_10_000003_add_department_manager_fk;
mod m2025_11_10_000004_create_attendance_records;
mod m2025_11_10_000005_create_performance_reviews;
mod m2025_11_10_000006_create_salary_records;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_11_10_000001_create_departments::Migration),
            Box::new(m2025_11_10_000002_create_employees::Migration),
            Box::new(m2025_11_10_000003_add_department_manager_fk::Migration),
            Box::new(m2025_11_10_000004_create_attendance_records::Migration),
            Box::new(m2025_11_10_000005_create_performance_reviews::Migration),
            Box::new(m2025_11_10_000006_create_salary_records::Migration),
        ]
    }
}
