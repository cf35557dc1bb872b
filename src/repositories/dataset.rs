//! Dataset-wide operations spanning every entity table.

use std::fmt;

use sea_orm::{ConnectionTrait, DbErr};
use serde::Serialize;

use super::{
    AttendanceRepository, DepartmentRepository, EmployeeRepository, PerformanceRepository,
    SalaryRepository,
};

/// The entity tables owned by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetEntity {
    Salary,
    Performance,
    Attendance,
    Employee,
    Department,
}

impl DatasetEntity {
    pub fn table_name(self) -> &'static str {
        match self {
            DatasetEntity::Salary => "salary_records",
            DatasetEntity::Performance => "performance_reviews",
            DatasetEntity::Attendance => "attendance_records",
            DatasetEntity::Employee => "employees",
            DatasetEntity::Department => "departments",
        }
    }
}

impl fmt::Display for DatasetEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// Deletion order: children before the rows they reference.
pub const CLEAR_ORDER: [DatasetEntity; 5] = [
    DatasetEntity::Salary,
    DatasetEntity::Performance,
    DatasetEntity::Attendance,
    DatasetEntity::Employee,
    DatasetEntity::Department,
];

/// Row totals per entity type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntityCounts {
    pub departments: u64,
    pub employees: u64,
    pub attendance_records: u64,
    pub performance_reviews: u64,
    pub salary_records: u64,
}

impl EntityCounts {
    pub fn get(&self, entity: DatasetEntity) -> u64 {
        match entity {
            DatasetEntity::Salary => self.salary_records,
            DatasetEntity::Performance => self.performance_reviews,
            DatasetEntity::Attendance => self.attendance_records,
            DatasetEntity::Employee => self.employees,
            DatasetEntity::Department => self.departments,
        }
    }

    fn set(&mut self, entity: DatasetEntity, value: u64) {
        let slot = match entity {
            DatasetEntity::Salary => &mut self.salary_records,
            DatasetEntity::Performance => &mut self.performance_reviews,
            DatasetEntity::Attendance => &mut self.attendance_records,
            DatasetEntity::Employee => &mut self.employees,
            DatasetEntity::Department => &mut self.departments,
        };
        *slot = value;
    }

    pub fn total(&self) -> u64 {
        CLEAR_ORDER.iter().map(|entity| self.get(*entity)).sum()
    }
}

/// Deletes every generated row following [`CLEAR_ORDER`], after detaching
/// department managers. Returns the number of rows removed per entity.
pub async fn clear_all<C: ConnectionTrait>(conn: &C) -> Result<EntityCounts, DbErr> {
    DepartmentRepository::new(conn).detach_managers().await?;

    let mut deleted = EntityCounts::default();
    for entity in CLEAR_ORDER {
        let rows = match entity {
            DatasetEntity::Salary => SalaryRepository::new(conn).delete_all().await?,
            DatasetEntity::Performance => PerformanceRepository::new(conn).delete_all().await?,
            DatasetEntity::Attendance => AttendanceRepository::new(conn).delete_all().await?,
            DatasetEntity::Employee => EmployeeRepository::new(conn).delete_all().await?,
            DatasetEntity::Department => DepartmentRepository::new(conn).delete_all().await?,
        };
        log::debug!("Cleared {} rows from {}", rows, entity);
        deleted.set(entity, rows);
    }

    Ok(deleted)
}

/// Current row count per entity.
pub async fn counts<C: ConnectionTrait>(conn: &C) -> Result<EntityCounts, DbErr> {
    Ok(EntityCounts {
        departments: DepartmentRepository::new(conn).count().await?,
        employees: EmployeeRepository::new(conn).count().await?,
        attendance_records: AttendanceRepository::new(conn).count().await?,
        performance_reviews: PerformanceRepository::new(conn).count().await?,
        salary_records: SalaryRepository::new(conn).count().await?,
    })
}
