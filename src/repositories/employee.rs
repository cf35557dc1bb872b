//! # Employee Repository
//!
//! Employee rows reference their manager, so inserts are ordered from the
//! most to the least senior position: every manager row exists before the
//! rows that report to it.

use std::cmp::Reverse;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use super::insert_chunked;
use crate::models::employee::{Column, Entity as Employee, Model as EmployeeModel};

/// Repository for employee rows
pub struct EmployeeRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> EmployeeRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Insert employees, most senior first, in chunks of `batch_size`
    pub async fn insert_batch(
        &self,
        employees: &[EmployeeModel],
        batch_size: usize,
    ) -> Result<u64, DbErr> {
        let mut ordered = employees.to_vec();
        ordered.sort_by_key(|employee| Reverse(employee.position));
        insert_chunked::<Employee, _>(self.conn, &ordered, batch_size).await
    }

    /// Employee codes already taken in storage
    pub async fn existing_codes(&self) -> Result<Vec<String>, DbErr> {
        Employee::find()
            .select_only()
            .column(Column::EmployeeCode)
            .into_tuple()
            .all(self.conn)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<EmployeeModel>, DbErr> {
        Employee::find()
            .order_by_asc(Column::EmployeeCode)
            .all(self.conn)
            .await
    }

    pub async fn find_by_department(&self, department_id: Uuid) -> Result<Vec<EmployeeModel>, DbErr> {
        Employee::find()
            .filter(Column::DepartmentId.eq(department_id))
            .order_by_asc(Column::EmployeeCode)
            .all(self.conn)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Employee::find().count(self.conn).await
    }

    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = Employee::delete_many().exec(self.conn).await?;
        Ok(result.rows_affected)
    }
}
