//! # Salary Record Repository

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use super::insert_chunked;
use crate::models::salary::{Column, Entity as Salary, Model as SalaryModel};

pub struct SalaryRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> SalaryRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert_batch(
        &self,
        records: &[SalaryModel],
        batch_size: usize,
    ) -> Result<u64, DbErr> {
        insert_chunked::<Salary, _>(self.conn, records, batch_size).await
    }

    /// Salary history of one employee in effective-date order
    pub async fn for_employee(&self, employee_id: Uuid) -> Result<Vec<SalaryModel>, DbErr> {
        Salary::find()
            .filter(Column::EmployeeId.eq(employee_id))
            .order_by_asc(Column::EffectiveDate)
            .order_by_asc(Column::BaseSalary)
            .all(self.conn)
            .await
    }

    /// Most recent record by effective date
    pub async fn current_for(&self, employee_id: Uuid) -> Result<Option<SalaryModel>, DbErr> {
        Salary::find()
            .filter(Column::EmployeeId.eq(employee_id))
            .order_by_desc(Column::EffectiveDate)
            .order_by_desc(Column::BaseSalary)
            .one(self.conn)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Salary::find().count(self.conn).await
    }

    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = Salary::delete_many().exec(self.conn).await?;
        Ok(result.rows_affected)
    }
}
