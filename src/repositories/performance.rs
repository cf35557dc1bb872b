//! # Performance Review Repository

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use super::insert_chunked;
use crate::models::performance::{Column, Entity as Performance, Model as PerformanceModel};

pub struct PerformanceRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> PerformanceRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert_batch(
        &self,
        reviews: &[PerformanceModel],
        batch_size: usize,
    ) -> Result<u64, DbErr> {
        insert_chunked::<Performance, _>(self.conn, reviews, batch_size).await
    }

    /// Reviews of one employee ordered by review period
    pub async fn for_employee(&self, employee_id: Uuid) -> Result<Vec<PerformanceModel>, DbErr> {
        Performance::find()
            .filter(Column::EmployeeId.eq(employee_id))
            .order_by_asc(Column::ReviewPeriodStart)
            .all(self.conn)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<PerformanceModel>, DbErr> {
        Performance::find()
            .order_by_asc(Column::EmployeeId)
            .order_by_asc(Column::ReviewPeriodStart)
            .all(self.conn)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Performance::find().count(self.conn).await
    }

    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = Performance::delete_many().exec(self.conn).await?;
        Ok(result.rows_affected)
    }
}
