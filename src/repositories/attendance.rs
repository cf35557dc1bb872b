//! # Attendance Repository

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use super::insert_chunked;
use crate::models::attendance::{Column, Entity as Attendance, Model as AttendanceModel};

pub struct AttendanceRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> AttendanceRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert_batch(
        &self,
        records: &[AttendanceModel],
        batch_size: usize,
    ) -> Result<u64, DbErr> {
        insert_chunked::<Attendance, _>(self.conn, records, batch_size).await
    }

    /// Records of one employee, oldest first
    pub async fn for_employee(&self, employee_id: Uuid) -> Result<Vec<AttendanceModel>, DbErr> {
        Attendance::find()
            .filter(Column::EmployeeId.eq(employee_id))
            .order_by_asc(Column::Date)
            .all(self.conn)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<AttendanceModel>, DbErr> {
        Attendance::find()
            .order_by_asc(Column::EmployeeId)
            .order_by_asc(Column::Date)
            .all(self.conn)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Attendance::find().count(self.conn).await
    }

    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = Attendance::delete_many().exec(self.conn).await?;
        Ok(result.rows_affected)
    }
}
