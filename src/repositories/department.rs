//! # Department Repository

use std::collections::HashSet;

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use super::insert_chunked;
use crate::models::department::{Column, Entity as Department, Model as DepartmentModel};

/// Repository for department rows
pub struct DepartmentRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> DepartmentRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Insert departments in chunks of `batch_size`
    pub async fn insert_batch(
        &self,
        departments: &[DepartmentModel],
        batch_size: usize,
    ) -> Result<u64, DbErr> {
        insert_chunked::<Department, _>(self.conn, departments, batch_size).await
    }

    /// Point a department at its manager
    pub async fn assign_manager(
        &self,
        department_id: Uuid,
        manager_id: Option<Uuid>,
    ) -> Result<u64, DbErr> {
        let result = Department::update_many()
            .col_expr(Column::ManagerId, Expr::value(manager_id))
            .filter(Column::Id.eq(department_id))
            .exec(self.conn)
            .await?;
        Ok(result.rows_affected)
    }

    /// Clear every department's manager reference
    pub async fn detach_managers(&self) -> Result<u64, DbErr> {
        let result = Department::update_many()
            .col_expr(Column::ManagerId, Expr::value(Option::<Uuid>::None))
            .filter(Column::ManagerId.is_not_null())
            .exec(self.conn)
            .await?;
        Ok(result.rows_affected)
    }

    /// Names already taken in storage
    pub async fn existing_names(&self) -> Result<HashSet<String>, DbErr> {
        let names: Vec<String> = Department::find()
            .select_only()
            .column(Column::Name)
            .into_tuple()
            .all(self.conn)
            .await?;
        Ok(names.into_iter().collect())
    }

    pub async fn find_all(&self) -> Result<Vec<DepartmentModel>, DbErr> {
        Department::find()
            .order_by_asc(Column::Name)
            .all(self.conn)
            .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<DepartmentModel>, DbErr> {
        Department::find_by_id(id).one(self.conn).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Department::find().count(self.conn).await
    }

    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = Department::delete_many().exec(self.conn).await?;
        Ok(result.rows_affected)
    }
}
