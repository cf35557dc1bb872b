//! # Repository Layer
//!
//! Persistence collaborators for the organization dataset. Every repository
//! borrows a [`ConnectionTrait`] implementor, so the same code runs against
//! the pool or inside a [`sea_orm::DatabaseTransaction`].

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, IntoActiveModel};

pub mod attendance;
pub mod dataset;
pub mod department;
pub mod employee;
pub mod performance;
pub mod salary;

pub use attendance::AttendanceRepository;
pub use dataset::{CLEAR_ORDER, DatasetEntity, EntityCounts};
pub use department::DepartmentRepository;
pub use employee::EmployeeRepository;
pub use performance::PerformanceRepository;
pub use salary::SalaryRepository;

/// Inserts `rows` in chunks of at most `batch_size`, returning the number of
/// rows written.
pub(crate) async fn insert_chunked<E, C>(
    conn: &C,
    rows: &[E::Model],
    batch_size: usize,
) -> Result<u64, DbErr>
where
    E: EntityTrait,
    E::Model: Clone + IntoActiveModel<E::ActiveModel>,
    C: ConnectionTrait,
{
    let mut written = 0;
    for chunk in rows.chunks(batch_size.max(1)) {
        written += E::insert_many(chunk.iter().cloned().map(IntoActiveModel::into_active_model))
            .exec_without_returning(conn)
            .await?;
    }
    Ok(written)
}
