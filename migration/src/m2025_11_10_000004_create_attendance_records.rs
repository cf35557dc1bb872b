//! Migration to create the attendance_records table.
//!
//! One row per employee and calendar date, enforced by a composite unique index.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AttendanceRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttendanceRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AttendanceRecords::EmployeeId).uuid().not_null())
                    .col(ColumnDef::new(AttendanceRecords::Date).date().not_null())
                    .col(
                        ColumnDef::new(AttendanceRecords::Status)
                            .text()
                            .not_null()
                            .default("present"),
                    )
                    .col(ColumnDef::new(AttendanceRecords::CheckInTime).time().null())
                    .col(ColumnDef::new(AttendanceRecords::CheckOutTime).time().null())
                    .col(
                        ColumnDef::new(AttendanceRecords::BreakMinutes)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::HoursWorked)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(AttendanceRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_records_employee_id")
                            .from(AttendanceRecords::Table, AttendanceRecords::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_records_employee_date")
                    .table(AttendanceRecords::Table)
                    .col(AttendanceRecords::EmployeeId)
                    .col(AttendanceRecords::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_attendance_records_employee_date")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AttendanceRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AttendanceRecords {
    Table,
    Id,
    EmployeeId,
    Date,
    Status,
    CheckInTime,
    CheckOutTime,
    BreakMinutes,
    HoursWorked,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
}
