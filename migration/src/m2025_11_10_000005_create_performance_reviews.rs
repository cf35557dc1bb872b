//! Migration to create the performance_reviews table.
//!
//! The overall rating is derived from the four sub-scores at read time and has
//! no column of its own.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PerformanceReviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PerformanceReviews::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PerformanceReviews::EmployeeId).uuid().not_null())
                    .col(ColumnDef::new(PerformanceReviews::ReviewerId).uuid().null())
                    .col(
                        ColumnDef::new(PerformanceReviews::ReviewPeriodStart)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::ReviewPeriodEnd)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::ReviewYear)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::ReviewQuarter)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::TechnicalSkills)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::Communication)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::Teamwork)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::Leadership)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::GoalsAchieved)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::Feedback)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performance_reviews_employee_id")
                            .from(PerformanceReviews::Table, PerformanceReviews::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performance_reviews_reviewer_id")
                            .from(PerformanceReviews::Table, PerformanceReviews::ReviewerId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_performance_reviews_employee_id")
                    .table(PerformanceReviews::Table)
                    .col(PerformanceReviews::EmployeeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_performance_reviews_employee_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PerformanceReviews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PerformanceReviews {
    Table,
    Id,
    EmployeeId,
    ReviewerId,
    ReviewPeriodStart,
    ReviewPeriodEnd,
    ReviewYear,
    ReviewQuarter,
    TechnicalSkills,
    Communication,
    Teamwork,
    Leadership,
    GoalsAchieved,
    Feedback,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
}
