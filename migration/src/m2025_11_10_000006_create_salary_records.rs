//! Migration to create the salary_records table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SalaryRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SalaryRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SalaryRecords::EmployeeId).uuid().not_null())
                    .col(ColumnDef::new(SalaryRecords::EffectiveDate).date().not_null())
                    .col(ColumnDef::new(SalaryRecords::BaseSalary).double().not_null())
                    .col(
                        ColumnDef::new(SalaryRecords::Allowances)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(SalaryRecords::Deductions)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(SalaryRecords::Bonus)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(SalaryRecords::SalaryType)
                            .text()
                            .not_null()
                            .default("initial"),
                    )
                    .col(
                        ColumnDef::new(SalaryRecords::Reason)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(SalaryRecords::ApprovedBy).uuid().null())
                    .col(
                        ColumnDef::new(SalaryRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_salary_records_employee_id")
                            .from(SalaryRecords::Table, SalaryRecords::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_salary_records_approved_by")
                            .from(SalaryRecords::Table, SalaryRecords::ApprovedBy)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_salary_records_employee_effective")
                    .table(SalaryRecords::Table)
                    .col(SalaryRecords::EmployeeId)
                    .col(SalaryRecords::EffectiveDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_salary_records_employee_effective")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SalaryRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SalaryRecords {
    Table,
    Id,
    EmployeeId,
    EffectiveDate,
    BaseSalary,
    Allowances,
    Deductions,
    Bonus,
    SalaryType,
    Reason,
    ApprovedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
}
