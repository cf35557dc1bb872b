//! Salary record entity model
//!
//! Per-employee compensation history ordered by effective date.

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use super::{SalaryType, round2};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "salary_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub employee_id: Uuid,

    pub effective_date: NaiveDate,

    /// Annual base salary from the effective date onwards
    pub base_salary: f64,

    pub allowances: f64,

    pub deductions: f64,

    pub bonus: f64,

    pub salary_type: SalaryType,

    pub reason: String,

    /// Manager who approved the change, never the employee themselves
    pub approved_by: Option<Uuid>,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    /// Base salary plus allowances and bonus, minus deductions.
    pub fn total_compensation(&self) -> f64 {
        round2(self.base_salary + self.allowances + self.bonus - self.deductions)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id"
    )]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
