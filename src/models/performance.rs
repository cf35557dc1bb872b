//! Performance review entity model
//!
//! Reviews carry four 1-5 sub-scores. The overall rating is derived on demand
//! and never persisted.

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use super::round2;

/// Lowest valid sub-score.
pub const MIN_SCORE: i16 = 1;
/// Highest valid sub-score.
pub const MAX_SCORE: i16 = 5;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "performance_reviews")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub employee_id: Uuid,

    /// Employee who conducted the review, never the reviewee
    pub reviewer_id: Option<Uuid>,

    pub review_period_start: NaiveDate,

    pub review_period_end: NaiveDate,

    /// Calendar year of the period end
    pub review_year: i32,

    /// Calendar quarter (1-4) of the period end
    pub review_quarter: i16,

    pub technical_skills: i16,

    pub communication: i16,

    pub teamwork: i16,

    pub leadership: i16,

    /// Percentage of goals achieved (0-100)
    pub goals_achieved: i16,

    pub feedback: String,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn sub_scores(&self) -> [i16; 4] {
        [
            self.technical_skills,
            self.communication,
            self.teamwork,
            self.leadership,
        ]
    }

    /// Mean of the four sub-scores rounded to two decimals.
    pub fn overall_rating(&self) -> f64 {
        overall_rating(self.sub_scores())
    }

    /// Period label such as `2025-Q3`.
    pub fn period_label(&self) -> String {
        format!("{}-Q{}", self.review_year, self.review_quarter)
    }
}

pub fn overall_rating(scores: [i16; 4]) -> f64 {
    let total: i32 = scores.iter().map(|score| i32::from(*score)).sum();
    round2(f64::from(total) / scores.len() as f64)
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
