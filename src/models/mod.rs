//! # Data Models
//!
//! SeaORM entities for the organization dataset and the enumerations shared
//! between the entities and the generator configuration.

use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub mod attendance;
pub mod department;
pub mod employee;
pub mod performance;
pub mod salary;

pub use attendance::Entity as Attendance;
pub use department::Entity as Department;
pub use employee::Entity as Employee;
pub use performance::Entity as Performance;
pub use salary::Entity as Salary;

/// Rounds a value to two decimal places (currency cents, rating precision).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Error returned when parsing one of the enumerations from text fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Job position, ordered from least to most senior.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum Position {
    #[sea_orm(string_value = "intern")]
    Intern,
    #[sea_orm(string_value = "junior")]
    Junior,
    #[sea_orm(string_value = "senior")]
    Senior,
    #[sea_orm(string_value = "lead")]
    Lead,
    #[sea_orm(string_value = "manager")]
    Manager,
    #[sea_orm(string_value = "director")]
    Director,
}

impl Position {
    /// Every position in rank order.
    pub const ALL: [Position; 6] = [
        Position::Intern,
        Position::Junior,
        Position::Senior,
        Position::Lead,
        Position::Manager,
        Position::Director,
    ];

    /// Zero-based rank on the seniority scale.
    pub fn rank(self) -> u8 {
        match self {
            Position::Intern => 0,
            Position::Junior => 1,
            Position::Senior => 2,
            Position::Lead => 3,
            Position::Manager => 4,
            Position::Director => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Intern => "intern",
            Position::Junior => "junior",
            Position::Senior => "senior",
            Position::Lead => "lead",
            Position::Manager => "manager",
            Position::Director => "director",
        }
    }

    /// Human readable title.
    pub fn title(self) -> &'static str {
        match self {
            Position::Intern => "Intern",
            Position::Junior => "Junior Developer",
            Position::Senior => "Senior Developer",
            Position::Lead => "Team Lead",
            Position::Manager => "Manager",
            Position::Director => "Director",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == normalized)
            .ok_or_else(|| ParseEnumError {
                kind: "position",
                value: s.to_string(),
            })
    }
}

/// Daily attendance outcome.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    #[sea_orm(string_value = "present")]
    Present,
    #[sea_orm(string_value = "absent")]
    Absent,
    #[sea_orm(string_value = "late")]
    Late,
    #[sea_orm(string_value = "half_day")]
    HalfDay,
    #[sea_orm(string_value = "sick_leave")]
    SickLeave,
    #[sea_orm(string_value = "vacation")]
    Vacation,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 6] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Late,
        AttendanceStatus::HalfDay,
        AttendanceStatus::SickLeave,
        AttendanceStatus::Vacation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
            AttendanceStatus::HalfDay => "half_day",
            AttendanceStatus::SickLeave => "sick_leave",
            AttendanceStatus::Vacation => "vacation",
        }
    }

    /// Whether the employee clocked in at all on this day.
    pub fn is_on_site(self) -> bool {
        matches!(
            self,
            AttendanceStatus::Present | AttendanceStatus::Late | AttendanceStatus::HalfDay
        )
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        AttendanceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ParseEnumError {
                kind: "attendance status",
                value: s.to_string(),
            })
    }
}

/// Kind of salary history entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum SalaryType {
    #[sea_orm(string_value = "initial")]
    Initial,
    #[sea_orm(string_value = "annual_raise")]
    AnnualRaise,
    #[sea_orm(string_value = "promotion")]
    Promotion,
    #[sea_orm(string_value = "performance_bonus")]
    PerformanceBonus,
    #[sea_orm(string_value = "adjustment")]
    Adjustment,
}

impl SalaryType {
    /// Entry types that may follow the initial record.
    pub const CHANGES: [SalaryType; 4] = [
        SalaryType::AnnualRaise,
        SalaryType::Promotion,
        SalaryType::PerformanceBonus,
        SalaryType::Adjustment,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SalaryType::Initial => "Initial Salary",
            SalaryType::AnnualRaise => "Annual Raise",
            SalaryType::Promotion => "Promotion",
            SalaryType::PerformanceBonus => "Performance Bonus",
            SalaryType::Adjustment => "Market Adjustment",
        }
    }
}
