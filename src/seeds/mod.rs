//! Synthetic dataset generation
//!
//! Builds a referentially consistent organization (departments, employees
//! with reporting lines, attendance, performance reviews and salary history)
//! and persists it.

pub mod employee_data;
pub mod names;
pub mod plan;
pub mod weights;

pub use employee_data::{EmployeeDataGenerator, GenerationReport, GenerationRequest};
pub use plan::{OrgPlan, OrgPlanner, PlanCounts, StoredIdentifiers};
pub use weights::{WeightTableError, WeightedTable};
