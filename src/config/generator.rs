//! Tunable parameters of the synthetic dataset generator.
//!
//! Every distribution the generator samples from lives here as data so that
//! deployments (via `WORKFORCE_GENERATOR_*`) and tests can reshape it.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::models::{AttendanceStatus, Position};

/// A department name offered to the generator, with its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentTemplate {
    pub name: String,
    pub description: String,
}

impl DepartmentTemplate {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Inclusive annual salary range for a position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryBand {
    pub min: f64,
    pub max: f64,
}

impl SalaryBand {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct GeneratorConfig {
    /// Seed used when a request does not carry its own; entropy otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default = "default_departments")]
    pub departments: Vec<DepartmentTemplate>,
    #[serde(default = "default_budget_min")]
    pub budget_min: f64,
    #[serde(default = "default_budget_max")]
    pub budget_max: f64,
    #[serde(default = "default_position_weights")]
    pub position_weights: BTreeMap<Position, f64>,
    #[serde(default = "default_salary_bands")]
    pub salary_bands: BTreeMap<Position, SalaryBand>,
    #[serde(default = "default_hire_window_years")]
    pub hire_window_years: u32,
    #[serde(default = "default_department_manager_min_position")]
    pub department_manager_min_position: Position,
    /// Probability that an employee with eligible seniors gets a direct manager
    #[serde(default = "default_manager_assignment_rate")]
    pub manager_assignment_rate: f64,
    #[serde(default = "default_attendance_weights")]
    pub attendance_weights: BTreeMap<AttendanceStatus, f64>,
    #[serde(default = "default_max_attendance_days")]
    pub max_attendance_days: u32,
    #[serde(default = "default_max_department_count")]
    pub max_department_count: u32,
    #[serde(default = "default_max_employee_count")]
    pub max_employee_count: u32,
    #[serde(default = "default_max_reviews_per_employee")]
    pub max_reviews_per_employee: u32,
    #[serde(default = "default_score_baseline")]
    pub score_baseline: f64,
    /// Added to the baseline once per rank step above intern
    #[serde(default = "default_score_rank_step")]
    pub score_rank_step: f64,
    #[serde(default = "default_max_salary_adjustments")]
    pub max_salary_adjustments: u32,
    #[serde(default = "default_raise_pct_min")]
    pub raise_pct_min: f64,
    #[serde(default = "default_raise_pct_max")]
    pub raise_pct_max: f64,
    #[serde(default = "default_insert_batch_size")]
    pub insert_batch_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            departments: default_departments(),
            budget_min: default_budget_min(),
            budget_max: default_budget_max(),
            position_weights: default_position_weights(),
            salary_bands: default_salary_bands(),
            hire_window_years: default_hire_window_years(),
            department_manager_min_position: default_department_manager_min_position(),
            manager_assignment_rate: default_manager_assignment_rate(),
            attendance_weights: default_attendance_weights(),
            max_attendance_days: default_max_attendance_days(),
            max_department_count: default_max_department_count(),
            max_employee_count: default_max_employee_count(),
            max_reviews_per_employee: default_max_reviews_per_employee(),
            score_baseline: default_score_baseline(),
            score_rank_step: default_score_rank_step(),
            max_salary_adjustments: default_max_salary_adjustments(),
            raise_pct_min: default_raise_pct_min(),
            raise_pct_max: default_raise_pct_max(),
            insert_batch_size: default_insert_batch_size(),
        }
    }
}

impl GeneratorConfig {
    /// Salary band for `position`, falling back to the built-in default.
    pub fn salary_band(&self, position: Position) -> SalaryBand {
        self.salary_bands
            .get(&position)
            .copied()
            .unwrap_or_else(|| default_salary_band(position))
    }

    /// Validate generator configuration bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.departments.is_empty() {
            return Err(ConfigError::EmptyDepartmentPool);
        }
        if let Some(blank) = self.departments.iter().find(|d| d.name.trim().is_empty()) {
            return Err(ConfigError::InvalidDepartmentName {
                name: blank.name.clone(),
            });
        }

        if !(self.budget_min.is_finite() && self.budget_max.is_finite())
            || self.budget_min < 0.0
            || self.budget_min > self.budget_max
        {
            return Err(ConfigError::InvalidBudgetRange {
                min: self.budget_min,
                max: self.budget_max,
            });
        }

        validate_weights("position", &self.position_weights)?;
        validate_weights("attendance", &self.attendance_weights)?;

        for (position, band) in &self.salary_bands {
            if !(band.min.is_finite() && band.max.is_finite())
                || band.min <= 0.0
                || band.min > band.max
            {
                return Err(ConfigError::InvalidSalaryBand {
                    position: position.to_string(),
                    min: band.min,
                    max: band.max,
                });
            }
        }

        if self.hire_window_years == 0 || self.hire_window_years > 50 {
            return Err(ConfigError::InvalidHireWindow {
                value: self.hire_window_years,
            });
        }

        if !(0.0..=1.0).contains(&self.manager_assignment_rate) {
            return Err(ConfigError::InvalidManagerAssignmentRate {
                value: self.manager_assignment_rate,
            });
        }

        if self.max_attendance_days == 0 {
            return Err(ConfigError::InvalidLimit {
                field: "max_attendance_days",
            });
        }
        if self.max_department_count == 0 {
            return Err(ConfigError::InvalidLimit {
                field: "max_department_count",
            });
        }
        if self.max_employee_count == 0 {
            return Err(ConfigError::InvalidLimit {
                field: "max_employee_count",
            });
        }
        if self.max_reviews_per_employee == 0 {
            return Err(ConfigError::InvalidLimit {
                field: "max_reviews_per_employee",
            });
        }
        if self.insert_batch_size == 0 {
            return Err(ConfigError::InvalidLimit {
                field: "insert_batch_size",
            });
        }

        if !self.score_baseline.is_finite() || !self.score_rank_step.is_finite() {
            return Err(ConfigError::InvalidScoreShape {
                baseline: self.score_baseline,
                rank_step: self.score_rank_step,
            });
        }

        if !(0.0..=1.0).contains(&self.raise_pct_min)
            || !(0.0..=1.0).contains(&self.raise_pct_max)
            || self.raise_pct_min > self.raise_pct_max
        {
            return Err(ConfigError::InvalidRaiseRange {
                min: self.raise_pct_min,
                max: self.raise_pct_max,
            });
        }

        Ok(())
    }

    /// Applies `GENERATOR_*` keys from the layered environment, consuming them.
    pub(crate) fn apply_env(
        &mut self,
        layered: &mut BTreeMap<String, String>,
    ) -> Result<(), ConfigError> {
        if let Some(seed) = take(layered, "GENERATOR_SEED") {
            self.seed = Some(parse_number("GENERATOR_SEED", &seed)?);
        }
        if let Some(names) = take(layered, "GENERATOR_DEPARTMENTS") {
            self.departments = names
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(|name| {
                    let description = default_departments()
                        .into_iter()
                        .find(|template| template.name.eq_ignore_ascii_case(name))
                        .map(|template| template.description)
                        .unwrap_or_default();
                    DepartmentTemplate::new(name, description)
                })
                .collect();
        }
        if let Some(value) = take(layered, "GENERATOR_BUDGET_MIN") {
            self.budget_min = parse_number("GENERATOR_BUDGET_MIN", &value)?;
        }
        if let Some(value) = take(layered, "GENERATOR_BUDGET_MAX") {
            self.budget_max = parse_number("GENERATOR_BUDGET_MAX", &value)?;
        }
        if let Some(value) = take(layered, "GENERATOR_POSITION_WEIGHTS") {
            self.position_weights = parse_weight_map("GENERATOR_POSITION_WEIGHTS", &value)?;
        }
        if let Some(value) = take(layered, "GENERATOR_ATTENDANCE_WEIGHTS") {
            self.attendance_weights = parse_weight_map("GENERATOR_ATTENDANCE_WEIGHTS", &value)?;
        }
        if let Some(value) = take(layered, "GENERATOR_SALARY_BANDS") {
            // Bands that are not mentioned keep their current value.
            let overrides = parse_salary_bands("GENERATOR_SALARY_BANDS", &value)?;
            self.salary_bands.extend(overrides);
        }
        if let Some(value) = take(layered, "GENERATOR_HIRE_WINDOW_YEARS") {
            self.hire_window_years = parse_number("GENERATOR_HIRE_WINDOW_YEARS", &value)?;
        }
        if let Some(value) = take(layered, "GENERATOR_DEPARTMENT_MANAGER_MIN_POSITION") {
            self.department_manager_min_position =
                value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "GENERATOR_DEPARTMENT_MANAGER_MIN_POSITION".to_string(),
                    value: value.clone(),
                })?;
        }
        if let Some(value) = take(layered, "GENERATOR_MANAGER_ASSIGNMENT_RATE") {
            self.manager_assignment_rate =
                parse_number("GENERATOR_MANAGER_ASSIGNMENT_RATE", &value)?;
        }
        if let Some(value) = take(layered, "GENERATOR_MAX_ATTENDANCE_DAYS") {
            self.max_attendance_days = parse_number("GENERATOR_MAX_ATTENDANCE_DAYS", &value)?;
        }
        if let Some(value) = take(layered, "GENERATOR_MAX_DEPARTMENT_COUNT") {
            self.max_department_count = parse_number("GENERATOR_MAX_DEPARTMENT_COUNT", &value)?;
        }
        if let Some(value) = take(layered, "GENERATOR_MAX_EMPLOYEE_COUNT") {
            self.max_employee_count = parse_number("GENERATOR_MAX_EMPLOYEE_COUNT", &value)?;
        }
        if let Some(value) = take(layered, "GENERATOR_MAX_REVIEWS_PER_EMPLOYEE") {
            self.max_reviews_per_employee =
                parse_number("GENERATOR_MAX_REVIEWS_PER_EMPLOYEE", &value)?;
        }
        if let Some(value) = take(layered, "GENERATOR_MAX_SALARY_ADJUSTMENTS") {
            self.max_salary_adjustments =
                parse_number("GENERATOR_MAX_SALARY_ADJUSTMENTS", &value)?;
        }
        if let Some(value) = take(layered, "GENERATOR_INSERT_BATCH_SIZE") {
            self.insert_batch_size = parse_number("GENERATOR_INSERT_BATCH_SIZE", &value)?;
        }

        Ok(())
    }
}

fn take(layered: &mut BTreeMap<String, String>, key: &str) -> Option<String> {
    layered.remove(key).filter(|v| !v.trim().is_empty())
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Parses `name:weight` pairs separated by commas, e.g. `intern:0.1,junior:0.3`.
pub(crate) fn parse_weight_map<K>(key: &str, raw: &str) -> Result<BTreeMap<K, f64>, ConfigError>
where
    K: FromStr + Ord,
{
    let mut weights = BTreeMap::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: entry.to_string(),
        };
        let (name, weight) = entry.split_once(':').ok_or_else(invalid)?;
        let name: K = name.parse().map_err(|_| invalid())?;
        let weight: f64 = weight.trim().parse().map_err(|_| invalid())?;
        weights.insert(name, weight);
    }
    Ok(weights)
}

/// Parses `position:min-max` pairs separated by commas.
pub(crate) fn parse_salary_bands(
    key: &str,
    raw: &str,
) -> Result<BTreeMap<Position, SalaryBand>, ConfigError> {
    let mut bands = BTreeMap::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: entry.to_string(),
        };
        let (name, range) = entry.split_once(':').ok_or_else(invalid)?;
        let (min, max) = range.split_once('-').ok_or_else(invalid)?;
        let position: Position = name.parse().map_err(|_| invalid())?;
        let min: f64 = min.trim().parse().map_err(|_| invalid())?;
        let max: f64 = max.trim().parse().map_err(|_| invalid())?;
        bands.insert(position, SalaryBand::new(min, max));
    }
    Ok(bands)
}

fn validate_weights<K: ToString>(
    table: &'static str,
    weights: &BTreeMap<K, f64>,
) -> Result<(), ConfigError> {
    if let Some((key, weight)) = weights
        .iter()
        .find(|(_, weight)| !weight.is_finite() || **weight < 0.0)
    {
        return Err(ConfigError::InvalidWeight {
            table,
            key: key.to_string(),
            value: *weight,
        });
    }
    if weights.values().sum::<f64>() <= 0.0 {
        return Err(ConfigError::EmptyWeightTable { table });
    }
    Ok(())
}

fn default_departments() -> Vec<DepartmentTemplate> {
    vec![
        DepartmentTemplate::new("Engineering", "Software development and technical innovation"),
        DepartmentTemplate::new("Marketing", "Brand promotion and customer acquisition"),
        DepartmentTemplate::new("Sales", "Revenue generation and client relationships"),
        DepartmentTemplate::new(
            "Human Resources",
            "Employee management and organizational development",
        ),
        DepartmentTemplate::new("Finance", "Financial planning and accounting"),
        DepartmentTemplate::new("Operations", "Facilities, logistics and internal processes"),
        DepartmentTemplate::new("Customer Support", "Customer success and issue resolution"),
        DepartmentTemplate::new("Product", "Product strategy and roadmap ownership"),
        DepartmentTemplate::new("Legal", "Contracts, compliance and corporate governance"),
        DepartmentTemplate::new("Research", "Applied research and prototyping"),
    ]
}

fn default_budget_min() -> f64 {
    1_000_000.0
}

fn default_budget_max() -> f64 {
    3_000_000.0
}

fn default_position_weights() -> BTreeMap<Position, f64> {
    BTreeMap::from([
        (Position::Intern, 0.10),
        (Position::Junior, 0.30),
        (Position::Senior, 0.30),
        (Position::Lead, 0.15),
        (Position::Manager, 0.10),
        (Position::Director, 0.05),
    ])
}

fn default_salary_band(position: Position) -> SalaryBand {
    match position {
        Position::Intern => SalaryBand::new(40_000.0, 55_000.0),
        Position::Junior => SalaryBand::new(60_000.0, 85_000.0),
        Position::Senior => SalaryBand::new(90_000.0, 130_000.0),
        Position::Lead => SalaryBand::new(120_000.0, 160_000.0),
        Position::Manager => SalaryBand::new(140_000.0, 190_000.0),
        Position::Director => SalaryBand::new(180_000.0, 250_000.0),
    }
}

fn default_salary_bands() -> BTreeMap<Position, SalaryBand> {
    Position::ALL
        .into_iter()
        .map(|position| (position, default_salary_band(position)))
        .collect()
}

fn default_hire_window_years() -> u32 {
    5
}

fn default_department_manager_min_position() -> Position {
    Position::Manager
}

fn default_manager_assignment_rate() -> f64 {
    0.9
}

fn default_attendance_weights() -> BTreeMap<AttendanceStatus, f64> {
    BTreeMap::from([
        (AttendanceStatus::Present, 0.82),
        (AttendanceStatus::Late, 0.08),
        (AttendanceStatus::HalfDay, 0.04),
        (AttendanceStatus::Absent, 0.03),
        (AttendanceStatus::SickLeave, 0.02),
        (AttendanceStatus::Vacation, 0.01),
    ])
}

fn default_max_attendance_days() -> u32 {
    366
}

fn default_max_department_count() -> u32 {
    1_000
}

fn default_max_employee_count() -> u32 {
    100_000
}

fn default_max_reviews_per_employee() -> u32 {
    8 // two years of quarterly reviews
}

fn default_score_baseline() -> f64 {
    3.0
}

fn default_score_rank_step() -> f64 {
    0.2
}

fn default_max_salary_adjustments() -> u32 {
    3
}

fn default_raise_pct_min() -> f64 {
    0.03
}

fn default_raise_pct_max() -> f64 {
    0.15
}

fn default_insert_batch_size() -> usize {
    500
}
