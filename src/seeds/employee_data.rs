//! Employee dataset generator
//!
//! Plans a complete organization in memory and persists it in a single
//! transaction. Either the optional wipe and every insert succeed together,
//! or storage is left exactly as it was.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::repositories::{
    AttendanceRepository, DepartmentRepository, EmployeeRepository, EntityCounts,
    PerformanceRepository, SalaryRepository, dataset,
};
use crate::seeds::plan::{OrgPlan, OrgPlanner, PlanCounts, StoredIdentifiers};

/// Volumes and options for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub department_count: u32,
    pub employee_count: u32,
    /// Calendar days, ending today, that receive attendance records
    pub attendance_days: u32,
    /// Wipe every generated table before generating
    pub clear_existing: bool,
    /// Overrides the configured seed
    pub seed: Option<u64>,
    /// Calendar anchor; defaults to the current UTC date
    pub today: Option<NaiveDate>,
}

impl GenerationRequest {
    pub fn new(
        department_count: u32,
        employee_count: u32,
        attendance_days: u32,
        clear_existing: bool,
    ) -> Self {
        Self {
            department_count,
            employee_count,
            attendance_days,
            clear_existing,
            seed: None,
            today: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub created: EntityCounts,
    /// Rows removed before generating, when a wipe was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleared: Option<EntityCounts>,
    /// Seed that reproduces this run
    pub seed: u64,
    pub today: NaiveDate,
}

/// Generates and persists synthetic organizations.
#[derive(Clone)]
pub struct EmployeeDataGenerator {
    db: Arc<DatabaseConnection>,
    config: Arc<GeneratorConfig>,
}

impl EmployeeDataGenerator {
    pub fn new(db: Arc<DatabaseConnection>, config: Arc<GeneratorConfig>) -> Self {
        Self { db, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a dataset
    ///
    /// Parameters are validated before storage is touched. The wipe (when
    /// requested), identifier lookup, and every insert share one transaction
    /// that is rolled back on any failure.
    #[instrument(
        skip_all,
        fields(
            department_count = request.department_count,
            employee_count = request.employee_count,
            attendance_days = request.attendance_days,
            clear_existing = request.clear_existing,
        )
    )]
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationReport, GenerationError> {
        self.validate(&request)?;

        let today = request.today.unwrap_or_else(|| Utc::now().date_naive());
        let seed = request
            .seed
            .or(self.config.seed)
            .unwrap_or_else(rand::random);
        let planner = OrgPlanner::new(&self.config, today, Utc::now().fixed_offset())?;
        let mut rng = StdRng::seed_from_u64(seed);

        info!(seed, %today, "Starting dataset generation");

        let txn = self.db.begin().await?;
        match self.run(&txn, &planner, &mut rng, &request).await {
            Ok((created, cleared)) => {
                txn.commit().await?;
                info!(
                    departments = created.departments,
                    employees = created.employees,
                    attendance_records = created.attendance_records,
                    performance_reviews = created.performance_reviews,
                    salary_records = created.salary_records,
                    "Dataset generation committed"
                );
                Ok(GenerationReport {
                    created,
                    cleared,
                    seed,
                    today,
                })
            }
            Err(err) => {
                warn!(error = %err, code = err.code(), "Dataset generation failed, rolling back");
                if let Err(rollback_err) = txn.rollback().await {
                    log::error!("Failed to roll back generation transaction: {}", rollback_err);
                }
                Err(err)
            }
        }
    }

    /// Reject out-of-range volumes before any storage access.
    pub fn validate(&self, request: &GenerationRequest) -> Result<(), GenerationError> {
        self.config.validate()?;

        check_count(
            "department_count",
            request.department_count,
            self.config.max_department_count,
        )?;
        check_count(
            "employee_count",
            request.employee_count,
            self.config.max_employee_count,
        )?;
        check_count(
            "attendance_days",
            request.attendance_days,
            self.config.max_attendance_days,
        )?;

        Ok(())
    }

    async fn run(
        &self,
        txn: &DatabaseTransaction,
        planner: &OrgPlanner<'_>,
        rng: &mut StdRng,
        request: &GenerationRequest,
    ) -> Result<(EntityCounts, Option<EntityCounts>), GenerationError> {
        let cleared = if request.clear_existing {
            let deleted = dataset::clear_all(txn).await?;
            info!(rows = deleted.total(), "Cleared existing dataset");
            Some(deleted)
        } else {
            None
        };

        let stored = StoredIdentifiers {
            department_names: DepartmentRepository::new(txn).existing_names().await?,
            employee_codes: EmployeeRepository::new(txn).existing_codes().await?,
        };

        let counts = PlanCounts {
            departments: request.department_count,
            employees: request.employee_count,
            attendance_days: request.attendance_days,
        };
        let plan = planner.plan(rng, counts, &stored)?;
        debug!(planned = ?plan.summary(), "Organization planned");

        let created = self.persist(txn, &plan).await?;
        Ok((created, cleared))
    }

    /// Writes a plan in dependency order: departments without managers,
    /// employees (seniors first), department managers, then history tables.
    #[instrument(
        skip_all,
        fields(departments = plan.departments.len(), employees = plan.employees.len())
    )]
    async fn persist<C: ConnectionTrait>(
        &self,
        conn: &C,
        plan: &OrgPlan,
    ) -> Result<EntityCounts, GenerationError> {
        let batch = self.config.insert_batch_size;
        let departments = DepartmentRepository::new(conn);

        let unmanaged: Vec<_> = plan
            .departments
            .iter()
            .cloned()
            .map(|mut department| {
                department.manager_id = None;
                department
            })
            .collect();
        departments.insert_batch(&unmanaged, batch).await?;
        debug!(count = unmanaged.len(), "Inserted departments");

        EmployeeRepository::new(conn)
            .insert_batch(&plan.employees, batch)
            .await?;
        debug!(count = plan.employees.len(), "Inserted employees");

        for department in &plan.departments {
            if department.manager_id.is_some() {
                departments
                    .assign_manager(department.id, department.manager_id)
                    .await?;
            }
        }

        AttendanceRepository::new(conn)
            .insert_batch(&plan.attendance, batch)
            .await?;
        PerformanceRepository::new(conn)
            .insert_batch(&plan.reviews, batch)
            .await?;
        SalaryRepository::new(conn)
            .insert_batch(&plan.salaries, batch)
            .await?;

        Ok(plan.summary())
    }
}

fn check_count(parameter: &'static str, value: u32, max: u32) -> Result<(), GenerationError> {
    if value == 0 {
        return Err(GenerationError::invalid_parameter(
            parameter,
            "must be a positive integer",
        ));
    }
    if value > max {
        return Err(GenerationError::invalid_parameter(
            parameter,
            format!("must be at most {max}, got {value}"),
        ));
    }
    Ok(())
}
