//! In-memory planning of a synthetic organization.
//!
//! Every step draws from the caller's random source and returns plain entity
//! models, so a plan can be inspected (and replayed from a seed) before
//! anything touches storage.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveTime, Weekday};
use rand::Rng;
use sea_orm::prelude::{DateTimeWithTimeZone, Uuid};

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::models::{
    AttendanceStatus, Position, SalaryType, attendance, department, employee, performance,
    round2, salary,
};
use crate::repositories::EntityCounts;
use crate::seeds::names::{FIRST_NAMES, LAST_NAMES, feedback_pool};
use crate::seeds::weights::{WeightTableError, WeightedTable};

const EMPLOYEE_CODE_PREFIX: &str = "EMP";
const EMAIL_DOMAIN: &str = "company.com";
const WORKDAY_START_MINUTE: i64 = 9 * 60;
const MINUTES_PER_DAY: i64 = 24 * 60;
const DAYS_PER_YEAR: i64 = 365;
const REVIEW_PERIOD_MONTHS: u32 = 3;

/// Volumes requested for one planning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanCounts {
    pub departments: u32,
    pub employees: u32,
    pub attendance_days: u32,
}

/// Identifiers already present in storage that new rows must not collide with.
#[derive(Debug, Clone, Default)]
pub struct StoredIdentifiers {
    pub department_names: HashSet<String>,
    pub employee_codes: Vec<String>,
}

impl StoredIdentifiers {
    /// First employee number not used by any stored `EMPnnn` code.
    pub fn next_employee_number(&self) -> u32 {
        self.employee_codes
            .iter()
            .filter_map(|code| code.strip_prefix(EMPLOYEE_CODE_PREFIX))
            .filter_map(|digits| digits.parse::<u32>().ok())
            .max()
            .map_or(1, |highest| highest + 1)
    }
}

/// A complete organization ready to be persisted.
#[derive(Debug, Clone, Default)]
pub struct OrgPlan {
    pub departments: Vec<department::Model>,
    pub employees: Vec<employee::Model>,
    pub attendance: Vec<attendance::Model>,
    pub reviews: Vec<performance::Model>,
    pub salaries: Vec<salary::Model>,
}

impl OrgPlan {
    pub fn summary(&self) -> EntityCounts {
        EntityCounts {
            departments: self.departments.len() as u64,
            employees: self.employees.len() as u64,
            attendance_records: self.attendance.len() as u64,
            performance_reviews: self.reviews.len() as u64,
            salary_records: self.salaries.len() as u64,
        }
    }
}

/// Plans organizations against a fixed configuration and calendar anchor.
#[derive(Debug, Clone)]
pub struct OrgPlanner<'a> {
    config: &'a GeneratorConfig,
    positions: WeightedTable<Position>,
    statuses: WeightedTable<AttendanceStatus>,
    today: NaiveDate,
    now: DateTimeWithTimeZone,
}

impl<'a> OrgPlanner<'a> {
    pub fn new(
        config: &'a GeneratorConfig,
        today: NaiveDate,
        now: DateTimeWithTimeZone,
    ) -> Result<Self, WeightTableError> {
        Ok(Self {
            config,
            positions: WeightedTable::from_map("position", &config.position_weights)?,
            statuses: WeightedTable::from_map("attendance", &config.attendance_weights)?,
            today,
            now,
        })
    }

    /// Runs every step in dependency order.
    pub fn plan<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        counts: PlanCounts,
        stored: &StoredIdentifiers,
    ) -> Result<OrgPlan, GenerationError> {
        let mut departments =
            self.plan_departments(rng, counts.departments, &stored.department_names);
        let mut employees = self.plan_employees(
            rng,
            counts.employees,
            &departments,
            stored.next_employee_number(),
        )?;
        self.assign_managers(rng, &mut departments, &mut employees);
        let attendance = self.plan_attendance(rng, &employees, counts.attendance_days);
        let reviews = self.plan_performance(rng, &employees, &departments);
        let salaries = self.plan_salaries(rng, &mut employees);

        Ok(OrgPlan {
            departments,
            employees,
            attendance,
            reviews,
            salaries,
        })
    }

    /// Departments drawn from the configured pool, with names made unique
    /// against `taken` and against each other.
    pub fn plan_departments<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: u32,
        taken: &HashSet<String>,
    ) -> Vec<department::Model> {
        let pool = &self.config.departments;
        let offset = rng.gen_range(0..pool.len());
        let mut used: HashSet<String> = taken.clone();
        let mut departments = Vec::with_capacity(count as usize);

        for i in 0..count as usize {
            let template = &pool[(offset + i) % pool.len()];
            let name = unique_name(&template.name, &used);
            used.insert(name.clone());

            let budget = rng.gen_range(self.config.budget_min..=self.config.budget_max);

            departments.push(department::Model {
                id: next_id(rng),
                name,
                description: template.description.clone(),
                budget: (budget / 1_000.0).round() * 1_000.0,
                manager_id: None,
                is_active: true,
                created_at: self.now,
            });
        }

        departments
    }

    /// Employees spread uniformly over `departments`, numbered from `first_number`.
    pub fn plan_employees<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: u32,
        departments: &[department::Model],
        first_number: u32,
    ) -> Result<Vec<employee::Model>, GenerationError> {
        if count > 0 && departments.is_empty() {
            return Err(GenerationError::precondition(
                "employees",
                "no departments available to place employees in",
            ));
        }

        let hire_window_days = i64::from(self.config.hire_window_years) * DAYS_PER_YEAR;
        let mut employees = Vec::with_capacity(count as usize);

        for number in first_number..first_number.saturating_add(count) {
            let department = &departments[rng.gen_range(0..departments.len())];
            let position = self.positions.sample(rng);
            let band = self.config.salary_band(position);

            let hire_date = self.today - Duration::days(rng.gen_range(0..=hire_window_days));
            let age_at_hire = rng.gen_range(22 * DAYS_PER_YEAR..=60 * DAYS_PER_YEAR);
            let birth_date = hire_date - Duration::days(age_at_hire);

            let first_name = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
            let last_name = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
            let employee_code = format!("{EMPLOYEE_CODE_PREFIX}{number:03}");
            let email = format!(
                "{}.{}.{}@{EMAIL_DOMAIN}",
                first_name.to_ascii_lowercase(),
                last_name.to_ascii_lowercase(),
                employee_code.to_ascii_lowercase()
            );
            let phone = format!(
                "+1-555-{:03}-{:04}",
                rng.gen_range(100..1000),
                rng.gen_range(0..10_000)
            );

            employees.push(employee::Model {
                id: next_id(rng),
                employee_code,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email,
                phone,
                department_id: department.id,
                position,
                hire_date,
                birth_date: Some(birth_date),
                salary: round2(rng.gen_range(band.min..=band.max)),
                manager_id: None,
                is_active: true,
                created_at: self.now,
            });
        }

        Ok(employees)
    }

    /// Picks department heads and direct managers. A manager always has a
    /// strictly higher rank, so the reporting graph cannot contain cycles.
    pub fn assign_managers<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        departments: &mut [department::Model],
        employees: &mut [employee::Model],
    ) {
        for department in departments.iter_mut() {
            let candidates: Vec<Uuid> = employees
                .iter()
                .filter(|e| {
                    e.department_id == department.id
                        && e.position >= self.config.department_manager_min_position
                })
                .map(|e| e.id)
                .collect();
            department.manager_id = pick(rng, &candidates);
        }

        let roster: Vec<(Uuid, Uuid, Position)> = employees
            .iter()
            .map(|e| (e.id, e.department_id, e.position))
            .collect();

        for employee in employees.iter_mut() {
            let seniors: Vec<Uuid> = roster
                .iter()
                .filter(|(_, department_id, position)| {
                    *department_id == employee.department_id && *position > employee.position
                })
                .map(|(id, _, _)| *id)
                .collect();
            if seniors.is_empty() || !rng.gen_bool(self.config.manager_assignment_rate) {
                continue;
            }
            employee.manager_id = pick(rng, &seniors);
        }
    }

    /// One record per employee and weekday in the `days` calendar days ending
    /// today, skipping days before the hire date.
    pub fn plan_attendance<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        employees: &[employee::Model],
        days: u32,
    ) -> Vec<attendance::Model> {
        if days == 0 {
            return Vec::new();
        }
        let window_start = self.today - Duration::days(i64::from(days) - 1);
        let mut records = Vec::new();

        for employee in employees {
            let first_day = window_start.max(employee.hire_date);
            for date in first_day.iter_days().take_while(|date| *date <= self.today) {
                if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                    continue;
                }
                let status = self.statuses.sample(rng);
                let shift = plan_shift(rng, status);
                records.push(attendance::Model {
                    id: next_id(rng),
                    employee_id: employee.id,
                    date,
                    status,
                    check_in_time: shift.map(|s| s.check_in),
                    check_out_time: shift.map(|s| s.check_out),
                    break_minutes: shift.map_or(0, |s| s.break_minutes),
                    hours_worked: shift.map_or(0.0, |s| s.hours_worked),
                    created_at: self.now,
                });
            }
        }

        records
    }

    /// Quarterly reviews anchored at each employee's hire date.
    pub fn plan_performance<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        employees: &[employee::Model],
        departments: &[department::Model],
    ) -> Vec<performance::Model> {
        let department_heads: HashMap<Uuid, Uuid> = departments
            .iter()
            .filter_map(|d| d.manager_id.map(|manager| (d.id, manager)))
            .collect();
        let keep = self.config.max_reviews_per_employee as usize;
        let mut reviews = Vec::new();

        for employee in employees {
            let periods = completed_quarters(employee.hire_date, self.today);
            let skip = periods.len().saturating_sub(keep);

            let reviewer_id = employee.manager_id.or_else(|| {
                department_heads
                    .get(&employee.department_id)
                    .copied()
                    .filter(|head| *head != employee.id)
            });
            let expected = self.config.score_baseline
                + f64::from(employee.position.rank()) * self.config.score_rank_step;

            for (start, end) in periods.into_iter().skip(skip) {
                let adjustment: f64 = rng.gen_range(-0.8..=1.2);
                let mut score = || {
                    let noisy = expected + adjustment + rng.gen_range(-0.5..=0.5);
                    (noisy.round() as i16).clamp(performance::MIN_SCORE, performance::MAX_SCORE)
                };
                let scores = [score(), score(), score(), score()];
                let goals = 70.0 + 20.0 * adjustment + rng.gen_range(-20.0..=20.0);

                let pool = feedback_pool(performance::overall_rating(scores));
                let feedback = pool[rng.gen_range(0..pool.len())];

                reviews.push(performance::Model {
                    id: next_id(rng),
                    employee_id: employee.id,
                    reviewer_id,
                    review_period_start: start,
                    review_period_end: end,
                    review_year: end.year(),
                    review_quarter: (end.month0() / 3 + 1) as i16,
                    technical_skills: scores[0],
                    communication: scores[1],
                    teamwork: scores[2],
                    leadership: scores[3],
                    goals_achieved: (goals.round() as i16).clamp(0, 100),
                    feedback: feedback.to_string(),
                    created_at: self.now,
                });
            }
        }

        reviews
    }

    /// Salary history per employee; updates each employee's current salary
    /// to the last amount in its history.
    pub fn plan_salaries<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        employees: &mut [employee::Model],
    ) -> Vec<salary::Model> {
        let approvers: Vec<Uuid> = employees
            .iter()
            .filter(|e| e.position >= Position::Manager)
            .map(|e| e.id)
            .collect();
        let mut records = Vec::new();

        for employee in employees.iter_mut() {
            let eligible: Vec<Uuid> = approvers
                .iter()
                .copied()
                .filter(|id| *id != employee.id)
                .collect();
            let allowances = round2(rng.gen_range(1_000.0..=5_000.0));
            let deductions = round2(rng.gen_range(500.0..=2_000.0));
            let mut current = employee.salary;

            records.push(salary::Model {
                id: next_id(rng),
                employee_id: employee.id,
                effective_date: employee.hire_date,
                base_salary: current,
                allowances,
                deductions,
                bonus: 0.0,
                salary_type: SalaryType::Initial,
                reason: "Initial salary upon hiring".to_string(),
                approved_by: pick(rng, &eligible),
                created_at: self.now,
            });

            let years = employee.years_of_service(self.today);
            if years >= 1 {
                let drawn = rng.gen_range(0..=self.config.max_salary_adjustments);
                let adjustments = i64::from(drawn).min(years);
                let earliest = employee.hire_date + Duration::days(DAYS_PER_YEAR);
                let span = (self.today - earliest).num_days();

                let mut dates: Vec<NaiveDate> = (0..adjustments)
                    .map(|_| earliest + Duration::days(rng.gen_range(0..=span)))
                    .collect();
                dates.sort_unstable();

                for effective_date in dates {
                    let pct = rng
                        .gen_range(self.config.raise_pct_min..=self.config.raise_pct_max);
                    current = round2(current * (1.0 + pct));
                    let salary_type =
                        SalaryType::CHANGES[rng.gen_range(0..SalaryType::CHANGES.len())];
                    let bonus = if salary_type == SalaryType::PerformanceBonus {
                        round2(rng.gen_range(0.0..=10_000.0))
                    } else {
                        0.0
                    };

                    records.push(salary::Model {
                        id: next_id(rng),
                        employee_id: employee.id,
                        effective_date,
                        base_salary: current,
                        allowances,
                        deductions,
                        bonus,
                        salary_type,
                        reason: format!("{} - {:.1}% increase", salary_type.label(), pct * 100.0),
                        approved_by: pick(rng, &eligible),
                        created_at: self.now,
                    });
                }
            }

            employee.salary = current;
        }

        records
    }
}

#[derive(Debug, Clone, Copy)]
struct Shift {
    check_in: NaiveTime,
    check_out: NaiveTime,
    break_minutes: i32,
    hours_worked: f64,
}

fn plan_shift<R: Rng + ?Sized>(rng: &mut R, status: AttendanceStatus) -> Option<Shift> {
    let start_offset = match status {
        AttendanceStatus::Present | AttendanceStatus::HalfDay => rng.gen_range(-30..=30),
        AttendanceStatus::Late => rng.gen_range(15..=120),
        AttendanceStatus::Absent | AttendanceStatus::SickLeave | AttendanceStatus::Vacation => {
            return None;
        }
    };
    let (span, break_minutes): (i64, i64) = if status == AttendanceStatus::HalfDay {
        (rng.gen_range(240..=300), rng.gen_range(0..=15))
    } else {
        (rng.gen_range(510..=570), rng.gen_range(30..=60))
    };

    let check_in = WORKDAY_START_MINUTE + start_offset;
    Some(Shift {
        check_in: clock_time(check_in),
        check_out: clock_time(check_in + span),
        break_minutes: break_minutes as i32,
        hours_worked: round2((span - break_minutes) as f64 / 60.0),
    })
}

fn clock_time(minute_of_day: i64) -> NaiveTime {
    let minute_of_day = minute_of_day.clamp(0, MINUTES_PER_DAY - 1) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(minute_of_day * 60, 0).unwrap_or_default()
}

/// `(start, end)` of every hire-anchored quarter that ended before `today`.
fn completed_quarters(hire_date: NaiveDate, today: NaiveDate) -> Vec<(NaiveDate, NaiveDate)> {
    let quarter_start =
        |k: u32| hire_date.checked_add_months(Months::new(k * REVIEW_PERIOD_MONTHS));
    let mut periods = Vec::new();
    for k in 0.. {
        let (Some(start), Some(next)) = (quarter_start(k), quarter_start(k + 1)) else {
            break;
        };
        let end = next - Duration::days(1);
        if end >= today {
            break;
        }
        periods.push((start, end));
    }
    periods
}

fn unique_name(base: &str, used: &HashSet<String>) -> String {
    if !used.contains(base) {
        return base.to_string();
    }
    (2..)
        .map(|suffix| format!("{base} {suffix}"))
        .find(|candidate| !used.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}

fn pick<R: Rng + ?Sized>(rng: &mut R, ids: &[Uuid]) -> Option<Uuid> {
    if ids.is_empty() {
        None
    } else {
        Some(ids[rng.gen_range(0..ids.len())])
    }
}

fn next_id<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.r#gen()).into_uuid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 18).unwrap()
    }

    fn now() -> DateTimeWithTimeZone {
        Utc.with_ymd_and_hms(2025, 6, 18, 12, 0, 0).unwrap().into()
    }

    fn plan_with(config: &GeneratorConfig, seed: u64, counts: PlanCounts) -> OrgPlan {
        let planner = OrgPlanner::new(config, today(), now()).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        planner
            .plan(&mut rng, counts, &StoredIdentifiers::default())
            .unwrap()
    }

    fn counts(departments: u32, employees: u32, attendance_days: u32) -> PlanCounts {
        PlanCounts {
            departments,
            employees,
            attendance_days,
        }
    }

    #[test]
    fn same_seed_produces_identical_plans() {
        let config = GeneratorConfig::default();
        let a = plan_with(&config, 11, counts(4, 40, 20));
        let b = plan_with(&config, 11, counts(4, 40, 20));
        assert_eq!(a.departments, b.departments);
        assert_eq!(a.employees, b.employees);
        assert_eq!(a.attendance, b.attendance);
        assert_eq!(a.reviews, b.reviews);
        assert_eq!(a.salaries, b.salaries);

        let c = plan_with(&config, 12, counts(4, 40, 20));
        assert_ne!(a.employees, c.employees);
    }

    #[test]
    fn employees_only_reference_planned_departments() {
        let plan = plan_with(&GeneratorConfig::default(), 1, counts(3, 60, 5));
        let ids: HashSet<Uuid> = plan.departments.iter().map(|d| d.id).collect();
        assert!(plan.employees.iter().all(|e| ids.contains(&e.department_id)));
    }

    #[test]
    fn managers_outrank_reports_within_department() {
        let plan = plan_with(&GeneratorConfig::default(), 2, counts(3, 120, 1));
        let by_id: HashMap<Uuid, &employee::Model> =
            plan.employees.iter().map(|e| (e.id, e)).collect();

        for employee in &plan.employees {
            if let Some(manager_id) = employee.manager_id {
                let manager = by_id[&manager_id];
                assert_ne!(manager.id, employee.id);
                assert!(manager.position > employee.position);
                assert_eq!(manager.department_id, employee.department_id);
            }
        }

        for department in &plan.departments {
            if let Some(manager_id) = department.manager_id {
                let manager = by_id[&manager_id];
                assert_eq!(manager.department_id, department.id);
                assert!(manager.position >= Position::Manager);
            }
        }
    }

    #[test]
    fn department_names_avoid_stored_and_repeated_names() {
        let config = GeneratorConfig::default();
        let planner = OrgPlanner::new(&config, today(), now()).unwrap();
        let taken: HashSet<String> = config.departments.iter().map(|d| d.name.clone()).collect();
        let mut rng = StdRng::seed_from_u64(3);

        let departments = planner.plan_departments(&mut rng, 25, &taken);
        let names: HashSet<&str> = departments.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names.len(), 25);
        assert!(departments.iter().all(|d| !taken.contains(&d.name)));
        assert!(departments.iter().all(|d| d.budget % 1_000.0 == 0.0));
        assert!(
            departments
                .iter()
                .all(|d| (config.budget_min..=config.budget_max).contains(&d.budget))
        );
    }

    #[test]
    fn unique_name_appends_first_free_suffix() {
        let used = HashSet::from(["Sales".to_string(), "Sales 2".to_string()]);
        assert_eq!(unique_name("Sales", &used), "Sales 3");
        assert_eq!(unique_name("Legal", &used), "Legal");
    }

    #[test]
    fn employee_codes_continue_after_stored_codes() {
        let stored = StoredIdentifiers {
            department_names: HashSet::new(),
            employee_codes: vec!["EMP003".into(), "EMP010".into(), "LEGACY".into()],
        };
        assert_eq!(stored.next_employee_number(), 11);
        assert_eq!(StoredIdentifiers::default().next_employee_number(), 1);

        let config = GeneratorConfig::default();
        let planner = OrgPlanner::new(&config, today(), now()).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let plan = planner.plan(&mut rng, counts(1, 2, 1), &stored).unwrap();
        let codes: Vec<&str> = plan.employees.iter().map(|e| e.employee_code.as_str()).collect();
        assert_eq!(codes, vec!["EMP011", "EMP012"]);
    }

    #[test]
    fn employees_without_departments_violate_precondition() {
        let config = GeneratorConfig::default();
        let planner = OrgPlanner::new(&config, today(), now()).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let err = planner.plan_employees(&mut rng, 3, &[], 1).unwrap_err();
        assert_eq!(err.code(), "PRECONDITION_VIOLATION");
    }

    #[test]
    fn attendance_skips_weekends_and_days_before_hire() {
        let plan = plan_with(&GeneratorConfig::default(), 6, counts(2, 30, 45));
        let window_start = today() - Duration::days(44);
        let hires: HashMap<Uuid, NaiveDate> =
            plan.employees.iter().map(|e| (e.id, e.hire_date)).collect();
        let mut seen = HashSet::new();

        for record in &plan.attendance {
            assert!(!matches!(record.date.weekday(), Weekday::Sat | Weekday::Sun));
            assert!(record.date >= window_start && record.date <= today());
            assert!(record.date >= hires[&record.employee_id]);
            assert!(seen.insert((record.employee_id, record.date)));
        }
    }

    #[test]
    fn attendance_hours_match_status() {
        let plan = plan_with(&GeneratorConfig::default(), 7, counts(2, 40, 60));
        for record in &plan.attendance {
            match record.status {
                AttendanceStatus::Present | AttendanceStatus::Late => {
                    assert!((7.5..=9.0).contains(&record.hours_worked));
                    assert!(record.check_out_time > record.check_in_time);
                }
                AttendanceStatus::HalfDay => {
                    assert!((3.75..=5.0).contains(&record.hours_worked));
                }
                _ => {
                    assert_eq!(record.hours_worked, 0.0);
                    assert!(record.check_in_time.is_none());
                    assert!(record.check_out_time.is_none());
                }
            }
        }
    }

    #[test]
    fn late_arrivals_check_in_after_nine_fifteen() {
        let mut config = GeneratorConfig::default();
        config.attendance_weights = [(AttendanceStatus::Late, 1.0)].into_iter().collect();
        let plan = plan_with(&config, 8, counts(1, 5, 30));
        let threshold = NaiveTime::from_hms_opt(9, 15, 0).unwrap();
        assert!(!plan.attendance.is_empty());
        assert!(
            plan.attendance
                .iter()
                .all(|r| r.check_in_time.is_some_and(|t| t >= threshold))
        );
    }

    #[test]
    fn reviews_cover_completed_quarters_within_cap() {
        let config = GeneratorConfig::default();
        let plan = plan_with(&config, 9, counts(2, 50, 1));

        for employee in &plan.employees {
            let reviews: Vec<_> = plan
                .reviews
                .iter()
                .filter(|r| r.employee_id == employee.id)
                .collect();
            let completed = completed_quarters(employee.hire_date, today()).len();
            assert_eq!(
                reviews.len(),
                completed.min(config.max_reviews_per_employee as usize)
            );

            for review in reviews {
                assert!(review.review_period_end < today());
                assert!(review.review_period_start < review.review_period_end);
                assert_ne!(review.reviewer_id, Some(employee.id));
                assert!(review.sub_scores().iter().all(|s| (1..=5).contains(s)));
                assert!((0..=100).contains(&review.goals_achieved));
                assert!((1..=4).contains(&review.review_quarter));
                assert_eq!(
                    review.overall_rating(),
                    round2(review.sub_scores().iter().map(|s| f64::from(*s)).sum::<f64>() / 4.0)
                );
            }
        }
    }

    #[test]
    fn completed_quarters_are_contiguous() {
        let hire = NaiveDate::from_ymd_opt(2024, 11, 30).unwrap();
        let periods = completed_quarters(hire, today());
        assert_eq!(
            periods.first(),
            Some(&(hire, NaiveDate::from_ymd_opt(2025, 2, 27).unwrap()))
        );
        assert_eq!(periods.len(), 1);

        let hire = NaiveDate::from_ymd_opt(2022, 1, 10).unwrap();
        let periods = completed_quarters(hire, today());
        assert_eq!(periods.len(), 13);
        for pair in periods.windows(2) {
            assert_eq!(pair[0].1 + Duration::days(1), pair[1].0);
        }
        assert!(completed_quarters(today(), today()).is_empty());
    }

    #[test]
    fn salary_history_is_non_decreasing_and_matches_current_salary() {
        let plan = plan_with(&GeneratorConfig::default(), 10, counts(3, 80, 1));

        for employee in &plan.employees {
            let mut history: Vec<_> = plan
                .salaries
                .iter()
                .filter(|s| s.employee_id == employee.id)
                .collect();
            history.sort_by_key(|s| s.effective_date);

            assert!(!history.is_empty());
            assert_eq!(history[0].salary_type, SalaryType::Initial);
            assert_eq!(history[0].effective_date, employee.hire_date);
            for pair in history.windows(2) {
                assert!(pair[1].base_salary >= pair[0].base_salary);
                assert!(pair[1].effective_date >= pair[0].effective_date);
            }
            assert_eq!(history.last().unwrap().base_salary, employee.salary);
            assert!(history.iter().all(|s| s.approved_by != Some(employee.id)));
            assert!(
                history
                    .iter()
                    .filter(|s| s.salary_type != SalaryType::PerformanceBonus)
                    .all(|s| s.bonus == 0.0)
            );
            assert!(
                history.len() as i64 - 1 <= employee.years_of_service(today()),
                "more raises than years of service"
            );
        }
    }
}
