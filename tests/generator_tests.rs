//! Integration tests for the dataset generator against in-memory SQLite.

mod test_utils;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{Datelike, Duration, Weekday};
use uuid::Uuid;
use workforce::error::GenerationError;
use workforce::models::{SalaryType, employee, round2};
use workforce::repositories::{
    AttendanceRepository, DepartmentRepository, EmployeeRepository, EntityCounts,
    PerformanceRepository, SalaryRepository, dataset,
};
use workforce::seeds::GenerationRequest;

use test_utils::{anchor_date, execute_sql, generator, setup_test_db_arc};

fn request(departments: u32, employees: u32, days: u32, clear: bool) -> GenerationRequest {
    GenerationRequest::new(departments, employees, days, clear)
        .with_seed(20_250_618)
        .with_today(anchor_date())
}

#[tokio::test]
async fn five_by_five_scenario_populates_every_table() {
    let db = setup_test_db_arc().await.unwrap();
    let report = generator(db.clone())
        .generate(request(5, 5, 30, true))
        .await
        .unwrap();

    assert_eq!(report.created.departments, 5);
    assert_eq!(report.created.employees, 5);
    assert_eq!(report.cleared, Some(EntityCounts::default()));
    assert_eq!(report.today, anchor_date());

    let stored = dataset::counts(db.as_ref()).await.unwrap();
    assert_eq!(stored, report.created);

    let departments = DepartmentRepository::new(db.as_ref()).find_all().await.unwrap();
    let department_ids: HashSet<Uuid> = departments.iter().map(|d| d.id).collect();
    let employees = EmployeeRepository::new(db.as_ref()).find_all().await.unwrap();
    assert!(employees.iter().all(|e| department_ids.contains(&e.department_id)));

    let window_start = anchor_date() - Duration::days(29);
    let attendance = AttendanceRepository::new(db.as_ref());
    let reviews = PerformanceRepository::new(db.as_ref());
    let salaries = SalaryRepository::new(db.as_ref());

    for employee in &employees {
        let records = attendance.for_employee(employee.id).await.unwrap();
        for record in &records {
            assert!(record.date >= window_start && record.date <= anchor_date());
            assert!(!matches!(record.date.weekday(), Weekday::Sat | Weekday::Sun));
        }
        if employee.hire_date <= window_start {
            assert!(
                (21..=22).contains(&records.len()),
                "expected a month of weekdays, got {}",
                records.len()
            );
        }

        let quarter_after_hire = employee
            .hire_date
            .checked_add_months(chrono::Months::new(3))
            .unwrap();
        if quarter_after_hire < anchor_date() {
            assert!(!reviews.for_employee(employee.id).await.unwrap().is_empty());
        }

        assert!(!salaries.for_employee(employee.id).await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn reporting_lines_are_consistent() {
    let db = setup_test_db_arc().await.unwrap();
    generator(db.clone())
        .generate(request(4, 120, 5, true))
        .await
        .unwrap();

    let employees = EmployeeRepository::new(db.as_ref()).find_all().await.unwrap();
    let by_id: HashMap<Uuid, &employee::Model> = employees.iter().map(|e| (e.id, e)).collect();

    for department in DepartmentRepository::new(db.as_ref()).find_all().await.unwrap() {
        if let Some(manager_id) = department.manager_id {
            assert_eq!(by_id[&manager_id].department_id, department.id);
        }
    }

    for employee in &employees {
        let mut seen = HashSet::from([employee.id]);
        let mut current = employee.manager_id;
        while let Some(manager_id) = current {
            assert!(seen.insert(manager_id), "cycle through {manager_id}");
            let manager = by_id[&manager_id];
            current = manager.manager_id;
        }
        if let Some(manager_id) = employee.manager_id {
            let manager = by_id[&manager_id];
            assert!(manager.position > employee.position);
            assert_eq!(manager.department_id, employee.department_id);
        }
    }
}

#[tokio::test]
async fn attendance_is_unique_per_day_and_skips_weekends() {
    let db = setup_test_db_arc().await.unwrap();
    generator(db.clone())
        .generate(request(3, 40, 90, true))
        .await
        .unwrap();

    let records = AttendanceRepository::new(db.as_ref()).find_all().await.unwrap();
    assert!(!records.is_empty());

    let hires: HashMap<Uuid, chrono::NaiveDate> = EmployeeRepository::new(db.as_ref())
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|e| (e.id, e.hire_date))
        .collect();

    let mut seen = HashSet::new();
    for record in &records {
        assert!(seen.insert((record.employee_id, record.date)));
        assert!(!matches!(record.date.weekday(), Weekday::Sat | Weekday::Sun));
        assert!(record.date >= hires[&record.employee_id]);
        if !record.status.is_on_site() {
            assert_eq!(record.hours_worked, 0.0);
        }
    }
}

#[tokio::test]
async fn stored_reviews_and_salaries_hold_their_invariants() {
    let db = setup_test_db_arc().await.unwrap();
    generator(db.clone())
        .generate(request(3, 60, 1, true))
        .await
        .unwrap();

    for review in PerformanceRepository::new(db.as_ref()).find_all().await.unwrap() {
        let mean = review.sub_scores().iter().map(|s| f64::from(*s)).sum::<f64>() / 4.0;
        assert_eq!(review.overall_rating(), round2(mean));
        assert_ne!(review.reviewer_id, Some(review.employee_id));
    }

    let salaries = SalaryRepository::new(db.as_ref());
    for employee in EmployeeRepository::new(db.as_ref()).find_all().await.unwrap() {
        let history = salaries.for_employee(employee.id).await.unwrap();
        assert_eq!(history[0].salary_type, SalaryType::Initial);
        assert_eq!(history[0].effective_date, employee.hire_date);
        for pair in history.windows(2) {
            assert!(pair[0].effective_date <= pair[1].effective_date);
            assert!(pair[0].base_salary <= pair[1].base_salary);
        }

        let current = salaries.current_for(employee.id).await.unwrap().unwrap();
        assert_eq!(current.base_salary, employee.salary);
    }
}

#[tokio::test]
async fn runs_without_clear_are_additive() {
    let db = setup_test_db_arc().await.unwrap();
    let generator = generator(db.clone());

    generator.generate(request(5, 5, 10, true)).await.unwrap();
    let second = generator
        .generate(request(5, 5, 10, false).with_seed(99))
        .await
        .unwrap();
    assert!(second.cleared.is_none());

    let counts = dataset::counts(db.as_ref()).await.unwrap();
    assert_eq!(counts.departments, 10);
    assert_eq!(counts.employees, 10);

    let names: HashSet<String> = DepartmentRepository::new(db.as_ref())
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names.len(), 10);

    let codes: HashSet<String> = EmployeeRepository::new(db.as_ref())
        .existing_codes()
        .await
        .unwrap()
        .into_iter()
        .collect();
    assert!(codes.contains("EMP001"));
    assert!(codes.contains("EMP010"));
}

#[tokio::test]
async fn clear_existing_replaces_the_dataset() {
    let db = setup_test_db_arc().await.unwrap();
    let generator = generator(db.clone());

    let first = generator.generate(request(2, 8, 15, true)).await.unwrap();
    let second = generator
        .generate(request(3, 4, 15, true).with_seed(1))
        .await
        .unwrap();

    assert_eq!(second.cleared, Some(first.created));
    assert_eq!(dataset::counts(db.as_ref()).await.unwrap(), second.created);
}

#[tokio::test]
async fn zero_employees_is_rejected_without_touching_storage() {
    let db = setup_test_db_arc().await.unwrap();
    let generator = generator(db.clone());
    generator.generate(request(2, 3, 5, true)).await.unwrap();
    let before = dataset::counts(db.as_ref()).await.unwrap();

    let err = generator.generate(request(2, 0, 5, true)).await.unwrap_err();
    assert!(matches!(
        err,
        GenerationError::InvalidParameter {
            parameter: "employee_count",
            ..
        }
    ));
    assert_eq!(err.code(), "INVALID_PARAMETER");

    let err = generator.generate(request(2, 3, 367, true)).await.unwrap_err();
    assert_eq!(err.code(), "INVALID_PARAMETER");

    assert_eq!(dataset::counts(db.as_ref()).await.unwrap(), before);
}

#[tokio::test]
async fn storage_failure_after_clear_rolls_back_everything() {
    let db = setup_test_db_arc().await.unwrap();
    let generator = generator(db.clone());
    generator.generate(request(3, 10, 10, true)).await.unwrap();
    let before = dataset::counts(db.as_ref()).await.unwrap();
    let departments_before = DepartmentRepository::new(db.as_ref()).find_all().await.unwrap();

    execute_sql(
        db.as_ref(),
        "CREATE TRIGGER block_salary_inserts BEFORE INSERT ON salary_records \
         BEGIN SELECT RAISE(ABORT, 'salary inserts blocked'); END;",
    )
    .await
    .unwrap();

    let err = generator
        .generate(request(2, 5, 10, true).with_seed(5))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::StorageFailure(_)));
    assert_eq!(err.code(), "STORAGE_FAILURE");

    assert_eq!(dataset::counts(db.as_ref()).await.unwrap(), before);
    assert_eq!(
        DepartmentRepository::new(db.as_ref()).find_all().await.unwrap(),
        departments_before
    );
}

#[tokio::test]
async fn same_seed_and_date_reproduce_the_dataset() {
    let first_db = setup_test_db_arc().await.unwrap();
    let second_db = setup_test_db_arc().await.unwrap();

    let a = generator(first_db.clone())
        .generate(request(3, 12, 20, true))
        .await
        .unwrap();
    let b = generator(second_db.clone())
        .generate(request(3, 12, 20, true))
        .await
        .unwrap();
    assert_eq!(a.created, b.created);
    assert_eq!(a.seed, b.seed);

    let first: Vec<_> = EmployeeRepository::new(first_db.as_ref())
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|e| (e.id, e.employee_code, e.position, e.hire_date, e.salary, e.manager_id))
        .collect();
    let second: Vec<_> = EmployeeRepository::new(second_db.as_ref())
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|e| (e.id, e.employee_code, e.position, e.hire_date, e.salary, e.manager_id))
        .collect();
    assert_eq!(first, second);
}

#[tokio::test]
async fn generator_reports_the_seed_it_used() {
    let db = setup_test_db_arc().await.unwrap();
    let report = generator(Arc::clone(&db))
        .generate(GenerationRequest::new(1, 2, 3, true).with_today(anchor_date()))
        .await
        .unwrap();

    let replay_db = setup_test_db_arc().await.unwrap();
    let replay = generator(replay_db.clone())
        .generate(
            GenerationRequest::new(1, 2, 3, true)
                .with_seed(report.seed)
                .with_today(anchor_date()),
        )
        .await
        .unwrap();

    assert_eq!(replay.created, report.created);
    assert_eq!(
        EmployeeRepository::new(db.as_ref()).find_all().await.unwrap().len(),
        EmployeeRepository::new(replay_db.as_ref()).find_all().await.unwrap().len()
    );
}
