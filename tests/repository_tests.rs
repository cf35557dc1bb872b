mod test_utils;

use chrono::{NaiveDate, Utc};
use sea_orm::TransactionTrait;
use uuid::Uuid;
use workforce::models::{Position, department, employee};
use workforce::repositories::{
    CLEAR_ORDER, DepartmentRepository, EmployeeRepository, EntityCounts, dataset,
};

use test_utils::setup_test_db;

fn department(name: &str) -> department::Model {
    department::Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: format!("{name} department"),
        budget: 1_500_000.0,
        manager_id: None,
        is_active: true,
        created_at: Utc::now().fixed_offset(),
    }
}

fn employee(code: &str, department_id: Uuid, position: Position, manager_id: Option<Uuid>) -> employee::Model {
    employee::Model {
        id: Uuid::new_v4(),
        employee_code: code.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: format!("ada.{}@company.com", code.to_ascii_lowercase()),
        phone: "+1-555-100-0000".to_string(),
        department_id,
        position,
        hire_date: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
        birth_date: NaiveDate::from_ymd_opt(1990, 7, 14),
        salary: 95_000.0,
        manager_id,
        is_active: true,
        created_at: Utc::now().fixed_offset(),
    }
}

#[tokio::test]
async fn employees_are_inserted_seniors_first() {
    let db = setup_test_db().await.unwrap();
    let engineering = department("Engineering");
    DepartmentRepository::new(&db)
        .insert_batch(std::slice::from_ref(&engineering), 10)
        .await
        .unwrap();

    let director = employee("EMP001", engineering.id, Position::Director, None);
    let lead = employee("EMP002", engineering.id, Position::Lead, Some(director.id));
    let junior = employee("EMP003", engineering.id, Position::Junior, Some(lead.id));

    // Reports listed before their managers, in batches of one.
    let written = EmployeeRepository::new(&db)
        .insert_batch(&[junior.clone(), lead.clone(), director.clone()], 1)
        .await
        .unwrap();
    assert_eq!(written, 3);

    let stored = EmployeeRepository::new(&db)
        .find_by_department(engineering.id)
        .await
        .unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[2].manager_id, Some(lead.id));
}

#[tokio::test]
async fn manager_assignment_and_detach() {
    let db = setup_test_db().await.unwrap();
    let sales = department("Sales");
    let departments = DepartmentRepository::new(&db);
    departments.insert_batch(&[sales.clone()], 10).await.unwrap();

    let manager = employee("EMP001", sales.id, Position::Manager, None);
    EmployeeRepository::new(&db)
        .insert_batch(&[manager.clone()], 10)
        .await
        .unwrap();

    assert_eq!(departments.assign_manager(sales.id, Some(manager.id)).await.unwrap(), 1);
    let stored = departments.find_by_id(sales.id).await.unwrap().unwrap();
    assert_eq!(stored.manager_id, Some(manager.id));

    assert_eq!(departments.detach_managers().await.unwrap(), 1);
    let stored = departments.find_by_id(sales.id).await.unwrap().unwrap();
    assert_eq!(stored.manager_id, None);

    let names = departments.existing_names().await.unwrap();
    assert!(names.contains("Sales"));
}

#[tokio::test]
async fn clear_all_removes_rows_in_dependency_order() {
    let db = setup_test_db().await.unwrap();
    let finance = department("Finance");
    DepartmentRepository::new(&db)
        .insert_batch(&[finance.clone()], 10)
        .await
        .unwrap();
    let head = employee("EMP001", finance.id, Position::Director, None);
    let analyst = employee("EMP002", finance.id, Position::Senior, Some(head.id));
    EmployeeRepository::new(&db)
        .insert_batch(&[head.clone(), analyst], 10)
        .await
        .unwrap();
    DepartmentRepository::new(&db)
        .assign_manager(finance.id, Some(head.id))
        .await
        .unwrap();

    let txn = db.begin().await.unwrap();
    let deleted = dataset::clear_all(&txn).await.unwrap();
    txn.commit().await.unwrap();

    assert_eq!(deleted.departments, 1);
    assert_eq!(deleted.employees, 2);
    assert_eq!(deleted.total(), 3);
    assert_eq!(dataset::counts(&db).await.unwrap(), EntityCounts::default());
    assert_eq!(CLEAR_ORDER.last().map(|e| e.table_name()), Some("departments"));
}

#[tokio::test]
async fn unique_department_names_are_enforced() {
    let db = setup_test_db().await.unwrap();
    let departments = DepartmentRepository::new(&db);
    departments.insert_batch(&[department("Legal")], 10).await.unwrap();

    let err = departments
        .insert_batch(&[department("Legal")], 10)
        .await
        .unwrap_err();
    assert!(workforce::error::is_unique_violation(&err));
}
