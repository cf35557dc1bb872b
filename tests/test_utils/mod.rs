//! Test utilities for database testing.
//!
//! Sets up in-memory SQLite databases with the schema applied and offers
//! small helpers shared by the integration tests.

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use workforce::config::GeneratorConfig;
use workforce::seeds::EmployeeDataGenerator;

/// Sets up an in-memory SQLite database with all migrations applied.
///
/// The pool holds a single connection so every query (including those
/// issued inside a transaction) sees the same in-memory database.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await?;

    Migrator::up(&db, None).await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys = ON".to_string(),
    ))
    .await?;

    Ok(db)
}

/// Sets up a test database and returns it wrapped in an Arc.
#[allow(dead_code)]
pub async fn setup_test_db_arc() -> Result<Arc<DatabaseConnection>> {
    Ok(Arc::new(setup_test_db().await?))
}

/// Generator over `db` with the default configuration.
#[allow(dead_code)]
pub fn generator(db: Arc<DatabaseConnection>) -> EmployeeDataGenerator {
    generator_with(db, GeneratorConfig::default())
}

#[allow(dead_code)]
pub fn generator_with(db: Arc<DatabaseConnection>, config: GeneratorConfig) -> EmployeeDataGenerator {
    EmployeeDataGenerator::new(db, Arc::new(config))
}

/// Fixed calendar anchor so assertions do not depend on the wall clock.
#[allow(dead_code)]
pub fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 18).expect("valid anchor date")
}

/// Executes raw SQL against the test database.
#[allow(dead_code)]
pub async fn execute_sql(db: &DatabaseConnection, sql: &str) -> Result<()> {
    db.execute(Statement::from_string(db.get_database_backend(), sql.to_string()))
        .await?;
    Ok(())
}
