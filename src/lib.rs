//! # Workforce Dataset Library
//!
//! Generates referentially consistent synthetic organization data
//! (departments, employees, attendance, performance reviews and salary
//! history) and persists it through SeaORM.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seeds;
pub mod telemetry;
pub use migration;
