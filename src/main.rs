//! # Workforce Command Line Entry Point
//!
//! Administrative commands for generating and inspecting the synthetic
//! organization dataset. Reports are printed to stdout as JSON; logs go to
//! stderr.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use workforce::{
    config::{AppConfig, ConfigLoader},
    db,
    error::GenerationError,
    repositories::dataset,
    seeds::{EmployeeDataGenerator, GenerationRequest},
    telemetry,
};

#[derive(Debug, Parser)]
#[command(name = "workforce", version, about = "Synthetic organization data generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate departments, employees and their history
    Generate {
        /// Number of departments to create
        #[arg(long, default_value_t = 5)]
        departments: u32,
        /// Number of employees to create
        #[arg(long, default_value_t = 5)]
        employees: u32,
        /// Calendar days of attendance, ending today
        #[arg(long, default_value_t = 30)]
        days: u32,
        /// Delete the existing dataset first
        #[arg(long)]
        clear: bool,
        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print row counts per table
    Stats,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<GenerationError>() {
                Some(generation_err) => {
                    let report = generation_err.to_report();
                    match serde_json::to_string_pretty(&report) {
                        Ok(json) => println!("{json}"),
                        Err(_) => eprintln!("{}: {}", report.code, report.message),
                    }
                }
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ConfigLoader::new()
        .load()
        .context("loading configuration")?;
    telemetry::init_tracing(&config).context("initializing telemetry")?;

    log::info!("Loaded configuration for profile: {}", config.profile);
    if let Ok(redacted_json) = config.redacted_json() {
        log::debug!("Configuration: {}", redacted_json);
    }

    let db = connect(&config).await?;

    match cli.command {
        Command::Generate {
            departments,
            employees,
            days,
            clear,
            seed,
        } => {
            let mut request = GenerationRequest::new(departments, employees, days, clear);
            if let Some(seed) = seed {
                request = request.with_seed(seed);
            }

            let generator = EmployeeDataGenerator::new(Arc::new(db), Arc::new(config.generator));
            let report = generator.generate(request).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Stats => {
            let counts = dataset::counts(&db)
                .await
                .context("counting dataset rows")?;
            println!("{}", serde_json::to_string_pretty(&counts)?);
        }
    }

    Ok(())
}

async fn connect(config: &AppConfig) -> Result<sea_orm::DatabaseConnection> {
    let db = db::init_pool(config)
        .await
        .context("connecting to database")?;
    db::health_check(&db).await?;
    db::run_migrations(&db).await?;
    Ok(db)
}
