//! Smoke tests for the `workforce` binary against a temporary SQLite file.

use assert_cmd::Command;
use tempfile::TempDir;

fn workforce(dir: &TempDir) -> Command {
    let db_path = dir.path().join("workforce.db");
    let mut cmd = Command::cargo_bin("workforce").unwrap();
    cmd.current_dir(dir.path())
        .env("WORKFORCE_DATABASE_URL", format!("sqlite://{}?mode=rwc", db_path.display()))
        .env("WORKFORCE_LOG_LEVEL", "warn")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn generate_then_stats_reports_matching_counts() {
    let dir = TempDir::new().unwrap();

    let output = workforce(&dir)
        .args(["generate", "--departments", "2", "--employees", "6", "--days", "10"])
        .args(["--clear", "--seed", "17"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let report = stdout_json(&output);
    assert_eq!(report["created"]["departments"], 2);
    assert_eq!(report["created"]["employees"], 6);
    assert_eq!(report["seed"], 17);

    let output = workforce(&dir).arg("stats").output().unwrap();
    assert!(output.status.success());
    let stats = stdout_json(&output);
    assert_eq!(stats, report["created"]);
}

#[test]
fn zero_employees_exits_with_invalid_parameter() {
    let dir = TempDir::new().unwrap();

    let output = workforce(&dir)
        .args(["generate", "--employees", "0"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let error = stdout_json(&output);
    assert_eq!(error["code"], "INVALID_PARAMETER");
}
