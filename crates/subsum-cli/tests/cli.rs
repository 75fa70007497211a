//! CLI integration tests for the `subsum` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn subsum() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("subsum").unwrap()
}

#[test]
fn solve_duplicate_values() {
    subsum()
        .args(["solve", "--target", "6", "3", "3", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("target: 6"))
        .stdout(predicate::str::contains("found 2 valid subsets"))
        .stdout(predicate::str::contains("{3, 3}"))
        .stdout(predicate::str::contains("{3, 2, 1}"));
}

#[test]
fn solve_negative_correction() {
    subsum()
        .args(["solve", "--target", "0", "5", "-2", "-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found 1 valid subsets"))
        .stdout(predicate::str::contains("{5, -2, -3}"));
}

#[test]
fn solve_log_target() {
    subsum()
        .args([
            "solve",
            "--target",
            "log(10,1000000)",
            "log(10,1000)",
            "log(10,100)",
            "log(10,10)",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("found 1 valid subsets"))
        .stdout(predicate::str::contains(
            "{log(10,1000), log(10,100), log(10,10)}",
        ));
}

#[test]
fn solve_no_match() {
    subsum()
        .args(["solve", "--target", "100", "1", "2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found 0 valid subsets"));
}

#[test]
fn solve_json_output() {
    let output = subsum()
        .args(["solve", "--json", "--target", "6", "3", "3", "2", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let report = &reports[0];
    assert_eq!(report["target"], "6");
    assert_eq!(report["matches"], 2);
    assert!(report["elapsed_secs"].as_f64().unwrap() >= 0.0);
    assert_eq!(report["subsets"].as_array().unwrap().len(), 2);
}

#[test]
fn solve_rejects_bad_token() {
    subsum()
        .args(["solve", "--target", "6", "3", "sqrt(9)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad token 'sqrt(9)'"));
}

#[test]
fn solve_rejects_log_domain_error() {
    subsum()
        .args(["solve", "--target", "log(10,-5)", "log(10,100)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("logarithm domain error"));
}

#[test]
fn run_problem_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("problem.json");
    std::fs::write(
        &path,
        r#"{
            "tokens": ["3", "3", "2", "1", "log(10,1000)", "log(10,100)", "log(10,10)"],
            "targets": ["6", "log(10,1000000)"]
        }"#,
    )
    .unwrap();

    subsum()
        .arg("run")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("target: 6"))
        .stdout(predicate::str::contains("target: log(10,1000000)"))
        .stdout(predicate::str::contains("found 2 valid subsets"))
        .stdout(predicate::str::contains("found 1 valid subsets"));
}

#[test]
fn run_rejects_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    subsum()
        .arg("run")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid problem file"));
}

#[test]
fn run_missing_file() {
    subsum()
        .args(["run", "/nonexistent/problem.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn demo_reports_all_three_targets() {
    subsum()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("target: 6"))
        .stdout(predicate::str::contains("target: log(10,1000000)"))
        .stdout(predicate::str::contains("target: log(2,64)"));
}
