//! CLI integration tests for u-flowshop
//!
//! These tests run the binary against task files in a temporary
//! directory and check the written result file.

use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a command instance for the u-flowshop binary
fn flowshop_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("u-flowshop"));
    cmd.env_remove("FLOWSHOP_INPUT").env_remove("FLOWSHOP_OUTPUT");
    cmd
}

/// Create a temporary directory with an input file
fn setup_input(content: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input").join("tasks.txt");
    fs::create_dir_all(input.parent().unwrap()).unwrap();
    fs::write(&input, content).unwrap();
    let output = dir.path().join("output").join("result.txt");
    (dir, input, output)
}

// =============================================================================
// Scheduling Tests
// =============================================================================

#[test]
fn test_schedule_writes_result() {
    let (_dir, input, output) = setup_input("1/5/2\n2/1/6\n3/9/3\n");

    flowshop_cmd()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Mobiles should be produced in the order: [2, 1, 3]",
        ));

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        "Mobiles should be produced in the order: [2, 1, 3]\n\
         Total production time for all mobiles is: 18\n\
         Idle Time of Assembly unit: 7\n"
    );
}

#[test]
fn test_schedule_overwrites_previous_output() {
    let (_dir, input, output) = setup_input("1/4/7\n");
    fs::create_dir_all(output.parent().unwrap()).unwrap();
    fs::write(&output, "old result\nold result\nold result\nold result\n").unwrap();

    flowshop_cmd()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(!content.contains("old result"));
    assert!(content.contains("Total production time for all mobiles is: 11"));
    assert!(content.contains("Idle Time of Assembly unit: 4"));
}

#[test]
fn test_schedule_from_env_paths() {
    let (_dir, input, output) = setup_input("1/5/2\n2/5/9\n");

    flowshop_cmd()
        .env("FLOWSHOP_INPUT", &input)
        .env("FLOWSHOP_OUTPUT", &output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("[2, 1]"));
}

#[test]
fn test_schedule_custom_delimiter() {
    let (_dir, input, output) = setup_input("1,5,2\n2,1,6\n");

    flowshop_cmd()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--delimiter")
        .arg(",")
        .assert()
        .success()
        .stdout(predicate::str::contains("[2, 1]"));
}

#[test]
fn test_schedule_johnson_rule() {
    let (_dir, input, output) = setup_input("1/2/1\n2/3/9\n");

    flowshop_cmd()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--rule")
        .arg("johnson")
        .assert()
        .success()
        .stdout(predicate::str::contains("[2, 1]"))
        .stdout(predicate::str::contains("Total production time for all mobiles is: 13"));
}

#[test]
fn test_schedule_json_output() {
    let (_dir, input, output) = setup_input("1/5/2\n2/1/6\n3/9/3\n");

    let assert = flowshop_cmd()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["rule"], "MFT");
    assert_eq!(report["result"]["job_sequence"], serde_json::json!([2, 1, 3]));
    assert_eq!(report["result"]["total_production_time"], 18);
    assert_eq!(report["kpi"]["assembly_idle"], 7);
    assert_eq!(report["timeline"]["entries"].as_array().unwrap().len(), 3);
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("result.txt");

    flowshop_cmd()
        .arg("-i")
        .arg(dir.path().join("missing.txt"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task source not found"));

    assert!(!output.exists());
}

#[test]
fn test_malformed_input_fails() {
    let (_dir, input, output) = setup_input("1/5/2\n2/one/6\n");

    flowshop_cmd()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line 2: invalid integer 'one'"));

    assert!(!output.exists());
}

#[test]
fn test_wrong_field_count_fails() {
    let (_dir, input, output) = setup_input("1/5\n");

    flowshop_cmd()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 3 fields, found 2"));
}

#[test]
fn test_empty_input_fails() {
    let (_dir, input, output) = setup_input("\n\n");

    flowshop_cmd()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No tasks to schedule"));

    assert!(!output.exists());
}

#[test]
fn test_invalid_tasks_fail() {
    let (_dir, input, output) = setup_input("1/5/2\n1/0/6\n");

    flowshop_cmd()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate task ID: 1"))
        .stderr(predicate::str::contains("non-positive manufacture time"));
}

#[test]
fn test_duration_overflow_fails() {
    let (_dir, input, output) =
        setup_input("1/9223372036854775000/5\n2/9223372036854775000/5\n");

    flowshop_cmd()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Task 2: production time exceeds the representable range",
        ));

    assert!(!output.exists());
}
