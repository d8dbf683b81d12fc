//! Binary-level checks: exit codes and what lands on stdout vs stderr.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;

const PROJECTS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/projects.json");
const RESOURCES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/resources.csv");

fn allocator() -> Result<Command> {
    let mut cmd = Command::cargo_bin("resource-allocator")?;
    cmd.env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn test_wrong_argument_count_exits_with_one() -> Result<()> {
    allocator()?.assert().code(1);
    allocator()?.arg(PROJECTS).assert().code(1);
    allocator()?
        .args([PROJECTS, RESOURCES, "extra.txt"])
        .assert()
        .code(1);
    Ok(())
}

#[test]
fn test_help_exits_with_zero() -> Result<()> {
    allocator()?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("<PROJECTS_FILE>"));
    Ok(())
}

#[test]
fn test_interactive_selection_prints_matches() -> Result<()> {
    allocator()?
        .args([PROJECTS, RESOURCES])
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Projects:"))
        .stdout(predicate::str::contains(
            "Allocating resources for: Alpha (Domain: Cloud)",
        ))
        .stdout(predicate::str::contains("  Email: jane@example.com"))
        .stdout(predicate::str::contains("  Location: Seoul"))
        .stdout(predicate::str::contains("Bob").not())
        .stderr(predicate::str::contains("Incorrect number of columns"));
    Ok(())
}

#[test]
fn test_zero_and_out_of_range_exit_cleanly() -> Result<()> {
    allocator()?
        .args([PROJECTS, RESOURCES])
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Matching Resource Found").not())
        .stdout(predicate::str::contains("Invalid choice.").not());

    allocator()?
        .args([PROJECTS, RESOURCES])
        .write_stdin("42\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice."))
        .stdout(predicate::str::contains("Matching Resource Found").not());
    Ok(())
}

#[test]
fn test_missing_files_exit_zero() -> Result<()> {
    allocator()?
        .args(["/nonexistent/projects.json", "/nonexistent/resources.csv"])
        .assert()
        .success()
        .stdout("No projects found.\n")
        .stderr(predicate::str::contains("/nonexistent/projects.json"));
    Ok(())
}

#[test]
fn test_json_format_with_choice() -> Result<()> {
    let output = allocator()?
        .args([PROJECTS, RESOURCES, "--choice", "1", "--format", "json"])
        .output()?;

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["project"]["domain"], "Cloud");
    assert_eq!(report["matches"].as_array().map(Vec::len), Some(2));
    Ok(())
}
