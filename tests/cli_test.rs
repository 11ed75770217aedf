//! Integration tests for the dephealth binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn npm_project(deps: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("package.json"),
        format!("{{\"dependencies\": {}}}", deps),
    )
    .unwrap();
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("dephealth"));
    cmd.arg("--help");
    cmd.assert().success().stdout(predicate::str::contains(
        "Workspace dependency health scanner",
    ));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("dephealth"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_scans_clean_workspace() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("dephealth"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Health Score: 100/100"));
    Ok(())
}

#[test]
fn cli_scan_reports_missing_package() -> Result<(), Box<dyn std::error::Error>> {
    let temp = npm_project(r#"{"express": "^4.18.2"}"#);
    let mut cmd = Command::new(cargo_bin("dephealth"));
    cmd.current_dir(temp.path());
    cmd.arg("scan");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("express"))
        .stdout(predicate::str::contains("Health Score: 95/100"));
    Ok(())
}

#[test]
fn cli_scan_critical_exits_nonzero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = npm_project(r#"{"express": "^4.18.2"}"#);
    fs::write(temp.path().join("index.js"), "require('express');\n")?;

    let mut cmd = Command::new(cargo_bin("dephealth"));
    cmd.current_dir(temp.path());
    cmd.arg("scan");
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Critical (Blocks Execution)"));
    Ok(())
}

#[test]
fn cli_scan_json_emits_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = npm_project(r#"{"express": "^4.18.2"}"#);
    let mut cmd = Command::new(cargo_bin("dephealth"));
    cmd.current_dir(temp.path());
    cmd.args(["scan", "--json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"health_score\": 95"))
        .stdout(predicate::str::contains("\"severity\": \"warning\""));
    Ok(())
}

#[test]
fn cli_status_one_line() -> Result<(), Box<dyn std::error::Error>> {
    let temp = npm_project(r#"{"express": "^4.18.2"}"#);
    let mut cmd = Command::new(cargo_bin("dephealth"));
    cmd.current_dir(temp.path());
    cmd.arg("status");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Health: 95/100 | 1 warnings"));
    Ok(())
}

#[test]
fn cli_status_clean() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("dephealth"));
    cmd.current_dir(temp.path());
    cmd.arg("status");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("All dependencies OK"));
    Ok(())
}

#[test]
fn cli_project_flag_overrides_cwd() -> Result<(), Box<dyn std::error::Error>> {
    let temp = npm_project(r#"{"express": "^4.18.2"}"#);
    let mut cmd = Command::new(cargo_bin("dephealth"));
    cmd.args(["--project", temp.path().to_str().unwrap(), "status"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 warnings"));
    Ok(())
}

#[test]
fn cli_commands_prints_install_lines() -> Result<(), Box<dyn std::error::Error>> {
    let temp = npm_project(r#"{"express": "1", "lodash": "4"}"#);
    let mut cmd = Command::new(cargo_bin("dephealth"));
    cmd.current_dir(temp.path());
    cmd.arg("commands");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("npm install"))
        .stdout(predicate::str::contains("express"));
    Ok(())
}

#[test]
fn cli_skip_flag_excludes_ecosystem() -> Result<(), Box<dyn std::error::Error>> {
    let temp = npm_project(r#"{"express": "1"}"#);
    let mut cmd = Command::new(cargo_bin("dephealth"));
    cmd.current_dir(temp.path());
    cmd.args(["status", "--skip", "npm"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("All dependencies OK"));
    Ok(())
}

#[test]
fn cli_unknown_skip_name_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("dephealth"));
    cmd.current_dir(temp.path());
    cmd.args(["status", "--skip", "composer"]);
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unknown ecosystem"));
    Ok(())
}

#[test]
fn cli_ecosystems_lists_profiles() -> Result<(), Box<dyn std::error::Error>> {
    let temp = npm_project("{}");
    let mut cmd = Command::new(cargo_bin("dephealth"));
    cmd.current_dir(temp.path());
    cmd.arg("ecosystems");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("npm"))
        .stdout(predicate::str::contains("[present]"))
        .stdout(predicate::str::contains("cargo"));
    Ok(())
}

#[test]
fn cli_invalid_ttl_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("dephealth"));
    cmd.current_dir(temp.path());
    cmd.args(["status", "--ttl", "soon"]);
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid duration"));
    Ok(())
}

#[test]
fn cli_malformed_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".dephealth.yml"), "skip: [unclosed\n")?;

    let mut cmd = Command::new(cargo_bin("dephealth"));
    cmd.current_dir(temp.path());
    cmd.arg("status");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_completions_generates_script() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("dephealth"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("dephealth"));
    Ok(())
}
