use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// which로 도구 존재 여부 확인 (없으면 해당 테스트는 건너뜀)
fn tool_missing(tool: &str) -> bool {
    std::process::Command::new("which")
        .arg(tool)
        .output()
        .map(|o| !o.status.success())
        .unwrap_or(true)
}

/// 사용자 설정과 기록이 끼어들지 않도록 홈 디렉토리를 격리
fn temp_home(name: &str) -> PathBuf {
    let home = std::env::temp_dir().join(format!("mydba_it_{}_{}", name, std::process::id()));
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).unwrap();
    home
}

fn mydba(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mydba").unwrap();
    cmd.env("HOME", home).env_remove("MYDBA_PASSWORD");
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("mydba").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("MySQL database administration tool"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("mydba").unwrap();
    cmd.arg("--version").assert().success();
}

#[test]
fn test_missing_subcommand() {
    let mut cmd = Command::cargo_bin("mydba").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_create_without_database_fails_before_any_spawn() {
    // 데이터베이스 검사는 도구 탐색보다 먼저라서 mysql이 없어도 동작해야 함
    let home = temp_home("nodb");
    mydba(&home)
        .arg("create")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing value for `database` in options",
        ));
}

#[test]
fn test_export_dry_run_prints_command_only() {
    // mysqldump가 설치되어 있어야 하므로 skip 조건 추가
    if tool_missing("mysqldump") {
        println!("Skipping test: mysqldump not installed");
        return;
    }

    let home = temp_home("dryrun");
    mydba(&home)
        .args(["export", "/tmp/dump.sql", "-D", "appdb", "-u", "alice", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mysqldump"))
        .stdout(predicate::str::contains("--user=alice"))
        .stdout(predicate::str::contains("appdb > /tmp/dump.sql"));
}

#[test]
fn test_dry_run_redacts_password_by_default() {
    if tool_missing("mysql") {
        println!("Skipping test: mysql not installed");
        return;
    }

    let home = temp_home("redact");
    mydba(&home)
        .args(["exec", "SELECT 1", "-D", "appdb", "--password", "sekrit", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MYSQL_PWD=****"))
        .stdout(predicate::str::contains("sekrit").not());
}

#[test]
fn test_debug_dry_run_reveals_password() {
    if tool_missing("mysql") {
        println!("Skipping test: mysql not installed");
        return;
    }

    let home = temp_home("reveal");
    mydba(&home)
        .args([
            "exec", "SELECT 1", "-D", "appdb", "--password", "sekrit", "--debug", "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG:"))
        .stdout(predicate::str::contains("MYSQL_PWD=sekrit"));
}

#[test]
fn test_password_from_environment() {
    if tool_missing("mysql") {
        println!("Skipping test: mysql not installed");
        return;
    }

    let home = temp_home("envpw");
    let mut cmd = Command::cargo_bin("mydba").unwrap();
    cmd.env("HOME", &home)
        .env("MYDBA_PASSWORD", "from-env")
        .args(["exec", "SELECT 1", "-D", "appdb", "--debug", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MYSQL_PWD=from-env"));
}

#[test]
fn test_drop_refuses_without_confirmation() {
    if tool_missing("mysqladmin") {
        println!("Skipping test: mysqladmin not installed");
        return;
    }

    // 터미널이 아니면 확인 프롬프트가 실패하고 작업은 실행되지 않아야 함
    let home = temp_home("dropref");
    mydba(&home)
        .args(["drop", "-D", "appdb"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("User cancelled"));
}

#[test]
fn test_init_creates_config_file() {
    let home = temp_home("init");
    mydba(&home)
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("Created config file"));

    assert!(home.join(".mydba").join("config.toml").exists());
}

#[test]
fn test_history_starts_empty() {
    let home = temp_home("hist");
    mydba(&home)
        .arg("history")
        .assert()
        .success()
        .stderr(predicate::str::contains("No history yet."));
}
