//! Binary level tests for the non-interactive subcommands.

mod common;

use assert_cmd::Command;
use common::{mixed_users, write_dataset};
use std::path::Path;
use tempfile::TempDir;

fn userdash(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("userdash").unwrap();
    cmd.current_dir(cwd)
        .env_remove("USERDASH_CONFIG")
        .env_remove("USERDASH_LOG")
        .env("XDG_CONFIG_HOME", cwd)
        .env("NO_COLOR", "1");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(userdash(dir.path()).arg("--version"));
    assert!(out.contains("userdash"));
}

#[test]
fn test_list_json_shows_initial_reveal() {
    let data = write_dataset(&mixed_users(15, 3, 2));
    let out = stdout_of(
        userdash(data.root())
            .args(["list", "--format", "json", "--data"])
            .arg(&data.path),
    );
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["total"], 20);
    assert_eq!(json["revealed"], 5);
    assert_eq!(json["total_pages"], 2);
    assert_eq!(json["users"].as_array().unwrap().len(), 5);
}

#[test]
fn test_list_blocked_over_all_records() {
    let data = write_dataset(&mixed_users(15, 2, 3));
    let out = stdout_of(
        userdash(data.root())
            .args(["list", "--all", "--status", "blocked", "--format", "json", "--data"])
            .arg(&data.path),
    );
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["matched"], 3);
    for user in json["users"].as_array().unwrap() {
        assert_eq!(user["about"]["status"], "BLOCKED");
    }
}

#[test]
fn test_list_plain_table() {
    let data = write_dataset(&mixed_users(3, 0, 0));
    let out = stdout_of(
        userdash(data.root())
            .args(["list", "--plain", "--sort", "name", "--desc", "--data"])
            .arg(&data.path),
    );
    assert!(out.contains("NAME"));
    assert!(out.contains("Member 003"));
    assert!(out.find("Member 003").unwrap() < out.find("Member 001").unwrap());
    assert!(out.contains("Page 1 of 1"));
}

#[test]
fn test_list_rejects_unknown_status() {
    let data = write_dataset(&mixed_users(3, 0, 0));
    userdash(data.root())
        .args(["list", "--status", "SUSPENDED", "--data"])
        .arg(&data.path)
        .assert()
        .failure();
}

#[test]
fn test_list_page_out_of_range_fails() {
    let data = write_dataset(&mixed_users(3, 0, 0));
    let output = userdash(data.root())
        .args(["list", "--page", "4", "--data"])
        .arg(&data.path)
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    assert!(String::from_utf8(output).unwrap().contains("out of range"));
}

#[test]
fn test_summary_json() {
    let data = write_dataset(&mixed_users(6, 2, 2));
    let out = stdout_of(
        userdash(data.root())
            .args(["summary", "--format", "json", "--data"])
            .arg(&data.path),
    );
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["total_users"], 10);
    assert_eq!(json["active_users"], 6);
    assert_eq!(json["inactive_percent"], 20.0);
    assert_eq!(json["blocked_percent"], 20.0);
}

#[test]
fn test_missing_dataset_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let output = userdash(dir.path())
        .arg("summary")
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    assert!(String::from_utf8(output).unwrap().contains("--data"));
}

#[test]
fn test_dataset_from_discovered_config() {
    let data = write_dataset(&mixed_users(4, 0, 0));
    std::fs::write(
        data.root().join(".userdash.toml"),
        "[data]\npath = \"users.json\"\n",
    )
    .unwrap();
    let out = stdout_of(userdash(data.root()).args(["summary", "--format", "json"]));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["total_users"], 4);
}

#[test]
fn test_init_then_refuse_overwrite() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(userdash(dir.path()).arg("init"));
    assert!(out.starts_with("Created "));
    assert!(dir.path().join(".userdash.toml").exists());

    userdash(dir.path()).arg("init").assert().failure();
    stdout_of(userdash(dir.path()).args(["init", "--force"]));
}
