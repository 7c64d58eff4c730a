// domainr/tests/cli_integration.rs

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A `domainr` command isolated from the user's real config and env.
fn domainr(home: &TempDir) -> Command {
    let work_dir = home.path().join("work");
    fs::create_dir_all(&work_dir).unwrap();

    let mut cmd = Command::cargo_bin("domainr").unwrap();
    cmd.current_dir(work_dir)
        .env("HOME", home.path())
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("DOMAINR_MASHAPE_KEY")
        .env_remove("DOMAINR_CLIENT_ID")
        .env_remove("DOMAINR_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_shows_flags() {
    let home = TempDir::new().unwrap();
    domainr(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--info"))
        .stdout(predicate::str::contains("--ascii"))
        .stdout(predicate::str::contains("--available"))
        .stdout(predicate::str::contains("--tld"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_query_required() {
    let home = TempDir::new().unwrap();
    domainr(&home)
        .arg("--ascii")
        .assert()
        .failure()
        .stderr(predicate::str::contains("QUERY"));
}

#[test]
fn test_no_credentials_names_default_location() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join(".config").join("domainr").join("config.toml");

    domainr(&home)
        .arg("example")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No API key provided in config file at:"))
        .stderr(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn test_empty_keys_in_explicit_config() {
    let home = TempDir::new().unwrap();
    let config_path = home.path().join("custom.toml");
    fs::write(&config_path, "[Default]\nmashape-key = \"\"\nclient_id = \"\"\n").unwrap();

    domainr(&home)
        .args(["example", "--config"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No API key provided"))
        .stderr(predicate::str::contains(config_path.display().to_string()));
}

#[test]
fn test_empty_keys_in_discovered_config() {
    let home = TempDir::new().unwrap();
    let config_path = home.path().join(".domainr.toml");
    fs::write(&config_path, "[Default]\nclient_id = \"\"\n").unwrap();

    domainr(&home)
        .arg("example")
        .assert()
        .failure()
        .stderr(predicate::str::contains(config_path.display().to_string()));
}

#[test]
fn test_missing_explicit_config_file() {
    let home = TempDir::new().unwrap();

    domainr(&home)
        .args(["example", "--config", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_config_from_env_var() {
    let home = TempDir::new().unwrap();
    let config_path = home.path().join("env.toml");
    fs::write(&config_path, "[Default]\n").unwrap();

    domainr(&home)
        .env("DOMAINR_CONFIG", &config_path)
        .arg("example")
        .assert()
        .failure()
        .stderr(predicate::str::contains(config_path.display().to_string()));
}

#[test]
fn test_invalid_explicit_config() {
    let home = TempDir::new().unwrap();
    let config_path = home.path().join("bad.toml");
    fs::write(&config_path, "[Default\n").unwrap();

    domainr(&home)
        .args(["example", "--config"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML configuration"));
}
