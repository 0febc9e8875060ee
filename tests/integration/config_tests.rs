//! Integration tests for configuration loading through the binary.

use predicates::prelude::*;
use tempfile::TempDir;

use cliutil::config::{load_config, Config, PROJECT_CONFIG_FILE};

use crate::integration::fixtures::{cliutil_with_home, write_config};

// ==================== Config Defaults ====================

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.number.places, 2);
    assert_eq!(config.input.temp_prefix, "stdin");
    assert!(!config.prompt.assume_yes);
}

#[test]
fn test_config_new() {
    assert_eq!(Config::new(), Config::default());
}

// ==================== Config Loading ====================

#[test]
fn test_load_project_config() {
    let project = TempDir::new().unwrap();
    write_config(project.path(), PROJECT_CONFIG_FILE, "[number]\nplaces = 5\n");

    let config = load_config(None, project.path()).unwrap();
    assert_eq!(config.number.places, 5);
}

#[test]
fn test_project_config_sets_round_places() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    write_config(project.path(), PROJECT_CONFIG_FILE, "[number]\nplaces = 1\n");

    cliutil_with_home(home.path())
        .current_dir(project.path())
        .args(["round", "2.345"])
        .assert()
        .success()
        .stdout("2.3\n");
}

#[test]
fn test_cli_places_override_config() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    write_config(project.path(), PROJECT_CONFIG_FILE, "[number]\nplaces = 1\n");

    cliutil_with_home(home.path())
        .current_dir(project.path())
        .args(["round", "2.345", "--places", "2"])
        .assert()
        .success()
        .stdout("2.35\n");
}

#[test]
fn test_cli_config_restores_default_places() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    write_config(project.path(), PROJECT_CONFIG_FILE, "[number]\nplaces = 0\n");
    let config = write_config(home.path(), "cli.toml", "[number]\nplaces = 2\n");

    cliutil_with_home(home.path())
        .current_dir(project.path())
        .arg("--config")
        .arg(&config)
        .args(["round", "2.345"])
        .assert()
        .success()
        .stdout("2.35\n");
}

#[test]
fn test_no_config_ignores_project_file() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    write_config(project.path(), PROJECT_CONFIG_FILE, "[number]\nplaces = 0\n");

    cliutil_with_home(home.path())
        .current_dir(project.path())
        .args(["--no-config", "round", "2.345"])
        .assert()
        .success()
        .stdout("2.35\n");
}

#[test]
fn test_config_assume_yes() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let config = write_config(home.path(), "yes.toml", "[prompt]\nassume_yes = true\n");
    let out = write_config(project.path(), "out.txt", "old");

    cliutil_with_home(home.path())
        .current_dir(project.path())
        .arg("--config")
        .arg(&config)
        .args(["cat", "-", "-o"])
        .arg(&out)
        .write_stdin("new")
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "new");
}

#[test]
fn test_invalid_cli_config_fails() {
    let home = TempDir::new().unwrap();
    let config = write_config(home.path(), "bad.toml", "[number\nplaces = 1\n");

    cliutil_with_home(home.path())
        .current_dir(home.path())
        .arg("--config")
        .arg(&config)
        .args(["round", "1.5"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_missing_cli_config_fails() {
    let home = TempDir::new().unwrap();

    cliutil_with_home(home.path())
        .current_dir(home.path())
        .args(["--config", "nowhere.toml", "round", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
