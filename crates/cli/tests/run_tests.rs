//! Integration tests for `biome run` and `biome save`.

mod common;

use common::{biome_cmd, write_biome_file};
use predicates::prelude::*;
use tempfile::TempDir;

const DEV: &str = "\
Name: dev
environment:
  GREETING: hi
  PORT: 8080
";

#[cfg(unix)]
#[test]
fn test_run_exposes_variables_to_program() {
    let dir = TempDir::new().unwrap();
    write_biome_file(dir.path(), DEV);

    biome_cmd(dir.path())
        .args(["run", "-b", "dev", "--", "sh", "-c", "echo \"$GREETING:$PORT\""])
        .assert()
        .success()
        .stdout("hi:8080\n");
}

#[cfg(unix)]
#[test]
fn test_run_propagates_program_exit_code() {
    let dir = TempDir::new().unwrap();
    write_biome_file(dir.path(), DEV);

    biome_cmd(dir.path())
        .args(["run", "-b", "dev", "--", "sh", "-c", "exit 42"])
        .assert()
        .code(42);
}

#[cfg(unix)]
#[test]
fn test_setup_commands_run_before_program() {
    let dir = TempDir::new().unwrap();
    write_biome_file(
        dir.path(),
        "Name: dev\ncommands:\n  - echo setup\n",
    );

    biome_cmd(dir.path())
        .args(["run", "-b", "dev", "--", "echo", "program"])
        .assert()
        .success()
        .stdout("setup\nprogram\n");
}

#[test]
fn test_missing_program_is_general_error() {
    let dir = TempDir::new().unwrap();
    write_biome_file(dir.path(), DEV);

    biome_cmd(dir.path())
        .args(["run", "-b", "dev", "--", "definitely-not-a-real-program-biome"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to start"));
}

#[test]
fn test_save_writes_readable_dotenv() {
    let dir = TempDir::new().unwrap();
    write_biome_file(
        dir.path(),
        "Name: dev\nenvironment:\n  GREETING: hello world\n  PORT: 8080\n",
    );
    let output = dir.path().join("out.env");

    biome_cmd(dir.path())
        .args(["save", "-b", "dev", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote 2 variable(s)"));

    let values: Vec<(String, String)> = dotenvy::from_path_iter(&output)
        .unwrap()
        .map(|item| item.unwrap())
        .collect();
    assert_eq!(
        values,
        vec![
            ("GREETING".to_string(), "hello world".to_string()),
            ("PORT".to_string(), "8080".to_string()),
        ]
    );
}

#[test]
fn test_save_defaults_to_dotenv_in_working_directory() {
    let dir = TempDir::new().unwrap();
    write_biome_file(dir.path(), DEV);

    biome_cmd(dir.path())
        .args(["save", "-b", "dev"])
        .assert()
        .success();

    assert!(dir.path().join(".env").exists());
}

#[test]
fn test_declared_variable_wins_over_env_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("app.env"), "GREETING=from-file\nEXTRA=1\n").unwrap();
    write_biome_file(
        dir.path(),
        "Name: dev\nload_env: app.env\nenvironment:\n  GREETING: declared\n",
    );
    let output = dir.path().join("out.env");

    biome_cmd(dir.path())
        .args(["save", "-b", "dev", "-o"])
        .arg(&output)
        .assert()
        .success();

    let saved = std::fs::read_to_string(&output).unwrap();
    assert!(saved.contains("GREETING=declared"));
    assert!(saved.contains("EXTRA=1"));
}
