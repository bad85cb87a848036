//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn tap_translate() -> Command {
    Command::cargo_bin("tap-translate").unwrap()
}

#[test]
fn help_output() {
    tap_translate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("translation"))
        .stdout(predicate::str::contains("--tap-count"))
        .stdout(predicate::str::contains("--cooldown-ms"))
        .stdout(predicate::str::contains("supervise"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_output() {
    tap_translate()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tap-translate"));
}

#[test]
fn config_help() {
    tap_translate()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn config_path_command() {
    tap_translate()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tap-translate"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_get_unknown_key_fails() {
    tap_translate()
        .args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_unknown_key_fails() {
    tap_translate()
        .args(["config", "set", "unknown_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_invalid_binding_language_fails() {
    tap_translate()
        .args(["config", "set", "bindings.f2", "klingon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown language"));
}

#[test]
fn missing_api_key_fails_fast() {
    let dir = tempfile::tempdir().unwrap();

    tap_translate()
        .arg("run")
        .current_dir(dir.path())
        .env_remove("GEMINI_API_KEY")
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env("XDG_DATA_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing API key"));
}

#[test]
fn config_round_trip_in_isolated_home() {
    let dir = tempfile::tempdir().unwrap();
    let envs = |cmd: &mut Command| {
        cmd.env("HOME", dir.path())
            .env("XDG_CONFIG_HOME", dir.path())
            .current_dir(dir.path());
    };

    let mut set = tap_translate();
    envs(&mut set);
    set.args(["config", "set", "cooldown_ms", "1500"])
        .assert()
        .success();

    let mut get = tap_translate();
    envs(&mut get);
    get.args(["config", "get", "cooldown_ms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1500"));
}
