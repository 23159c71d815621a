//! Command-line behavior of the `flowtime` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn flowtime(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("flowtime").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("RUST_LOG")
        .env_remove("FLOWTIME_CONFIG");
    cmd
}

#[test]
fn test_recommend_json() {
    let home = TempDir::new().unwrap();
    flowtime(&home)
        .args(["recommend", "2m10s", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"break_seconds\": 26"));
}

#[test]
fn test_recommend_pretty_reads_bare_minutes() {
    let home = TempDir::new().unwrap();
    flowtime(&home)
        .args(["recommend", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 minutes"));
}

#[test]
fn test_recommend_rejects_garbage() {
    let home = TempDir::new().unwrap();
    flowtime(&home)
        .args(["recommend", "soon"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid duration 'soon'"));
}

#[cfg(not(feature = "audio"))]
#[test]
fn test_noise_without_audio_fails() {
    let home = TempDir::new().unwrap();
    flowtime(&home)
        .args(["noise", "pink", "--duration", "1s"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Audio unavailable"))
        .stderr(predicate::str::contains("--features audio"));
}

#[test]
fn test_noise_help_mentions_audio_feature() {
    let home = TempDir::new().unwrap();
    flowtime(&home)
        .args(["noise", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--features audio"));
}

#[test]
fn test_huge_durations_are_rejected() {
    let home = TempDir::new().unwrap();
    for duration in ["9999999999999999h", "99999999999999999"] {
        flowtime(&home)
            .args(["recommend", duration])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("invalid duration"));
    }
}

#[test]
fn test_out_of_range_sample_rate_is_reported() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("rate.yaml");
    std::fs::write(&path, "noise:\n  sample_rate: 3000000000\n").unwrap();

    flowtime(&home)
        .args(["--config", path.to_str().unwrap(), "noise", "white", "--duration", "1s"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("noise.sample_rate"));
}

#[test]
fn test_noise_rejects_bad_volume() {
    let home = TempDir::new().unwrap();
    flowtime(&home)
        .args(["noise", "white", "--volume", "2", "--duration", "1s"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_config_init_then_show() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom").join("config.yaml");
    let path_arg = path.to_str().unwrap();

    flowtime(&home)
        .args(["--config", path_arg, "config", "init"])
        .assert()
        .success();
    assert!(path.exists());

    flowtime(&home)
        .args(["--config", path_arg, "config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    flowtime(&home)
        .args(["--config", path_arg, "-o", "json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sample_rate\": 44100"));
}

#[test]
fn test_config_path_defaults_under_home() {
    let home = TempDir::new().unwrap();
    flowtime(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".flowtime"))
        .stdout(predicate::str::contains("config.yaml"));
}

#[test]
fn test_invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.yaml");
    std::fs::write(&path, "noise:\n  volume: 3.0\n").unwrap();

    flowtime(&home)
        .args(["--config", path.to_str().unwrap(), "recommend", "5m"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("noise.volume"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    flowtime(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("flowtime"));
}
