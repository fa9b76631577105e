//! `riddlerun check` against real config files

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn check(dir: &TempDir, contents: &str, extra: &[&str]) -> assert_cmd::assert::Assert {
    let config = dir.path().join("config.toml");
    std::fs::write(&config, contents).expect("write config");

    Command::cargo_bin("riddlerun")
        .expect("binary built")
        .arg("check")
        .arg("--config")
        .arg(&config)
        .arg("--data-dir")
        .arg(dir.path())
        .args(extra)
        .assert()
}

#[test]
fn test_check_prints_summary() {
    let dir = TempDir::new().unwrap();
    let contents = r#"
[game]
penalty_seconds = 90

[[riddles]]
code = "0042"

[[riddles]]
code = "7"
hint = "Lucky"
"#;
    check(&dir, contents, &[]).success().stdout(predicate::str::contains(
        "2 riddles (code lengths 4/1), penalty 90s, display hms, hints on",
    ));

    // Logs land under the data dir, not the home directory
    assert!(dir.path().join("logs").join("riddlerun.log").exists());
}

#[test]
fn test_check_applies_flag_overrides() {
    let dir = TempDir::new().unwrap();
    check(
        &dir,
        "[[riddles]]\ncode = \"1\"\n",
        &["--no-hints", "--penalty-format", "ms"],
    )
    .success()
    .stdout(predicate::str::contains("display ms, hints off"));
}

#[test]
fn test_check_rejects_out_of_range_tick() {
    let dir = TempDir::new().unwrap();
    check(&dir, "[[riddles]]\ncode = \"1\"\n", &["--tick-ms", "5000"])
        .failure()
        .stderr(predicate::str::contains("5000"));
}

#[test]
fn test_check_rejects_letters_in_code() {
    let dir = TempDir::new().unwrap();
    check(&dir, "[[riddles]]\ncode = \"12a\"\n", &[])
        .failure()
        .stderr(predicate::str::contains("12a"));
}

#[test]
fn test_check_rejects_unknown_game_key() {
    let dir = TempDir::new().unwrap();
    check(&dir, "[game]\npenalty = 5\n", &[]).failure();
}

#[test]
fn test_check_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("riddlerun")
        .unwrap()
        .arg("check")
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.toml"));
}
