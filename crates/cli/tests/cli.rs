use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn demand() -> Command {
    Command::cargo_bin("demand").expect("binary builds")
}

/// Writes a settings file under the system temp dir, unique per test.
fn settings_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("demand-cli-{}-{name}.toml", std::process::id()));
    fs::write(&path, contents).expect("temp dir is writable");
    path
}

#[test]
fn marshallian_splits_symmetric_income() {
    demand()
        .args([
            "marshallian",
            "--income",
            "9",
            "--preferences",
            "1",
            "1",
            "--prices",
            "1",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("bundle:\t(4.50, 4.50)\n"))
        .stdout(predicate::str::is_match(r"time:\t\d+\.\d{3} ms\n$").expect("valid regex"));
}

#[test]
fn marshallian_uses_default_market() {
    demand()
        .args(["marshallian", "--income", "100"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("bundle:\t(10.00, 35.00)\n"));
}

#[test]
fn hicksian_reaches_target_utility() {
    demand()
        .args([
            "hicksian",
            "--utility",
            "4",
            "--preferences",
            "1",
            "1",
            "--prices",
            "1",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("bundle:\t(2.00, 2.00)\n"));
}

#[test]
fn matched_recovers_income() {
    demand()
        .args(["matched", "--income", "100"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("bundle:\t(10.00, 35.00)\n"))
        .stdout(predicate::str::contains("expenditure:\t100.00\n"));
}

#[test]
fn invalid_price_fails_with_reason() {
    demand()
        .args(["marshallian", "--income", "100", "--prices", "0", "2"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid price p0: 0"));
}

#[test]
fn settings_file_tunes_the_solver() {
    let path = settings_file("cap", "[convergence]\nmax_iters = 1\n");
    demand()
        .args(["marshallian", "--income", "100", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no convergence after 1 iterations"));
    fs::remove_file(path).ok();
}

#[test]
fn invalid_settings_are_rejected() {
    let path = settings_file("divisions", "[search]\ndivisions = 1\n");
    demand()
        .arg("--config")
        .arg(&path)
        .args(["hicksian", "--utility", "20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid search settings"))
        .stderr(predicate::str::contains("divisions must be at least 2").count(1));
    fs::remove_file(path).ok();
}

#[test]
fn missing_settings_file_is_reported() {
    demand()
        .args(["matched", "--income", "100", "--config", "/nonexistent/demand.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read /nonexistent/demand.toml"));
}
