//! CLI smoke tests driving the compiled binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn snapshot_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create snapshot file");
    file.write_all(json.as_bytes()).expect("write snapshot");
    file
}

fn two_sided_snapshot() -> NamedTempFile {
    snapshot_file(
        r#"{
            "bids": [{"price": 0.45, "size": 100}],
            "asks": [{"price": 0.50, "size": 5}, {"price": 0.60, "size": 10}]
        }"#,
    )
}

#[test]
fn simulate_emits_json_result() {
    let book = two_sided_snapshot();

    Command::cargo_bin("fillcast")
        .unwrap()
        .args(["simulate", "--side", "buy", "--size", "10", "--json"])
        .arg("--book")
        .arg(book.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"averagePrice\": \"0.550\""))
        .stdout(predicate::str::contains("\"liquidityAvailable\": \"15\""));
}

#[test]
fn simulate_renders_fill_table() {
    let book = two_sided_snapshot();

    Command::cargo_bin("fillcast")
        .unwrap()
        .args(["simulate", "--side", "buy", "--size", "10"])
        .arg("--book")
        .arg(book.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("average price"))
        .stdout(predicate::str::contains("0.55"));
}

#[test]
fn simulate_reports_missing_liquidity() {
    let book = snapshot_file(r#"{"bids": [{"price": 0.45, "size": 100}], "asks": []}"#);

    Command::cargo_bin("fillcast")
        .unwrap()
        .args(["simulate", "--side", "buy", "--size", "10"])
        .arg("--book")
        .arg(book.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no resting liquidity"));
}

#[test]
fn simulate_rejects_out_of_range_limit() {
    let book = two_sided_snapshot();

    Command::cargo_bin("fillcast")
        .unwrap()
        .args([
            "simulate",
            "--side",
            "buy",
            "--size",
            "10",
            "--limit-price",
            "1.5",
        ])
        .arg("--book")
        .arg(book.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit price must be within"));
}

#[test]
fn depth_shows_best_quotes() {
    let book = two_sided_snapshot();

    Command::cargo_bin("fillcast")
        .unwrap()
        .arg("depth")
        .arg("--book")
        .arg(book.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("best bid"))
        .stdout(predicate::str::contains("0.45"))
        .stdout(predicate::str::contains("best ask"))
        .stdout(predicate::str::contains("0.5"));
}

#[test]
fn check_config_rejects_broken_file() {
    let config = snapshot_file(
        r#"
[logging]
level = "info"
format = "xml"
"#,
    );

    Command::cargo_bin("fillcast")
        .unwrap()
        .args(["check", "config", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for format"));
}

#[test]
fn check_config_accepts_valid_file() {
    let config = snapshot_file(
        r#"
[logging]
level = "info"
format = "pretty"

[book]
ttl_secs = 5
"#,
    );

    Command::cargo_bin("fillcast")
        .unwrap()
        .args(["check", "config", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));
}
