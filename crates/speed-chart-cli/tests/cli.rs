// File: crates/speed-chart-cli/tests/cli.rs
// Purpose: End-to-end CLI runs against the bundled sample and temp fixtures.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn sample() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/sample_animals.csv")
}

fn cmd() -> Command {
    Command::cargo_bin("speed-chart").expect("binary built")
}

#[test]
fn render_writes_svg_with_forty_bars() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("chart.svg");
    cmd()
        .args(["render", sample().to_str().unwrap(), "--svg", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("(40 bars)"));

    let svg = std::fs::read_to_string(&out).expect("svg written");
    assert_eq!(svg.matches(r#"<rect class="bar""#).count(), 40);
    assert!(svg.contains("Top 40 Fastest Animals by Speed"));
}

#[test]
fn render_top_flag_changes_title_and_bar_count() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("top5.svg");
    cmd()
        .args(["render", sample().to_str().unwrap(), "--top", "5", "--svg", out.to_str().unwrap()])
        .assert()
        .success();
    let svg = std::fs::read_to_string(&out).expect("svg written");
    assert_eq!(svg.matches(r#"<rect class="bar""#).count(), 5);
    assert!(svg.contains("Top 5 Fastest Animals by Speed"));
}

#[test]
fn top_above_forty_is_rejected() {
    cmd()
        .args(["inspect", sample().to_str().unwrap(), "--top", "41"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--top"));
}

#[test]
fn render_missing_input_still_succeeds_with_empty_chart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("empty.svg");
    cmd()
        .args(["render", "no/such/file.csv", "--svg", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("(0 bars)"))
        .stderr(predicate::str::contains("error loading CSV"));
    let svg = std::fs::read_to_string(&out).expect("svg written");
    assert!(!svg.contains("<rect"));
}

#[test]
fn inspect_lists_cleaned_rows_and_rejections() {
    cmd()
        .args(["inspect", sample().to_str().unwrap(), "--top", "3", "--rejected"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cheetah"))
        .stdout(predicate::str::contains("speed is not finite"))
        .stdout(predicate::str::contains("3 record(s)"));
}

#[test]
fn inspect_fails_on_missing_input() {
    cmd()
        .args(["inspect", "no/such/file.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"));
}
