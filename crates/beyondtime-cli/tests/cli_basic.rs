//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Each run gets
//! its own HOME so config files never touch the real one.

use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(home: &TempDir, args: &[&str]) -> (i32, String, String) {
    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "beyondtime-cli", "--"])
        .args(args)
        .env("HOME", home.path())
        .env_remove("BEYONDTIME_ENV")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn home() -> TempDir {
    tempfile::tempdir().expect("tempdir")
}

#[test]
fn test_ring_segment_deep_work() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["ring", "segment", "8", "3", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["start_angle"].as_f64(), Some(30.0));
    assert_eq!(parsed["end_angle"].as_f64(), Some(75.0));
    assert_eq!(parsed["large_arc"].as_bool(), Some(false));
}

#[test]
fn test_ring_segment_rejects_bad_start() {
    let home = home();
    let (code, _, stderr) = run_cli(&home, &["ring", "segment", "25", "1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_ring_segments_json() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["ring", "segments", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(6));
}

#[test]
fn test_ring_svg() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["ring", "svg", "--at", "14:30", "--theme", "light"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("<svg"));
    assert!(stdout.contains("14:30"));
    assert!(stdout.contains("id=\"task-2\""));
}

#[test]
fn test_builder_plan_overwrite() {
    let home = home();
    let (code, stdout, _) = run_cli(
        &home,
        &["builder", "plan", "09:00=t2", "09:00=t1", "--json"],
    );
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let schedule = parsed["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 16);
    let nine = schedule.iter().find(|r| r["slot"] == "09:00").unwrap();
    assert_eq!(nine["task"]["id"], "t1");
}

#[test]
fn test_builder_plan_unknown_slot() {
    let home = home();
    let (code, _, stderr) = run_cli(&home, &["builder", "plan", "23:00=t1"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("23:00"));
}

#[test]
fn test_habits_toggle() {
    let home = home();
    let (code, stdout, _) = run_cli(&home, &["habits", "list", "--toggle", "3"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("5/6"));
}

#[test]
fn test_dashboard_greeting() {
    let home = home();
    let (code, stdout, _) = run_cli(
        &home,
        &["dashboard", "--at", "2026-10-16 19:05", "--json"],
    );
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["greeting"], "Good Evening, Nirmal");
    assert_eq!(parsed["date_line"], "Friday, October 16");
    assert_eq!(parsed["clock"], "19:05");
}

#[test]
fn test_particles_deterministic() {
    let home = home();
    let (_, first, _) = run_cli(&home, &["particles", "--seed", "7", "--count", "5"]);
    let (code, second, _) = run_cli(&home, &["particles", "--seed", "7", "--count", "5"]);
    assert_eq!(code, 0);
    assert_eq!(first, second);
}

#[test]
fn test_particles_rejects_oversized_count() {
    let home = home();
    let (code, _, stderr) = run_cli(&home, &["particles", "--count", "18446744073709551615"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("at most 1000"));
}

#[test]
fn test_ring_segment_rejects_overflowing_duration() {
    let home = home();
    let (code, _, stderr) = run_cli(&home, &["ring", "segment", "1", "1e308"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid duration"));
}

#[test]
fn test_config_set_get() {
    let home = home();
    let (code, _, _) = run_cli(&home, &["config", "set", "ui.user_name", "Ada"]);
    assert_eq!(code, 0);
    let (code, stdout, _) = run_cli(&home, &["config", "get", "ui.user_name"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "Ada");
}

#[test]
fn test_config_rejects_thin_ring() {
    let home = home();
    let (code, _, _) = run_cli(&home, &["config", "set", "ring.thickness", "500"]);
    assert_eq!(code, 1);
}

#[test]
fn test_clock_watch_ticks() {
    let home = home();
    let (code, stdout, _) = run_cli(
        &home,
        &["clock", "watch", "--ticks", "2", "--interval-ms", "10"],
    );
    assert_eq!(code, 0);
    assert!(stdout.lines().next().unwrap().ends_with("ring,dashboard"));
}
