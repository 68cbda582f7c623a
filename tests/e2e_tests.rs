//! End-to-End Tests for the focus bar binary.
//!
//! These tests run the compiled binary and drive it through stdin:
//! - TC-E-001: Start and skip a short break
//! - TC-E-002: JSON display stream
//! - TC-E-003: Invalid input is reported, not fatal
//! - TC-E-004: Argument validation
//! - TC-E-005: Presets and completions

use assert_cmd::Command;
use predicates::prelude::*;

fn focusbar() -> Command {
    Command::cargo_bin("focusbar").unwrap()
}

// ============================================================================
// TC-E-001: Start and skip
// ============================================================================

#[test]
fn tc_e_001_start_and_skip_short_break() {
    focusbar()
        .args(["run", "--duration", "5"])
        .write_stdin("\nskip\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[休憩] 05:00"))
        .stdout(predicate::str::contains("(Pause)"))
        .stdout(predicate::str::contains("[停止中] 00:00"))
        .stdout(predicate::str::contains("完了したセッション: 集中 0"));
}

#[test]
fn tc_e_001_eof_quits() {
    focusbar()
        .arg("run")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("完了したセッション"));
}

// ============================================================================
// TC-E-002: JSON display stream
// ============================================================================

#[test]
fn tc_e_002_json_lines() {
    let output = focusbar()
        .args(["run", "--json", "--autostart", "--task", "Inbox"])
        .write_stdin("pause\nq\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["event"], "started");
    assert_eq!(lines[0]["timeText"], "25:00");
    assert_eq!(lines[0]["task"], "Inbox");
    assert_eq!(lines[1]["event"], "paused");
    assert_eq!(lines[1]["primaryLabel"], "Resume");
    // Final status snapshot
    assert_eq!(lines[2]["state"], "focus");
    assert_eq!(lines[2]["running"], false);
}

// ============================================================================
// TC-E-003: Invalid input
// ============================================================================

#[test]
fn tc_e_003_unknown_command_is_reported() {
    focusbar()
        .arg("run")
        .write_stdin("jump\nq\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("不明なコマンドです: 'jump'"));
}

#[test]
fn tc_e_003_unparseable_duration_selects_default() {
    focusbar()
        .args(["run", "--duration", "5"])
        .write_stdin("d five\n\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[集中] 25:00"))
        .stdout(predicate::str::contains("[休憩]").not())
        .stderr(predicate::str::contains("既定の時間を使います"));
}

// ============================================================================
// TC-E-004: Argument validation
// ============================================================================

#[test]
fn tc_e_004_duration_out_of_range() {
    focusbar()
        .args(["run", "--duration", "0"])
        .assert()
        .failure();

    focusbar()
        .args(["run", "--duration", "121"])
        .assert()
        .failure();
}

#[test]
fn tc_e_004_empty_task_rejected() {
    focusbar()
        .args(["run", "--task", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("タスク名は空にできません"));
}

// ============================================================================
// TC-E-005: Presets and completions
// ============================================================================

#[test]
fn tc_e_005_presets_text() {
    focusbar()
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("5分  休憩"))
        .stdout(predicate::str::contains("15分  長い休憩"))
        .stdout(predicate::str::contains("25分  集中"));
}

#[test]
fn tc_e_005_presets_json() {
    let output = focusbar().args(["presets", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
    assert_eq!(value[1]["state"], "long_break");
}

#[test]
fn tc_e_005_completions() {
    focusbar()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("focusbar"));
}

#[test]
fn tc_e_005_no_args_prints_help() {
    focusbar()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}
