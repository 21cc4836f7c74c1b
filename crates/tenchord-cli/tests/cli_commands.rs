//! Integration tests for the `tenchord` command-line interface.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tenchord() -> Command {
    Command::cargo_bin("tenchord").unwrap()
}

/// Stdin for a game where every frame is a strike.
fn perfect_game_input() -> String {
    let mut input = String::new();
    for frame in 0..12 {
        input.push_str("guess A C# E\n");
        if frame < 11 {
            input.push_str("next\n");
        }
    }
    input.push_str("quit\n");
    input
}

// ---------------------------------------------------------------------------
// chord / kinds
// ---------------------------------------------------------------------------

#[test]
fn chord_prints_notes() {
    tenchord()
        .args(["chord", "A Maj"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A, C#, E"));
}

#[test]
fn chord_compact_name() {
    tenchord()
        .args(["chord", "G7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("G 7").and(predicate::str::contains("G, B, D, F")));
}

#[test]
fn chord_unknown_fails() {
    tenchord()
        .args(["chord", "Q Maj"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown chord"));
}

#[test]
fn kinds_lists_all() {
    tenchord()
        .arg("kinds")
        .assert()
        .success()
        .stdout(predicate::str::contains("dominant seventh"))
        .stdout(predicate::str::contains("9 chord kinds"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_perfect_game() {
    tenchord()
        .args(["play", "--chord", "A Maj"])
        .write_stdin(perfect_game_input())
        .assert()
        .success()
        .stdout(predicate::str::contains("Strike!"))
        .stdout(predicate::str::contains("Game over! Final score: 300"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn play_reports_bad_input_and_continues() {
    tenchord()
        .args(["play", "--chord", "A Maj"])
        .write_stdin("guess H\nprev\ndance\nguess A E\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown note: H"))
        .stdout(predicate::str::contains("already at the first frame"))
        .stdout(predicate::str::contains("unknown command"))
        .stdout(predicate::str::contains("frame score 7"));
}

#[test]
fn play_ends_at_eof() {
    tenchord()
        .args(["play", "--seed", "42"])
        .write_stdin("board\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seed: 42"))
        .stdout(predicate::str::contains("Total: 0"));
}

#[test]
fn play_same_seed_same_chords() {
    let first_frame = |seed: &str| {
        let output = tenchord()
            .args(["play", "--seed", seed])
            .write_stdin("show\n")
            .output()
            .unwrap();
        let stdout = String::from_utf8(output.stdout).unwrap();
        stdout
            .lines()
            .find(|l| l.starts_with("Frame 1 of 10"))
            .map(str::to_string)
    };
    assert!(first_frame("7").is_some());
    assert_eq!(first_frame("7"), first_frame("7"));
}

#[test]
fn play_kind_filter() {
    tenchord()
        .args(["play", "--seed", "3", "--kind", "min"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(" min (attempt 0 of 2)"));
}

#[test]
fn play_bad_kind_fails() {
    tenchord()
        .args(["play", "--kind", "blues"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown chord kind"));
}

#[test]
fn play_bad_chord_fails() {
    tenchord()
        .args(["play", "--chord", "X Maj"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to start game"));
}

#[test]
fn play_writes_summary() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("summary.json");

    tenchord()
        .args(["play", "--chord", "A Maj", "--summary"])
        .arg(&path)
        .write_stdin(perfect_game_input())
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary written to"));

    let content = fs::read_to_string(&path).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(summary["final_score"], 300);
    assert_eq!(summary["over"], true);
    assert_eq!(summary["frames"].as_array().unwrap().len(), 12);
    assert_eq!(summary["card"]["frames"][9]["marks"], serde_json::json!(["X", "X", "X"]));
}

#[test]
fn play_quit_with_trailing_words_stops() {
    tenchord()
        .args(["play", "--chord", "A Maj"])
        .write_stdin("quit now\nboard\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"))
        .stdout(predicate::str::contains("Total:").not());
}
