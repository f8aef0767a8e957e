//! Integration tests for the quoridor engine binary.
//!
//! Scripts QTP sessions by spawning the engine, feeding commands over stdin,
//! and checking the stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_quoridor");
    let mut child = Command::new(exe)
        .args(["--seed", "42"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start quoridor");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

#[test]
fn info_identifies_the_engine() {
    let lines = run_engine(&["info", "quit"]);
    assert_eq!(lines, vec!["id quoridor-rs v0.1.0", "ok"]);
}

#[test]
fn eof_ends_the_session_cleanly() {
    let lines = run_engine(&["info"]);
    assert_eq!(lines, vec!["id quoridor-rs v0.1.0", "ok"]);
}

#[test]
fn newgame_starts_from_the_fixed_position() {
    let lines = run_engine(&["newgame", "quit"]);
    assert_eq!(lines, vec!["-", "ok"]);
}

#[test]
fn newgame_replays_a_gamestring() {
    let lines = run_engine(&["newgame 74;h33", "score", "quit"]);
    assert_eq!(lines[0], "74;h33");
    assert_eq!(lines[1], "ok");
    // White walked a step but the fence detours both pawns by one.
    assert_eq!(lines[2], "W 8; B 9");
}

#[test]
fn play_grows_the_gamestring() {
    let lines = run_engine(&["newgame", "play 74", "play h00", "undo", "quit"]);
    assert_eq!(lines, vec!["-", "ok", "74", "ok", "74;h00", "ok", "74", "ok"]);
}

#[test]
fn opening_moves_and_route_are_deterministic() {
    let lines = run_engine(&["newgame", "validmoves", "route", "quit"]);
    assert_eq!(lines[2], "3");
    assert_eq!(lines[3], "74; 83; 85");
    assert_eq!(lines[5], "8");
    assert_eq!(lines[6], "84; 74; 64; 54; 44; 34; 24; 14; 04");
}

#[test]
fn every_search_reports_the_same_opening_distance() {
    let lines = run_engine(&["newgame", "route bfs", "route dijkstra", "route astar", "quit"]);
    assert_eq!(lines[2], "8");
    assert_eq!(lines[5], "8");
    assert_eq!(lines[8], "8");
}

#[test]
fn impact_reports_deltas_or_blocking() {
    let lines = run_engine(&[
        "newgame",
        "impact h00",
        "impact h33",
        "newgame h73;v72",
        "impact v74",
        "quit",
    ]);
    assert_eq!(lines[2], "W +0; B +0");
    assert_eq!(lines[4], "W +1; B +1");
    assert_eq!(lines[8], "blocking");
}

#[test]
fn placings_start_at_the_full_pool() {
    let lines = run_engine(&["newgame", "placings", "quit"]);
    assert_eq!(lines[2], "128");
    assert!(lines[3].starts_with("h00; h01"));
    assert!(lines[3].ends_with("v77"));
}

#[test]
fn bestmove_is_playable() {
    let lines = run_engine(&["newgame", "bestmove", "quit"]);
    let best = &lines[2];

    let fence = best.len() == 3 && best.starts_with(['h', 'v']);
    let step = best.len() == 2;
    assert!(fence || step, "unparseable bestmove {best}");
    assert!(best.chars().skip(if fence { 1 } else { 0 }).all(|c| c.is_ascii_digit()));
}

#[test]
fn stats_count_bot_invocations() {
    let lines = run_engine(&["newgame", "bestmove", "bestmove", "stats", "quit"]);
    assert!(lines.contains(&"action summary:".to_string()));
    assert!(lines.iter().any(|l| l == "- runner.choose: 2"));
}

#[test]
fn commands_before_newgame_are_refused() {
    let lines = run_engine(&["validmoves", "quit"]);
    assert_eq!(lines[0], "err");
    assert_eq!(lines[1], "no game in progress");
    assert_eq!(lines[2], "ok");
}

#[test]
fn illegal_play_reports_err_and_recovers() {
    let lines = run_engine(&["newgame", "play 99", "play 74", "quit"]);
    assert_eq!(lines[2], "err");
    assert_eq!(lines[4], "ok");
    assert_eq!(lines[5], "74");
}
