//! End-to-end CLI tests

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn algokit() -> Command {
    Command::cargo_bin("algokit").expect("binary builds")
}

#[test]
fn list_names_the_builtin_entries() {
    algokit()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("dfs"))
        .stdout(predicate::str::contains("ucs"))
        .stdout(predicate::str::contains("wumpus"));
}

#[test]
fn show_prints_the_listing() {
    algokit()
        .args(["show", "dfs", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fn dfs"))
        .stdout(predicate::str::contains("Depth-first search traversal"));
}

#[test]
fn show_wumpus_prints_prolog() {
    algokit()
        .args(["show", "wumpus", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains(":- dynamic"));
}

#[test]
fn describe_reports_the_kind() {
    algokit()
        .args(["describe", "ucs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("search"));
}

#[test]
fn run_dfs_scenario() {
    algokit()
        .args([
            "run",
            "RUN dfs FROM A ON {A: [B, C], B: [D, E], C: [F], D: [], E: [F], F: []}",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> D -> E -> F -> C"));
}

#[test]
fn run_bfs_scenario() {
    algokit()
        .args([
            "run",
            "RUN bfs FROM A ON {A: [B, C], B: [D, E], C: [F], D: [], E: [F], F: []}",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C -> D -> E -> F"));
}

#[test]
fn run_ucs_scenario() {
    algokit()
        .args([
            "run",
            "RUN ucs FROM A TO D ON {A: [(B, 2), (C, 4)], B: [(C, 1), (D, 7)], C: [(D, 3)], D: []}",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C -> D"))
        .stdout(predicate::str::contains("total cost 6"));
}

#[test]
fn json_output_is_machine_readable() {
    let output = algokit()
        .args(["--json", "run", "RUN bfs FROM A ON {A: [B], B: []}"])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    assert_eq!(value["algorithm"], "bfs");
    assert_eq!(value["order"][0], "A");
}

#[test]
fn invalid_command_exits_nonzero() {
    algokit()
        .args(["run", "RUN {"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn unknown_entry_exits_nonzero() {
    algokit()
        .args(["show", "astar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown algorithm"));
}

#[test]
fn script_file_runs_to_completion() {
    let mut file = tempfile::Builder::new()
        .suffix(".atk")
        .tempfile()
        .expect("temp file");
    writeln!(
        file,
        "-- demo script\nLIST;\nRUN dfs FROM A ON {{A: [B], B: []}}"
    )
    .expect("write script");

    algokit()
        .arg("script")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Algorithm Catalog"))
        .stdout(predicate::str::contains("A -> B"));
}

#[test]
fn script_validation_blocks_unknown_names() {
    let mut file = tempfile::Builder::new()
        .suffix(".atk")
        .tempfile()
        .expect("temp file");
    writeln!(file, "RUN nope FROM A").expect("write script");

    algokit()
        .arg("script")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown algorithm"));
}

#[test]
fn explain_describes_without_executing() {
    algokit()
        .args(["explain", "RUN dijkstra FROM A TO Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RUN dijkstra FROM A TO Z"))
        .stdout(predicate::str::contains("sample graph"));
}

#[test]
fn view_displays_an_ad_hoc_snippet() {
    let mut file = tempfile::Builder::new()
        .suffix(".rs")
        .tempfile()
        .expect("temp file");
    writeln!(file, "fn answer() -> u32 {{ 42 }}").expect("write source");

    algokit()
        .arg("view")
        .arg(file.path())
        .args(["--description", "The answer", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fn answer"))
        .stdout(predicate::str::contains("The answer"));
}
