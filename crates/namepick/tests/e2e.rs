//! End-to-end CLI integration tests.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn namepick(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("namepick").expect("binary not found");
    cmd.env("NO_COLOR", "1")
        .env_remove("NAMEPICK_GROUP")
        .arg("--store")
        .arg(store);
    cmd
}

fn stored(store: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(store).unwrap()).unwrap()
}

#[test]
fn help_flag() {
    Command::cargo_bin("namepick")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("name picker"));
}

#[test]
fn version_flag() {
    Command::cargo_bin("namepick")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("namepick"));
}

#[test]
fn add_and_list() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("groups.json");

    namepick(&store)
        .args(["--add", "Ada, Grace,,Ada", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 2 name(s) to Default"))
        .stdout(predicate::str::contains("  Ada"))
        .stdout(predicate::str::contains("  Grace"));

    assert_eq!(stored(&store)["Default"], serde_json::json!(["Ada", "Grace"]));
}

#[test]
fn pick_draws_without_replacement() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("groups.json");
    namepick(&store).args(["-q", "--add", "A,B,C"]).assert().success();

    let output = namepick(&store)
        .args(["-q", "--pick", "5", "--seed", "9"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let mut picks: Vec<String> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(ToString::to_string)
        .collect();
    picks.sort();
    assert_eq!(picks, ["A", "B", "C"]);
}

#[test]
fn pick_with_seed_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("groups.json");
    namepick(&store).args(["-q", "--add", "A,B,C,D,E,F"]).assert().success();

    let run = || {
        namepick(&store)
            .args(["-q", "--pick", "3", "--seed", "1234"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn pick_then_list_marks_chosen() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("groups.json");
    namepick(&store).args(["-q", "--add", "Solo"]).assert().success();

    namepick(&store)
        .args(["--pick", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Solo (picked)"));
}

#[test]
fn groups_lifecycle() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("groups.json");

    namepick(&store)
        .args(["-g", "Team", "--add", "X"])
        .assert()
        .success();
    namepick(&store)
        .arg("--groups")
        .assert()
        .success()
        .stdout(predicate::str::contains("Team"));

    namepick(&store)
        .args(["-g", "Team", "--rename-group", "Crew"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed Team to Crew"));
    assert_eq!(stored(&store)["Crew"], serde_json::json!(["X"]));

    namepick(&store)
        .args(["-g", "Crew", "--delete-group"])
        .assert()
        .success();
    namepick(&store)
        .args(["-q", "--groups"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Crew").not());
}

#[test]
fn rename_to_existing_group_fails() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("groups.json");
    namepick(&store).args(["-g", "A", "--list"]).assert().success();
    namepick(&store).args(["-g", "B", "--list"]).assert().success();

    namepick(&store)
        .args(["-g", "B", "--rename-group", "A"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("group already exists"));
}

#[test]
fn remove_and_clear() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("groups.json");
    namepick(&store).args(["-q", "--add", "A,B,C"]).assert().success();

    namepick(&store)
        .args(["--remove", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed B"));
    assert_eq!(stored(&store)["Default"], serde_json::json!(["A", "C"]));

    namepick(&store).args(["-q", "--clear"]).assert().success();
    assert_eq!(stored(&store)["Default"], serde_json::json!([]));
}

#[test]
fn corrupt_store_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("groups.json");
    std::fs::write(&store, "garbage").unwrap();

    namepick(&store)
        .args(["-q", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn completion_bash() {
    Command::cargo_bin("namepick")
        .unwrap()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("namepick"));
}
