#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PEOPLE: &str = "\
add Alice Tan --phone 91234567 --email alice@example.com --address 1 Main St
add Bob Lee --phone 98765432 --email bob@example.com --address 2 Side Rd
add Alice Wong --phone 93334444 --email wong@example.com --address 3 Hill Ave
";

fn session(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("addressbook").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(config_dir.path());
    cmd
}

#[test]
fn favorite_adds_only_the_first_match() {
    let temp = TempDir::new().unwrap();
    let input = format!("{PEOPLE}favorite Alice\nfavorites\n");

    session(&temp)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "New person added: Alice Tan Phone: 91234567 Email: alice@example.com Address: 1 Main St",
        ))
        .stdout(predicate::str::contains("1 favorite persons listed!"))
        .stdout(predicate::str::contains("f1. Alice Tan"))
        .stdout(predicate::str::contains("f2.").not());
}

#[test]
fn favorite_without_match_completes() {
    let temp = TempDir::new().unwrap();
    let input = format!("{PEOPLE}favorite Zed\nfavorites\n");

    session(&temp)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Adding to favorite list completed."))
        .stdout(predicate::str::contains("0 favorite persons listed!"));
}

#[test]
fn clear_keeps_favorites() {
    let temp = TempDir::new().unwrap();
    let input = format!("{PEOPLE}favorite Bob\nclear\nlist\nfavorites\n");

    session(&temp)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Address book has been cleared!"))
        .stdout(predicate::str::contains("0 persons listed!"))
        .stdout(predicate::str::contains("f1. Bob Lee"));
}

#[test]
fn duplicate_add_is_reported() {
    let temp = TempDir::new().unwrap();
    let input = format!("{PEOPLE}add Bob Lee --phone 98765432 --email bob@example.com --address 2 Side Rd\nlist\n");

    session(&temp)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "This person already exists in the address book",
        ))
        .stdout(predicate::str::contains("3 persons listed!"));
}

#[test]
fn errors_do_not_end_the_session() {
    let temp = TempDir::new().unwrap();
    let input = format!("{PEOPLE}frobnicate\ndelete 9\nadd Eve --phone abc --email eve@example.com --address x\nlist\n");

    session(&temp)
        .write_stdin(input)
        .assert()
        .success()
        .stderr(predicate::str::contains("frobnicate"))
        .stderr(predicate::str::contains(
            "Error: The person index provided is invalid: 9",
        ))
        .stderr(predicate::str::contains("Error: Invalid phone"))
        .stdout(predicate::str::contains("3 persons listed!"));
}

#[test]
fn delete_and_find_share_indexes() {
    let temp = TempDir::new().unwrap();
    let input = format!("{PEOPLE}find Wong\ndelete 3\nlist\n");

    session(&temp)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("3. Alice Wong"))
        .stdout(predicate::str::contains("Deleted Person: Alice Wong"))
        .stdout(predicate::str::contains("2 persons listed!"));
}

#[test]
fn exit_stops_reading_input() {
    let temp = TempDir::new().unwrap();
    let input = format!("{PEOPLE}exit\nlist\n");

    session(&temp)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting Address Book as requested ..."))
        .stdout(predicate::str::contains("persons listed!").not());
}

#[test]
fn json_output_mode() {
    let temp = TempDir::new().unwrap();
    let input = format!("{PEOPLE}favorite Alice\n");

    session(&temp)
        .arg("--json")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""level":"success""#))
        .stdout(predicate::str::contains(r#""affected_persons":[{"name":"Alice Tan""#));
}

#[test]
fn config_can_prune_favorites_on_delete() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.json"),
        r#"{ "prune_favorites_on_remove": true }"#,
    )
    .unwrap();
    let input = format!("{PEOPLE}favorite Bob\ndelete 2\nfavorites\n");

    session(&temp)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 favorite persons listed!"));
}

#[test]
fn config_can_reject_duplicate_favorites() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.json"),
        r#"{ "reject_duplicate_favorites": true }"#,
    )
    .unwrap();
    let input = format!("{PEOPLE}favorite Bob\nfavorite Bob\n");

    session(&temp)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "This person already exists in the favorite list",
        ));
}

#[test]
fn malformed_config_fails_at_startup() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.json"), "{").unwrap();

    session(&temp)
        .write_stdin("list\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}
