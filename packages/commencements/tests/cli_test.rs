//! Tests for the akn-commencements binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("water_services")
        .join(name)
}

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_akn-commencements"))
}

#[test]
fn test_toc_yaml() {
    cli()
        .arg("toc")
        .arg(fixture("act-2020-01-01.xml"))
        .args(["--country", "za", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("---\n"))
        .stdout(predicate::str::contains("type: chapter"))
        .stdout(predicate::str::contains("id: chp_1__part_A"));
}

#[test]
fn test_toc_saved_json_can_be_reloaded() {
    let dir = tempdir().unwrap();
    let toc = dir.path().join("toc.json");

    cli()
        .arg("toc")
        .arg(fixture("act-2020-01-01.xml"))
        .arg("--output")
        .arg(&toc)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to:"));

    let content = fs::read_to_string(&toc).unwrap();
    assert!(content.contains("\"id\": \"sec_5\""));

    // a saved TOC describes the same as the document it came from
    cli()
        .arg("describe")
        .arg(&toc)
        .args(["--provisions", "sec_4,sec_5"])
        .assert()
        .success()
        .stdout("Chapter 2, section 4–5\n");
}

#[test]
fn test_describe() {
    cli()
        .arg("describe")
        .arg(fixture("act-2020-01-01.xml"))
        .args(["--provisions", "sec_1,sec_1__subsec_1,sec_1__subsec_2,sec_2,sec_3"])
        .assert()
        .success()
        .stdout("Chapter 1, Part A, section 1–2; Part B, section 3\n");
}

#[test]
fn test_describe_uncommenced() {
    cli()
        .arg("describe")
        .arg(fixture("act-2020-01-01.xml"))
        .args(["--provisions", "sec_4, sec_5", "--uncommenced"])
        .assert()
        .success()
        .stdout("Chapter 2, section 4–5\n");
}

#[test]
fn test_merge() {
    cli()
        .arg("merge")
        .arg("--pit")
        .arg(format!("2021-06-01={}", fixture("act-2021-06-01.xml").display()))
        .arg("--pit")
        .arg(format!("2020-01-01={}", fixture("act-2020-01-01.xml").display()))
        .args(["--country", "za"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sec_5\""))
        .stdout(predicate::str::contains("\"sec_4A\""))
        .stderr(predicate::str::contains("2 points in time"));
}

#[test]
fn test_merge_up_to() {
    cli()
        .arg("merge")
        .arg("--pit")
        .arg(format!("2020-01-01={}", fixture("act-2020-01-01.xml").display()))
        .arg("--pit")
        .arg(format!("2021-06-01={}", fixture("act-2021-06-01.xml").display()))
        .args(["--up-to", "2020-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sec_5\""))
        .stdout(predicate::str::contains("\"sec_4A\"").not());
}

#[test]
fn test_expand() {
    cli()
        .arg("expand")
        .arg(fixture("act-2021-06-01.xml"))
        .args(["--provisions", "sec_4A", "--previously", "sec_4"])
        .assert()
        .success()
        .stdout("[\n  \"chp_2\",\n  \"sec_4A\"\n]\n")
        .stderr(predicate::str::contains("Added:").and(predicate::str::contains("chp_2")));
}

#[test]
fn test_expand_unchanged() {
    cli()
        .arg("expand")
        .arg(fixture("act-2021-06-01.xml"))
        .args(["--provisions", "sec_4", "--format", "yaml"])
        .assert()
        .success()
        .stdout("---\n- sec_4\n")
        .stderr(predicate::str::contains("Added:").not());
}

#[test]
fn test_missing_file() {
    cli()
        .arg("toc")
        .arg("does-not-exist.xml")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_invalid_point_in_time() {
    cli()
        .args(["merge", "--pit", "yesterday"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_invalid_country() {
    cli()
        .arg("describe")
        .arg(fixture("act-2020-01-01.xml"))
        .args(["--provisions", "sec_1", "--country", "south africa"])
        .assert()
        .failure()
        .code(1);
}
