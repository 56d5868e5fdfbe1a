#![allow(missing_docs, clippy::expect_used, clippy::unwrap_used)]

//! End-to-end tests for the `mdtoc` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn mdtoc_cmd() -> Command {
    Command::cargo_bin("mdtoc").expect("mdtoc binary builds")
}

fn write_doc(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write doc");
    file
}

const SAMPLE: &str = "## Overview\n\nintro, see issue #42\n\n### Details\n\n## Summary\n";

#[test]
fn headings_json_lists_records_in_order() {
    let doc = write_doc(SAMPLE);

    let stdout = mdtoc_cmd()
        .args(["headings", doc.path().to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let records: Value = serde_json::from_slice(&stdout).expect("valid JSON");
    let records = records.as_array().expect("array output");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["id"], "overview");
    assert_eq!(records[0]["level"], 2);
    assert_eq!(records[1]["id"], "details");
    assert_eq!(records[2]["id"], "summary");
}

#[test]
fn toc_json_nests_details_under_overview() {
    let doc = write_doc(SAMPLE);

    let stdout = mdtoc_cmd()
        .args(["toc", doc.path().to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let outline: Value = serde_json::from_slice(&stdout).expect("valid JSON");
    let outline = outline.as_array().expect("array output");
    assert_eq!(outline.len(), 2);
    assert_eq!(outline[0]["id"], "overview");
    assert_eq!(outline[0]["children"][0]["id"], "details");
    assert_eq!(outline[1]["id"], "summary");
    assert_eq!(outline[1]["children"].as_array().unwrap().len(), 0);
}

#[test]
fn reads_stdin_when_no_file_given() {
    mdtoc_cmd()
        .arg("toc")
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("- Overview"))
        .stdout(predicate::str::contains("  - Details"));
}

#[test]
fn jsonl_emits_one_record_per_line() {
    mdtoc_cmd()
        .args(["headings", "-", "--format", "jsonl"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\":\"overview\""))
        .stdout(predicate::function(|out: &str| {
            out.lines().count() == 3 && out.lines().all(|l| l.starts_with('{'))
        }));
}

#[test]
fn max_depth_filters_deeper_headings() {
    mdtoc_cmd()
        .args(["headings", "-", "--format", "json", "--max-depth", "2"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("overview"))
        .stdout(predicate::str::contains("details").not());
}

#[test]
fn empty_input_yields_empty_json_array() {
    let stdout = mdtoc_cmd()
        .args(["headings", "-", "--format", "json"])
        .write_stdin("")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let records: Value = serde_json::from_slice(&stdout).expect("valid JSON");
    assert_eq!(records, Value::Array(Vec::new()));
}

#[test]
fn missing_file_fails_with_context() {
    mdtoc_cmd()
        .args(["toc", "definitely/does/not/exist.mdx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn out_of_range_max_depth_is_rejected_by_clap() {
    mdtoc_cmd()
        .args(["toc", "-", "--max-depth", "9"])
        .write_stdin(SAMPLE)
        .assert()
        .failure();
}

#[test]
fn duplicate_headings_get_distinct_ids() {
    mdtoc_cmd()
        .args(["headings", "-", "--format", "jsonl"])
        .write_stdin("## Redis 개요\n### 성능 포인트\n## Redis 개요\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("redis-개요-1"));
}
