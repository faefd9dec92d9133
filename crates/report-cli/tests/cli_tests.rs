//! End-to-end tests for the reports binary

use assert_cmd::Command;
use predicates::prelude::*;
use report_test_utils::TestCorpus;
use report_test_utils::fixture::EXPECTED_BODY;

/// Get a Command for the reports binary
fn reports_cmd() -> Command {
    let mut cmd = Command::cargo_bin("reports").expect("Failed to find reports binary");
    cmd.env_remove("REPORTS_CONFIG");
    cmd
}

// ============================================================================
// profiles
// ============================================================================

#[test]
fn test_profiles_lists_builtins() {
    reports_cmd()
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("Built-in Profiles"))
        .stdout(predicate::str::contains("ultrasound"))
        .stdout(predicate::str::contains("surgical"));
}

#[test]
fn test_profiles_json_is_parseable() {
    let output = reports_cmd().args(["profiles", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["ultrasound"]["schema"], "report-miner/1");
    assert_eq!(value["surgical"]["extraction"]["body_between_end_markers"][0], "OPERATION REPORT");
}

// ============================================================================
// extract
// ============================================================================

#[test]
fn test_extract_default_profile() {
    let corpus = TestCorpus::new();
    corpus.add_sample_report("1 U.txt");
    let output = corpus.root().join("processed");

    reports_cmd()
        .arg("extract")
        .arg("--input")
        .arg(corpus.reports_dir())
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 1 bodies"));

    assert_eq!(corpus.read_file("processed/1 U.txt"), EXPECTED_BODY);
}

#[test]
fn test_extract_warns_on_missing_marker() {
    let corpus = TestCorpus::new();
    corpus.add_report("2 U.txt", "Scanned page\nRENSEIGNEMENT CLINIQUE / CLINICAL INFORMATION:\nXXX.\n");

    reports_cmd()
        .arg("extract")
        .arg("-i")
        .arg(corpus.reports_dir())
        .arg("-o")
        .arg(corpus.root().join("out"))
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"))
        .stderr(predicate::str::contains("end marker not found"));

    assert_eq!(
        corpus.read_file("out/2 U.txt"),
        "RENSEIGNEMENT CLINIQUE / CLINICAL INFORMATION: XXX."
    );
}

#[test]
fn test_extract_with_config_file() {
    let corpus = TestCorpus::new();
    corpus.add_report("op.txt", "Header\nPROCEDURE: repair\nDone.\nDictated by XXX\n");
    let config = corpus.write_file(
        "surgery.toml",
        "schema = \"report-miner/1\"\n\n[extraction]\nbody_begin_markers = \"PROCEDURE\"\nbody_end_markers = [\"Dictated\"]\n",
    );

    reports_cmd()
        .arg("extract")
        .arg("-i")
        .arg(corpus.reports_dir())
        .arg("-o")
        .arg(corpus.root().join("out"))
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert_eq!(corpus.read_file("out/op.txt"), "PROCEDURE: repair Done.");
}

#[test]
fn test_extract_unknown_profile_fails() {
    let corpus = TestCorpus::new();
    corpus.add_sample_report("1 U.txt");

    reports_cmd()
        .arg("extract")
        .arg("-i")
        .arg(corpus.reports_dir())
        .arg("-o")
        .arg(corpus.root().join("out"))
        .args(["--profile", "pathology"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("Unknown profile 'pathology'"));
}

#[test]
fn test_extract_empty_corpus_fails() {
    let corpus = TestCorpus::new();

    reports_cmd()
        .arg("extract")
        .arg("-i")
        .arg(corpus.reports_dir())
        .arg("-o")
        .arg(corpus.root().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No report text files found"));
}

// ============================================================================
// check
// ============================================================================

#[test]
fn test_check_mismatched_pairs_fails() {
    let corpus = TestCorpus::new();
    let config = corpus.write_file(
        "bad.toml",
        "schema = \"report-miner/1\"\n\n[extraction]\nbody_begin_markers = \"A\"\nbody_end_markers = \"B\"\nbody_between_start_markers = [\"C\", \"D\"]\nbody_between_end_markers = [\"E\"]\n",
    );

    reports_cmd()
        .arg("check")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("got 2 start and 1 end"));
}

#[test]
fn test_check_valid_config() {
    let corpus = TestCorpus::new();
    let config = corpus.write_file(
        "ok.json",
        r#"{"schema": "report-miner/1", "extraction": {"body_begin_markers": "A", "body_end_markers": ["B", "C"]}}"#,
    );

    reports_cmd()
        .args(["check", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid"))
        .stdout(predicate::str::contains("B | C"));
}

// ============================================================================
// dataset + preprocess
// ============================================================================

#[test]
fn test_dataset_then_preprocess() {
    let corpus = TestCorpus::new();
    corpus.add_report("1 U.txt", "IMPRESSION: Appendix 7mm.");
    corpus.add_report("2 U.txt", "IMPRESSION: Normal.");
    let labels = corpus.write_file("labels.jsonl", "{\"1 U\": 1}\n{\"9 U\": 0}\n");
    let dataset = corpus.root().join("dataset.jsonl");
    let clean = corpus.root().join("clean.jsonl");

    reports_cmd()
        .arg("dataset")
        .arg("-i")
        .arg(corpus.reports_dir())
        .arg("-l")
        .arg(&labels)
        .arg("-o")
        .arg(&dataset)
        .assert()
        .success()
        .stderr(predicate::str::contains("2 U: no label, skipped"))
        .stderr(predicate::str::contains("9 U: labelled but no body file found"));

    assert_eq!(
        corpus.read_file("dataset.jsonl"),
        "{\"id\":\"1 U\",\"text\":\"IMPRESSION: Appendix 7mm.\",\"label\":1,\"features\":[]}\n"
    );

    reports_cmd()
        .arg("preprocess")
        .arg("-i")
        .arg(&dataset)
        .arg("-o")
        .arg(&clean)
        .args(["--profile", "ultrasound"])
        .assert()
        .success();

    assert_eq!(
        corpus.read_file("clean.jsonl"),
        "{\"id\":\"1 U\",\"text\":\"appendix 7 mm.\",\"label\":1,\"features\":[]}\n"
    );
}

#[test]
fn test_dataset_rejects_multi_pair_label_line() {
    let corpus = TestCorpus::new();
    corpus.add_report("1 U.txt", "XXX.");
    let labels = corpus.write_file("labels.jsonl", "{\"1 U\": 1, \"2 U\": 0}\n");

    reports_cmd()
        .arg("dataset")
        .arg("-i")
        .arg(corpus.reports_dir())
        .arg("-l")
        .arg(&labels)
        .arg("-o")
        .arg(corpus.root().join("dataset.jsonl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected exactly one"));

    corpus.assert_file_not_exists("dataset.jsonl");
}

#[test]
fn test_dataset_help_names_label_formats() {
    reports_cmd()
        .args(["dataset", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".jsonl"))
        .stdout(predicate::str::contains("TOML, JSON or YAML"));
}

#[test]
fn test_no_command_shows_hint() {
    reports_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("reports --help"));
}
