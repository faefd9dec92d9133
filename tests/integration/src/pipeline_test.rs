//! End-to-end integration test for the corpus pipeline
//!
//! Exercises the complete flow: config file -> corpus discovery -> body
//! extraction -> labelled dataset -> preprocessing.

use std::collections::BTreeMap;

use report_config::{ProfileRegistry, load_config};
use report_fs::corpus::document_id;
use report_fs::{DatasetRecord, ReportDocument, discover_reports, io, read_jsonl, write_jsonl};
use report_test_utils::TestCorpus;
use report_test_utils::fixture::{EXPECTED_BODY, sample_report_text};

const CONFIG: &str = r#"
schema = "report-miner/1"

[extraction]
body_begin_marker = "RENSEIGNEMENT CLINIQUE / CLINICAL INFORMATION"
body_end_markers = ["Case dictated by", "Electronically signed by", "Dossier/MRN:"]
body_between_start_markers = [["Hôpital de Montréal pour Enfants / Montreal Children's Hospital", "HOPITAL DE MONTREAL POUR ENFANTS"]]
body_between_end_markers = ["Rapport/Report"]
excluded_files = ["132 U.txt"]

[preprocessing]
patterns_to_remove = [
    "RENSEIGNEMENT CLINIQUE / CLINICAL INFORMATION[:]?",
    "PROTOCOLE RADIOLOGIQUE / RADIOLOGIST'S REPORT[:]?",
    "(IMPRESSION|[Ii]mpression)s?:?",
]
lowercase = true
split_measure_text = true
"#;

/// Set up a corpus with two usable reports and one excluded report.
fn setup_corpus() -> TestCorpus {
    let corpus = TestCorpus::new();
    corpus.add_sample_report("1 U.txt");
    corpus.add_report(
        "2 U.txt",
        &sample_report_text().replace("IMPRESSION:\n", "IMPRESSION: Appendix 8mm.\n"),
    );
    corpus.add_report("132 U.txt", "unreadable scan\n");
    corpus.write_file("notes.md", "not a report");
    corpus
}

#[test]
fn test_config_driven_extraction() {
    let corpus = setup_corpus();
    let config = load_config(&corpus.write_file("extraction.toml", CONFIG)).unwrap();
    let extractor = config.extraction.compile().unwrap();

    let reports = discover_reports(&corpus.reports_dir(), &config.extraction.excluded_files).unwrap();
    let ids: Vec<String> = reports.iter().map(|p| document_id(p)).collect();
    assert_eq!(ids, vec!["1 U", "2 U"]);

    let document = ReportDocument::read(&reports[0]).unwrap();
    let extraction = extractor.run(&document.line_refs());
    assert!(extraction.start_found && extraction.end_found);
    assert_eq!(extraction.joined(), EXPECTED_BODY);
}

#[test]
fn test_config_file_matches_builtin_profile() {
    let corpus = setup_corpus();
    let from_file = load_config(&corpus.write_file("extraction.toml", CONFIG))
        .unwrap()
        .extraction
        .compile()
        .unwrap();
    let builtin = ProfileRegistry::with_builtins()
        .get("ultrasound")
        .unwrap()
        .extraction
        .compile()
        .unwrap();

    let text = sample_report_text();
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    assert_eq!(from_file.extract(&lines), builtin.extract(&lines));
}

#[test]
fn test_full_pipeline_to_preprocessed_dataset() {
    let corpus = setup_corpus();
    let config = load_config(&corpus.write_file("extraction.toml", CONFIG)).unwrap();
    let extractor = config.extraction.compile().unwrap();
    let preprocessor = config.preprocessing.as_ref().unwrap().compile().unwrap();
    let labels = BTreeMap::from([("1 U".to_string(), 0), ("2 U".to_string(), 1)]);

    let mut records = Vec::new();
    for path in discover_reports(&corpus.reports_dir(), &config.extraction.excluded_files).unwrap() {
        let document = ReportDocument::read(&path).unwrap();
        let body = extractor.extract_body(&document.lines);
        io::write_text(&corpus.root().join("processed").join(document.file_name()), &body).unwrap();
        records.push(DatasetRecord::new(
            document.id.clone(),
            body,
            labels[&document.id],
        ));
    }

    let dataset = corpus.root().join("dataset.jsonl");
    write_jsonl(&dataset, &records).unwrap();

    let mut loaded: Vec<DatasetRecord> = read_jsonl(&dataset).unwrap();
    for record in &mut loaded {
        record.text = preprocessor.apply(&record.text);
    }

    corpus.assert_file_exists("processed/1 U.txt");
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[1].label, 1);
    assert!(loaded[1].text.contains("appendix 8 mm."));
    assert!(!loaded[0].text.contains("impression"));
    assert_eq!(loaded[0].text, loaded[0].text.to_lowercase());
}
