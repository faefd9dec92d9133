use pretty_assertions::assert_eq;
use report_fs::{Error, ReportDocument, discover_reports};
use report_test_utils::{TestCorpus, fixture};

#[test]
fn test_discover_sorted_txt_files_only() {
    let corpus = TestCorpus::new();
    corpus.add_report("2 U.txt", "b\n");
    corpus.add_report("1 U.txt", "a\n");
    corpus.add_report("notes.md", "ignored\n");

    let reports = discover_reports::<&str>(&corpus.reports_dir(), &[]).unwrap();

    let names: Vec<_> = reports
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["1 U.txt", "2 U.txt"]);
}

#[test]
fn test_discover_skips_excluded_files() {
    let corpus = TestCorpus::new();
    corpus.add_report("1 U.txt", "a\n");
    corpus.add_report("132 U.txt", "broken\n");

    let reports = discover_reports(&corpus.reports_dir(), &["132 U.txt"]).unwrap();

    assert_eq!(reports.len(), 1);
    assert!(reports[0].ends_with("1 U.txt"));
}

#[test]
fn test_discover_empty_corpus_fails() {
    let corpus = TestCorpus::new();
    corpus.add_report("only.pdf", "binary");

    let result = discover_reports::<&str>(&corpus.reports_dir(), &[]);
    assert!(matches!(result, Err(Error::EmptyCorpus { .. })));
}

#[test]
fn test_discover_requires_directory() {
    let corpus = TestCorpus::new();
    let file = corpus.add_report("1 U.txt", "a\n");

    let result = discover_reports::<&str>(&file, &[]);
    assert!(matches!(result, Err(Error::NotADirectory { .. })));
}

#[test]
fn test_read_document_keeps_line_terminators() {
    let corpus = TestCorpus::new();
    let path = corpus.add_sample_report("57 U.txt");

    let document = ReportDocument::read(&path).unwrap();

    assert_eq!(document.id, "57 U");
    assert_eq!(document.file_name(), "57 U.txt");
    assert_eq!(document.line_refs(), fixture::sample_report_lines());
}
