//! Preprocess command implementation

use std::path::Path;

use colored::Colorize;
use tracing::info;

use report_config::ReportConfig;
use report_fs::{DatasetRecord, read_jsonl, write_jsonl};
use report_text::TextPreprocessor;

use crate::error::{CliError, Result};

/// Run the preprocess command
pub fn run_preprocess(input: &Path, output: &Path, config: &ReportConfig) -> Result<()> {
    let preprocessor = config
        .preprocessing
        .as_ref()
        .ok_or_else(|| CliError::user("The selected config has no [preprocessing] section"))?
        .compile()?;

    let mut records: Vec<DatasetRecord> = read_jsonl(input)?;
    preprocess_records(&preprocessor, &mut records);
    write_jsonl(output, &records)?;

    println!(
        "{} Preprocessed {} records into {}",
        "OK".green().bold(),
        records.len(),
        output.display()
    );
    Ok(())
}

/// Rewrite the text of every record in place.
pub fn preprocess_records(preprocessor: &TextPreprocessor, records: &mut [DatasetRecord]) {
    for record in records.iter_mut() {
        record.text = preprocessor.apply(&record.text);
    }
    info!(records = records.len(), "preprocessed dataset");
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_config::{ExtractionConfig, PreprocessConfig};
    use report_test_utils::TestCorpus;

    fn config(preprocessing: Option<PreprocessConfig>) -> ReportConfig {
        ReportConfig {
            preprocessing,
            ..ReportConfig::new(ExtractionConfig {
                body_begin_markers: "HISTORY".into(),
                body_end_markers: "Dictated".into(),
                body_between_start_markers: Vec::new(),
                body_between_end_markers: Vec::new(),
                patterns_to_remove: Vec::new(),
                excluded_files: Vec::new(),
                case_insensitive: true,
            })
        }
    }

    #[test]
    fn test_preprocess_rewrites_text() {
        let corpus = TestCorpus::new();
        let input = corpus.root().join("dataset.jsonl");
        let output = corpus.root().join("clean.jsonl");
        write_jsonl(
            &input,
            &[DatasetRecord::new("1 U", "FINDINGS: Appendix 6.2mm, 11.2x12.3cm", 1)],
        )
        .unwrap();

        let preprocessing = PreprocessConfig {
            patterns_to_remove: vec!["FINDINGS[:]?".to_string()],
            lowercase: true,
            split_measure_text: true,
        };
        run_preprocess(&input, &output, &config(Some(preprocessing))).unwrap();

        let records: Vec<DatasetRecord> = read_jsonl(&output).unwrap();
        assert_eq!(records[0].text, "appendix 6.2 mm, 11.2 x 12.3 cm");
        assert_eq!(records[0].label, 1);
    }

    #[test]
    fn test_missing_section_is_user_error() {
        let corpus = TestCorpus::new();
        let input = corpus.root().join("dataset.jsonl");
        write_jsonl::<DatasetRecord>(&input, &[]).unwrap();

        let err = run_preprocess(&input, &corpus.root().join("out.jsonl"), &config(None))
            .unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
    }
}
