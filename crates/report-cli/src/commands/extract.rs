//! Extract command implementation
//!
//! Cuts the clinical body out of every report of a corpus and writes it, one
//! space-joined line per document, to the output folder.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use tracing::{info, warn};

use report_config::ReportConfig;
use report_fs::{ReportDocument, discover_reports, io};
use report_text::BodyExtractor;

use crate::error::Result;

/// Outcome of an extraction run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    pub written: usize,
    /// Ids of documents where a boundary marker was missing.
    pub incomplete: Vec<String>,
}

/// Run the extract command
pub fn run_extract(input: &Path, output: &Path, config: &ReportConfig) -> Result<()> {
    let extractor = config.extraction.compile()?;
    let reports = discover_reports(input, &config.extraction.excluded_files)?;

    println!(
        "{} Extracting {} reports from {}",
        "=>".blue().bold(),
        reports.len(),
        input.display()
    );

    let summary = extract_corpus(&extractor, &reports, output)?;

    println!(
        "{} Wrote {} bodies to {}",
        "OK".green().bold(),
        summary.written,
        output.display()
    );
    if !summary.incomplete.is_empty() {
        println!(
            "{} {} documents were extracted without one of their boundary markers.",
            "Note:".dimmed(),
            summary.incomplete.len()
        );
    }

    Ok(())
}

/// Extract every report in `reports` into `output`.
pub fn extract_corpus(
    extractor: &BodyExtractor,
    reports: &[PathBuf],
    output: &Path,
) -> Result<ExtractSummary> {
    fs::create_dir_all(output).map_err(|e| report_fs::Error::io(output, e))?;
    let mut summary = ExtractSummary::default();

    for path in reports {
        let document = ReportDocument::read(path)?;
        let extraction = extractor.run(&document.line_refs());

        if !extraction.start_found || !extraction.end_found {
            let missing = match (extraction.start_found, extraction.end_found) {
                (false, false) => "start and end markers",
                (false, true) => "start marker",
                _ => "end marker",
            };
            warn!(id = %document.id, missing, "boundary marker not found");
            eprintln!(
                "{} {}: {} not found, body may include header or footer text",
                "warning:".yellow().bold(),
                document.file_name(),
                missing
            );
            summary.incomplete.push(document.id.clone());
        }

        io::write_text(&output.join(document.file_name()), &extraction.joined())?;
        summary.written += 1;
    }

    info!(
        written = summary.written,
        incomplete = summary.incomplete.len(),
        "extraction finished"
    );
    Ok(summary)
}
