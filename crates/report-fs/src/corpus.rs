//! Report corpus discovery and loading.
//!
//! A corpus is a flat directory of `.txt` files, one report per file, as
//! produced by the PDF/OCR conversion step. A report's id is its file stem
//! (`"132 U.txt"` has id `"132 U"`).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result, io};

/// File extension of report text files.
pub const REPORT_EXTENSION: &str = "txt";

/// Lists the report files of `dir`, sorted by file name.
///
/// Only regular `.txt` files are returned; files whose name appears in
/// `excluded` are skipped.
///
/// # Errors
/// - [`Error::NotADirectory`] if `dir` is not a directory
/// - [`Error::EmptyCorpus`] if no report file remains
pub fn discover_reports<S: AsRef<str>>(dir: &Path, excluded: &[S]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    let mut reports = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();

        let is_report = path.is_file()
            && path.extension().and_then(|ext| ext.to_str()) == Some(REPORT_EXTENSION);
        if !is_report {
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if excluded.iter().any(|ex| ex.as_ref() == name) {
            debug!(file = %name, "skipping excluded report");
            continue;
        }

        reports.push(path);
    }

    if reports.is_empty() {
        return Err(Error::EmptyCorpus {
            path: dir.to_path_buf(),
        });
    }

    reports.sort();
    Ok(reports)
}

/// One report loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    /// The file stem.
    pub id: String,
    /// Source path.
    pub path: PathBuf,
    /// Lines with their terminators, in file order.
    pub lines: Vec<String>,
}

impl ReportDocument {
    /// Read a report file.
    pub fn read(path: &Path) -> Result<Self> {
        Ok(Self {
            id: document_id(path),
            path: path.to_path_buf(),
            lines: io::read_lines(path)?,
        })
    }

    /// Borrowed view of the lines, as taken by the extraction passes.
    pub fn line_refs(&self) -> Vec<&str> {
        self.lines.iter().map(String::as_str).collect()
    }

    /// The file name, used to name the extracted body file.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{}.{}", self.id, REPORT_EXTENSION))
    }
}

/// Stable identifier of a report: its file stem.
pub fn document_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
