//! Dataset command implementation

use std::collections::BTreeMap;
use std::path::Path;

use colored::Colorize;
use tracing::{info, warn};

use report_fs::corpus::document_id;
use report_fs::{ConfigStore, DatasetRecord, discover_reports, io, read_jsonl, write_jsonl};

use crate::error::{CliError, Result};

/// Label map from document id to class.
pub type Labels = BTreeMap<String, i64>;

/// Run the dataset command
pub fn run_dataset(input: &Path, labels: &Path, output: &Path) -> Result<()> {
    let labels = load_labels(labels)?;
    let records = build_dataset(input, &labels)?;

    write_jsonl(output, &records)?;

    println!(
        "{} Wrote {} records to {}",
        "OK".green().bold(),
        records.len(),
        output.display()
    );
    Ok(())
}

/// Read a label map.
///
/// A `.jsonl` file holds exactly one `{"<id>": <label>}` object per line;
/// any other extension goes through [`ConfigStore`] as a flat `id = label`
/// table.
pub fn load_labels(path: &Path) -> Result<Labels> {
    let is_jsonl = path.extension().and_then(|ext| ext.to_str()) == Some("jsonl");

    let labels: Labels = if is_jsonl {
        let entries = read_jsonl::<Labels>(path)?;
        let mut labels = Labels::new();
        for (index, entry) in entries.into_iter().enumerate() {
            if entry.len() != 1 {
                return Err(CliError::user(format!(
                    "Label record {} of {} holds {} id/label pairs, expected exactly one",
                    index + 1,
                    path.display(),
                    entry.len()
                )));
            }
            labels.extend(entry);
        }
        labels
    } else {
        ConfigStore::new().load(path)?
    };

    if labels.is_empty() {
        return Err(CliError::user(format!(
            "No labels found in {}",
            path.display()
        )));
    }
    Ok(labels)
}

/// Pair every extracted body in `input` with its label.
///
/// Bodies without a label and labels without a body are skipped with a
/// warning.
pub fn build_dataset(input: &Path, labels: &Labels) -> Result<Vec<DatasetRecord>> {
    let bodies = discover_reports::<&str>(input, &[])?;
    let ids: Vec<String> = bodies.iter().map(|path| document_id(path)).collect();
    let mut records = Vec::with_capacity(bodies.len());

    for (path, id) in bodies.iter().zip(ids.iter().cloned()) {
        let Some(&label) = labels.get(&id) else {
            warn!(%id, "no label for document");
            eprintln!(
                "{} {}: no label, skipped",
                "warning:".yellow().bold(),
                id
            );
            continue;
        };
        records.push(DatasetRecord::new(id, io::read_text(path)?, label));
    }

    let orphans = orphan_labels(labels, &ids);
    for id in &orphans {
        warn!(%id, "label has no document");
        eprintln!(
            "{} {}: labelled but no body file found",
            "warning:".yellow().bold(),
            id
        );
    }

    info!(
        records = records.len(),
        orphan_labels = orphans.len(),
        "dataset assembled"
    );
    Ok(records)
}

/// Label ids that match none of `ids`, in id order.
pub fn orphan_labels<'a>(labels: &'a Labels, ids: &[String]) -> Vec<&'a str> {
    labels
        .keys()
        .filter(|id| !ids.contains(*id))
        .map(String::as_str)
        .collect()
}
