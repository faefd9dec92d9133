//! JSON-lines dataset records.
//!
//! The classifier dataset is one JSON object per line:
//!
//! ```text
//! {"id":"132 U","text":"RENSEIGNEMENT CLINIQUE ...","label":1,"features":[]}
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{Error, Result, io};

/// One labelled report body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub id: String,
    pub text: String,
    pub label: i64,
    #[serde(default)]
    pub features: Vec<f64>,
}

impl DatasetRecord {
    /// A record with no extra features.
    pub fn new(id: impl Into<String>, text: impl Into<String>, label: i64) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            label,
            features: Vec::new(),
        }
    }
}

/// Read every record of a JSON-lines file. Blank lines are skipped.
pub fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut records = Vec::new();

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| Error::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|source| Error::JsonLine {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Serialize records as JSON lines.
pub fn to_jsonl<T: Serialize>(records: &[T]) -> serde_json::Result<String> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}

/// Write records to a JSON-lines file atomically, replacing it.
pub fn write_jsonl<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let content = to_jsonl(records).map_err(|source| Error::JsonLine {
        path: path.to_path_buf(),
        line: 0,
        source,
    })?;
    io::write_atomic(path, content.as_bytes())
}
