//! [`TestCorpus`] builder for on-disk report folders.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixture;

/// A temporary directory holding report text files and any other inputs a
/// test needs (configs, label maps, datasets).
///
/// # Example
///
/// ```rust,no_run
/// use report_test_utils::TestCorpus;
///
/// let corpus = TestCorpus::new();
/// corpus.add_sample_report("1 U.txt");
/// corpus.assert_file_exists("reports/1 U.txt");
/// ```
pub struct TestCorpus {
    temp_dir: TempDir,
}

impl Default for TestCorpus {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCorpus {
    /// Create an empty temporary directory with a `reports/` folder.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("reports")).unwrap();
        Self { temp_dir }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Return the `reports/` folder.
    pub fn reports_dir(&self) -> PathBuf {
        self.root().join("reports")
    }

    /// Write a report file under `reports/`.
    pub fn add_report(&self, name: &str, content: &str) -> PathBuf {
        let path = self.reports_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Write the sample ultrasound report under `reports/`.
    pub fn add_sample_report(&self, name: &str) -> PathBuf {
        self.add_report(name, &fixture::sample_report_text())
    }

    /// Write an arbitrary file relative to the root, creating parents.
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Read a file relative to the root.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_file(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
