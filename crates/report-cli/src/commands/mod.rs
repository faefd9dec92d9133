//! Command implementations for report-cli

pub mod check;
pub mod dataset;
pub mod extract;
pub mod preprocess;
pub mod profiles;

pub use check::run_check;
pub use dataset::run_dataset;
pub use extract::run_extract;
pub use preprocess::run_preprocess;
pub use profiles::run_profiles;

use report_config::{ProfileRegistry, ReportConfig, load_config};

use crate::cli::ConfigSource;
use crate::error::Result;

/// Profile used when neither a config file nor a profile is given.
pub const DEFAULT_PROFILE: &str = "ultrasound";

/// Load the config named by `--config`, or the `--profile` built-in.
pub fn resolve_config(source: &ConfigSource) -> Result<ReportConfig> {
    if let Some(path) = &source.config {
        return Ok(load_config(path)?);
    }

    let name = source.profile.as_deref().unwrap_or(DEFAULT_PROFILE);
    let registry = ProfileRegistry::with_builtins();
    let config = registry.get(name)?.clone();
    tracing::debug!(profile = name, "using built-in profile");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_profile_is_ultrasound() {
        let config = resolve_config(&ConfigSource {
            config: None,
            profile: None,
        })
        .unwrap();
        assert_eq!(config.extraction.excluded_files, vec!["132 U.txt"]);
    }

    #[test]
    fn test_unknown_profile_is_error() {
        let result = resolve_config(&ConfigSource {
            config: None,
            profile: Some("pathology".to_string()),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let result = resolve_config(&ConfigSource {
            config: Some(PathBuf::from("/nonexistent/extraction.toml")),
            profile: None,
        });
        assert!(result.is_err());
    }
}
