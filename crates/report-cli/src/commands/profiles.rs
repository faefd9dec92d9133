//! Profiles command implementation

use std::collections::BTreeMap;

use colored::Colorize;

use report_config::{ProfileRegistry, ReportConfig};

use super::DEFAULT_PROFILE;
use crate::error::Result;

/// Run the profiles command
pub fn run_profiles(json: bool) -> Result<()> {
    let registry = ProfileRegistry::with_builtins();

    if json {
        let profiles: BTreeMap<&str, &ReportConfig> = registry.iter().collect();
        println!("{}", serde_json::to_string_pretty(&profiles)?);
        return Ok(());
    }

    println!("{}", "Built-in Profiles".bold());
    println!();

    for (name, config) in registry.iter() {
        let default = if name == DEFAULT_PROFILE {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        let extraction = &config.extraction;
        println!("  {}{}", name.green(), default);
        println!(
            "    {} interior pairs, {} line patterns, {} excluded files",
            extraction.body_between_start_markers.len(),
            extraction.patterns_to_remove.len(),
            extraction.excluded_files.len()
        );
    }

    println!();
    println!(
        "{} {} profiles available. Use {} to select one.",
        "Total:".dimmed(),
        registry.len(),
        "reports extract --profile <name>".cyan()
    );

    Ok(())
}
