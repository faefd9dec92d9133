//! Check command implementation

use std::path::Path;

use colored::Colorize;

use report_config::load_config;

use crate::error::Result;

/// Run the check command
///
/// Loading compiles every marker list and pattern, so any error a run would
/// hit on configuration surfaces here.
pub fn run_check(path: &Path) -> Result<()> {
    println!(
        "{} Checking {}...",
        "=>".blue().bold(),
        path.display()
    );

    let config = load_config(path)?;
    let extractor = config.extraction.compile()?;

    println!("{} Config is valid.", "OK".green().bold());
    println!("   {} {}", "begin:".dimmed(), extractor.begin());
    println!("   {} {}", "end:".dimmed(), extractor.end());
    println!(
        "   {} {} interior pairs, {} line patterns",
        "removes:".dimmed(),
        extractor.interior().len(),
        extractor.patterns().len()
    );
    if config.preprocessing.is_some() {
        println!("   {} enabled", "preprocessing:".dimmed());
    }

    Ok(())
}
