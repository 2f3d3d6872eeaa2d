//! Validate command - parse and validate a manifest without probing targets

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::manifest::parse_manifest;

/// Execute the validate command.
pub fn execute(manifest_path: &Path) -> Result<()> {
    let manifest = parse_manifest(manifest_path)?;

    let check_count: usize = manifest.stages.iter().map(|s| s.checks.len()).sum();
    println!(
        "{} Manifest is valid: {} stage(s), {} check(s)",
        "✓".green(),
        manifest.stages.len(),
        check_count
    );

    Ok(())
}
