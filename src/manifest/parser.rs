//! Manifest file parser - reads and validates TOML manifests

use anyhow::{bail, Context, Result};
use std::path::Path;

use super::schema::{validate, ManifestFile};

/// Read, parse, and validate a manifest file.
pub fn parse_manifest(path: &Path) -> Result<ManifestFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest file: {}", path.display()))?;

    parse_manifest_content(&content)
}

/// Parse manifest content (for testing without the file system).
pub fn parse_manifest_content(content: &str) -> Result<ManifestFile> {
    let manifest: ManifestFile =
        toml::from_str(content).context("Failed to parse manifest TOML")?;

    if let Err(errors) = validate(&manifest) {
        let error_messages: Vec<_> = errors.iter().map(|e| e.to_string()).collect();
        bail!("Validation errors:\n  - {}", error_messages.join("\n  - "));
    }

    tracing::debug!(stages = manifest.stages.len(), "manifest parsed");

    Ok(manifest)
}
