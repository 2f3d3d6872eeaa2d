//! Manifest TOML schema definitions and validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Manifest format version this binary understands.
pub const SUPPORTED_VERSION: u32 = 1;

/// Root structure of a manifest file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestFile {
    pub version: u32,
    /// Optional report headline.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "stage", default)]
    pub stages: Vec<StageDefinition>,
}

/// Stage definition from the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageDefinition {
    pub name: String,
    #[serde(rename = "check", default)]
    pub checks: Vec<CheckDefinition>,
}

/// Check definition from the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckDefinition {
    pub description: String,
    pub path: String,
}

/// Validation error with context
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Stage '{stage}': {message}")]
    Stage { stage: String, message: String },
    #[error("{message}")]
    Manifest { message: String },
}

/// Validate a manifest before evaluation.
///
/// A malformed manifest is a configuration error, rejected eagerly with the
/// full list of violations; it is never folded into a check failure. An empty
/// stage list and stages without checks are legal (they trivially pass).
pub fn validate(manifest: &ManifestFile) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if manifest.version != SUPPORTED_VERSION {
        errors.push(ValidationError::Manifest {
            message: format!(
                "Unsupported version: {}. Only version {SUPPORTED_VERSION} is supported.",
                manifest.version
            ),
        });
    }

    for (idx, stage) in manifest.stages.iter().enumerate() {
        // Unnamed stages are reported by position
        let stage_label = if stage.name.trim().is_empty() {
            format!("#{}", idx + 1)
        } else {
            stage.name.clone()
        };

        if stage.name.trim().is_empty() {
            errors.push(ValidationError::Stage {
                stage: stage_label.clone(),
                message: "Stage name cannot be empty".to_string(),
            });
        }

        for (check_idx, check) in stage.checks.iter().enumerate() {
            if check.description.trim().is_empty() {
                errors.push(ValidationError::Stage {
                    stage: stage_label.clone(),
                    message: format!("Check #{}: description cannot be empty", check_idx + 1),
                });
            }
            if check.path.trim().is_empty() {
                errors.push(ValidationError::Stage {
                    stage: stage_label.clone(),
                    message: format!("Check #{}: path cannot be empty", check_idx + 1),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
