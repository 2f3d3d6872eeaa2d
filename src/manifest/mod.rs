//! Manifest parsing and schema validation
//!
//! This module handles:
//! - Parsing TOML manifest files
//! - Validating stage and check definitions before any evaluation

pub mod parser;
pub mod schema;

// Re-export commonly used types
pub use parser::{parse_manifest, parse_manifest_content};
pub use schema::{validate, CheckDefinition, ManifestFile, StageDefinition, ValidationError};
