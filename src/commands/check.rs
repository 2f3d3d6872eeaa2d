//! Check command - evaluate a manifest against the filesystem

use anyhow::Result;
use std::io::stdout;
use std::path::Path;

use crate::manifest::parse_manifest;
use crate::models::Run;
use crate::report::{exit_code, render_json, render_text};
use crate::runner::execute_run;

/// Execute the check command and return the process exit code.
///
/// The manifest is parsed and validated before any probing; a malformed
/// manifest aborts here as a configuration error, never as a check failure.
pub fn execute(manifest_path: &Path, root: &Path, json: bool) -> Result<i32> {
    let manifest = parse_manifest(manifest_path)?;

    let mut run = Run::from_manifest(&manifest);
    execute_run(&mut run, root);

    let mut out = stdout();
    if json {
        render_json(&run, &mut out)?;
    } else {
        render_text(&run, &mut out)?;
    }

    Ok(exit_code(&run))
}
