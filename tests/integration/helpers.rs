//! Shared test helpers for completeness-gate integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use muster::manifest::parse_manifest;
use muster::models::Run;
use muster::report::{exit_code, render_text};
use muster::runner::execute_run;

/// Test helper: create a workspace populated with the given files.
///
/// Paths are relative to the workspace root; parent directories are created
/// as needed. Every file gets a small non-empty body.
pub fn workspace_with_files(files: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    for file in files {
        let path = temp_dir.path().join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, "content\n").expect("Failed to write file");
    }
    temp_dir
}

/// Test helper: write a manifest file into the workspace root.
pub fn write_manifest(root: &Path, content: &str) -> PathBuf {
    let manifest_path = root.join("muster.toml");
    fs::write(&manifest_path, content).expect("Failed to write manifest");
    manifest_path
}

/// Test helper: run the full check pipeline and capture its output.
///
/// Returns the evaluated run, the rendered plain-text report, and the exit
/// code that `muster check` would produce.
pub fn check_workspace(manifest_path: &Path, root: &Path) -> (Run, String, i32) {
    colored::control::set_override(false);

    let manifest = parse_manifest(manifest_path).expect("Manifest should parse");
    let mut run = Run::from_manifest(&manifest);
    execute_run(&mut run, root);

    let mut buf = Vec::new();
    render_text(&run, &mut buf).expect("Render should succeed");
    let output = String::from_utf8(buf).expect("Report should be UTF-8");
    let code = exit_code(&run);

    (run, output, code)
}
