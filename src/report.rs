//! Run report rendering and exit-code derivation
//!
//! The text layout is a compatibility surface: downstream tooling scrapes the
//! pass/fail markers, the `NOT FOUND` annotation, and the summary lines, so
//! the structure below must stay byte-stable. Color is applied to markers
//! only, through `colored`, which turns itself off when stdout is not a
//! terminal.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use crate::models::{Run, RunSummary, Stage, Verdict};

/// Width of the `=` banner lines.
const BANNER_WIDTH: usize = 60;

/// Final message on an all-pass run.
pub const ALL_PASSED_MESSAGE: &str = "ALL STAGES VALIDATED SUCCESSFULLY";

/// Final message when any check failed.
pub const FAILED_MESSAGE: &str = "VALIDATION FAILED - Some components missing";

fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Render the full text report for an evaluated run.
///
/// Output order matches manifest declaration order for both stage headers
/// and check lines.
pub fn render_text(run: &Run, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", banner())?;
    writeln!(out, "{}", run.title.bold())?;
    writeln!(out, "{}", banner())?;

    for stage in &run.stages {
        writeln!(out)?;
        writeln!(out, "=== {} ===", stage.name)?;
        for check in &stage.checks {
            if check.verdict.is_pass() {
                writeln!(
                    out,
                    "{} {}: {}",
                    "✓".green(),
                    check.description,
                    check.target_path
                )?;
            } else {
                writeln!(
                    out,
                    "{} {}: {} {}",
                    "✗".red(),
                    check.description,
                    check.target_path,
                    "NOT FOUND".red()
                )?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", banner())?;
    writeln!(out, "{}", "Validation Summary".bold())?;
    writeln!(out, "{}", banner())?;

    for stage in &run.stages {
        let status = if stage.verdict.is_pass() {
            format!("{} PASS", "✓".green())
        } else {
            format!("{} FAIL", "✗".red())
        };
        writeln!(out, "{}: {}", stage.name, status)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", banner())?;
    if run.verdict.is_pass() {
        writeln!(out, "{} {}", "✓".green(), ALL_PASSED_MESSAGE)?;
    } else {
        writeln!(out, "{} {}", "✗".red(), FAILED_MESSAGE)?;
    }
    writeln!(out, "{}", banner())?;

    Ok(())
}

/// Machine-readable report for the `--json` flag.
#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    verdict: Verdict,
    stages: &'a [Stage],
    summary: RunSummary,
}

/// Render the run as pretty-printed JSON.
pub fn render_json(run: &Run, out: &mut impl Write) -> Result<()> {
    let report = JsonReport {
        title: &run.title,
        verdict: run.verdict,
        stages: &run.stages,
        summary: run.summary(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// Derive the process exit code from the overall verdict.
///
/// The exit code is the sole outcome signal to an invoking process:
/// 0 iff the run passed, 1 otherwise.
pub fn exit_code(run: &Run) -> i32 {
    if run.verdict.is_pass() {
        0
    } else {
        1
    }
}
