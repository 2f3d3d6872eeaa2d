//! Stage evaluation and run aggregation

use std::path::Path;

use crate::models::{Run, Stage, Verdict};
use crate::probe::{probe, resolve_target};

/// Evaluate every check in a stage, in declared order.
///
/// There is no short-circuiting: a failing check does not stop later checks,
/// because the report must show the status of every artifact, not just the
/// first gap. Each check verdict is written exactly once.
pub fn evaluate_stage(stage: &mut Stage, root: &Path) {
    for check in &mut stage.checks {
        let target = resolve_target(root, &check.target_path);
        let exists = probe(&target);
        check.verdict = if exists { Verdict::Pass } else { Verdict::Fail };
        tracing::debug!(path = %target.display(), exists, "probed artifact");
    }
    stage.verdict = stage.derived_verdict();
}

/// Evaluate every stage of a run, in manifest order.
///
/// A failing early stage does not stop later stages from being evaluated;
/// completeness of the report matters more than early exit.
pub fn execute_run(run: &mut Run, root: &Path) {
    for stage in &mut run.stages {
        evaluate_stage(stage, root);
    }
    run.verdict = run.derived_verdict();
}
