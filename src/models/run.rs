use serde::{Deserialize, Serialize};

use super::check::{Check, Verdict};
use super::stage::Stage;
use crate::manifest::schema::ManifestFile;

/// Report headline used when the manifest does not set one.
pub const DEFAULT_TITLE: &str = "Deliverable Validation";

/// One full evaluation of a manifest.
///
/// Created fresh per invocation with every verdict `Unevaluated`, evaluated
/// once, rendered, then discarded. Nothing is persisted across invocations.
/// The run verdict is `Pass` iff every stage passed; a run with no stages
/// trivially passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub title: String,
    pub stages: Vec<Stage>,
    pub verdict: Verdict,
}

/// Aggregate counts for a run, included in the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub stages_total: usize,
    pub stages_passed: usize,
    pub stages_failed: usize,
    pub checks_total: usize,
    pub checks_passed: usize,
    pub checks_failed: usize,
}

impl Run {
    /// Instantiate an unevaluated run from a validated manifest.
    ///
    /// Stage and check order is carried over exactly as declared.
    pub fn from_manifest(manifest: &ManifestFile) -> Self {
        let stages = manifest
            .stages
            .iter()
            .map(|stage_def| {
                let checks = stage_def
                    .checks
                    .iter()
                    .map(|check_def| {
                        Check::new(check_def.description.clone(), check_def.path.clone())
                    })
                    .collect();
                Stage::new(stage_def.name.clone(), checks)
            })
            .collect();

        Self {
            title: manifest
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            stages,
            verdict: Verdict::Unevaluated,
        }
    }

    /// Derive the overall verdict from the stage verdicts.
    pub fn derived_verdict(&self) -> Verdict {
        if self.stages.iter().all(|s| s.verdict.is_pass()) {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }

    pub fn summary(&self) -> RunSummary {
        let checks = || self.stages.iter().flat_map(|s| s.checks.iter());
        RunSummary {
            stages_total: self.stages.len(),
            stages_passed: self.stages.iter().filter(|s| s.verdict.is_pass()).count(),
            stages_failed: self.stages.iter().filter(|s| !s.verdict.is_pass()).count(),
            checks_total: checks().count(),
            checks_passed: checks().filter(|c| c.verdict.is_pass()).count(),
            checks_failed: checks().filter(|c| !c.verdict.is_pass()).count(),
        }
    }
}
