use serde::{Deserialize, Serialize};

use super::check::{Check, Verdict};

/// A named, ordered group of checks representing one phase of a deliverable.
///
/// The stage verdict is derived, never set directly by a caller:
/// `Pass` iff every check passed. A stage with no checks trivially passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    pub checks: Vec<Check>,
    pub verdict: Verdict,
}

impl Stage {
    pub fn new(name: String, checks: Vec<Check>) -> Self {
        Self {
            name,
            checks,
            verdict: Verdict::Unevaluated,
        }
    }

    /// Derive the stage verdict from its check verdicts.
    pub fn derived_verdict(&self) -> Verdict {
        if self.checks.iter().all(|c| c.verdict.is_pass()) {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}
