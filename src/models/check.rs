use serde::{Deserialize, Serialize};

/// Outcome of evaluating a check, stage, or run.
///
/// Every entity starts as `Unevaluated` and transitions to `Pass` or `Fail`
/// exactly once, written by the component that owns it. There is no retry
/// path and no further transition out of a terminal verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Not yet evaluated; the initial state of every entity.
    Unevaluated,
    /// The artifact exists (or every member entity passed).
    Pass,
    /// The artifact is missing (or at least one member entity failed).
    Fail,
}

impl Verdict {
    pub fn is_pass(self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// One assertion that a named artifact exists at a path.
///
/// `description` and `target_path` come from the manifest and are never
/// modified. Duplicate checks are legal and evaluated independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub description: String,
    pub target_path: String,
    pub verdict: Verdict,
}

impl Check {
    pub fn new(description: String, target_path: String) -> Self {
        Self {
            description,
            target_path,
            verdict: Verdict::Unevaluated,
        }
    }
}
