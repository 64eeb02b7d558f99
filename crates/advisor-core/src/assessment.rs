use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative convergence judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Likelihood {
    High,
    Medium,
    Low,
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Likelihood::High => "High",
            Likelihood::Medium => "Medium",
            Likelihood::Low => "Low",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallLikelihood {
    pub level: Likelihood,
    /// One-line justification for the level.
    pub reason: String,
}

/// The structured assessment returned by the service.
///
/// All four fields are required by the response schema; deserialization
/// fails rather than producing a partially-initialized value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub overall_likelihood: OverallLikelihood,
    pub potential_issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub quick_checklist: Vec<String>,
}
