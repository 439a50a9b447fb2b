use serde::Serialize;

use crate::classification::Classification;
use crate::finding::CheckResult;

#[derive(Debug, Serialize)]
pub struct ImpactCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub informational: usize,
}

/// Aggregate of one run's normalized results, ready for a driver to
/// serialize or render.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub unit: String,
    pub total_results: usize,
    pub results_by_impact: ImpactCounts,
    pub results: Vec<CheckResult>,
}

impl CheckReport {
    pub fn from_results(unit: impl Into<String>, results: Vec<CheckResult>) -> Self {
        let count = |impact: Classification| results.iter().filter(|r| r.impact == impact).count();
        let counts = ImpactCounts {
            high: count(Classification::High),
            medium: count(Classification::Medium),
            low: count(Classification::Low),
            informational: count(Classification::Informational),
        };
        let total = results.len();
        Self {
            unit: unit.into(),
            total_results: total,
            results_by_impact: counts,
            results,
        }
    }
}
