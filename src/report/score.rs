//! Workspace health scoring.
//!
//! The score is a pure function of the report's raw findings: start at
//! 100, apply a linear deduction per finding, clamp once at the end.
//! It can always be re-derived from the counts in the report.

use super::{DependencyReport, Severity};

/// Deduction for a critical missing package.
const CRITICAL_MISSING_PENALTY: i32 = 15;
/// Deduction for a warning- or info-level missing package.
const MISSING_PENALTY: i32 = 5;
/// Deduction per outdated package.
const OUTDATED_PENALTY: i32 = 2;
/// Deduction per version conflict.
const CONFLICT_PENALTY: i32 = 10;

/// Compute the 0–100 health score for a report's findings.
///
/// The `health_score` field of `report` itself is ignored; only the
/// finding lists matter.
pub fn health_score(report: &DependencyReport) -> i32 {
    let mut score = 100;

    for pkg in &report.missing {
        score -= if pkg.severity == Severity::Critical {
            CRITICAL_MISSING_PENALTY
        } else {
            MISSING_PENALTY
        };
    }

    score -= report.outdated.len() as i32 * OUTDATED_PENALTY;
    score -= report.conflicts.len() as i32 * CONFLICT_PENALTY;

    score.clamp(0, 100)
}
