//! Dependency report data model.
//!
//! The types here form the engine's output surface: findings
//! ([`MissingPackage`], [`OutdatedPackage`], [`Conflict`]) and the
//! aggregate [`DependencyReport`]. Every field is a primitive, string, or
//! list thereof, so a report serializes directly to JSON.

pub mod score;

pub use score::health_score;

use serde::{Deserialize, Serialize};

use crate::error::{DepHealthError, Result};

/// Severity of a missing-package finding.
///
/// Ordered so that escalation is a `max`: `Info < Warning < Critical`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    /// Parse a severity string.
    ///
    /// Exactly `critical`, `warning`, and `info` are valid; anything else
    /// fails with [`DepHealthError::InvalidSeverity`].
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "critical" => Ok(Self::Critical),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            other => Err(DepHealthError::InvalidSeverity {
                value: other.to_string(),
            }),
        }
    }

    /// The canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared package with no installation evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingPackage {
    pub name: String,
    pub ecosystem: String,
    /// Fully rendered, ready to execute.
    pub install_command: String,
    /// Manifest file the declaration was read from.
    pub detected_from: String,
    pub severity: Severity,
}

impl MissingPackage {
    /// Construct a missing-package finding.
    ///
    /// The severity is validated at construction time; a string outside
    /// {critical, warning, info} fails with `InvalidSeverity`.
    pub fn new(
        name: impl Into<String>,
        ecosystem: impl Into<String>,
        install_command: impl Into<String>,
        detected_from: impl Into<String>,
        severity: &str,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            ecosystem: ecosystem.into(),
            install_command: install_command.into(),
            detected_from: detected_from.into(),
            severity: Severity::parse(severity)?,
        })
    }

    /// Escalate to critical. One-directional: never demotes, and
    /// re-escalating an already-critical finding is a no-op.
    pub fn escalate(&mut self) {
        self.severity = self.severity.max(Severity::Critical);
    }
}

/// A package installed at an older version than the latest known release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutdatedPackage {
    pub name: String,
    pub ecosystem: String,
    pub current_version: String,
    pub latest_version: String,
    pub update_command: String,
}

impl OutdatedPackage {
    /// Best-effort check for a major-version jump.
    ///
    /// Compares the leading numeric component of each version after
    /// stripping range/prefix characters. If either side has no parseable
    /// leading integer the answer is `false`, never an error.
    pub fn is_major_update(&self) -> bool {
        match (
            leading_major(&self.current_version),
            leading_major(&self.latest_version),
        ) {
            (Some(current), Some(latest)) => latest > current,
            _ => false,
        }
    }
}

/// Parse the leading major-version integer of a version string.
///
/// Strips leading `v`, `^`, `~`, `=`, `>`, `<`, and whitespace, then reads
/// digits up to the first non-digit.
fn leading_major(version: &str) -> Option<u64> {
    let trimmed = version.trim_start_matches(['v', '^', '~', '=', '>', '<', ' ']);
    let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Two requesters pinning incompatible versions of the same package.
///
/// No producing algorithm is currently wired up; the type is part of the
/// report surface so a future resolver can populate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub package: String,
    /// Requesting package names.
    pub required_by: Vec<String>,
    /// Version strings, one per requester.
    pub conflicting_versions: Vec<String>,
    /// Free text; may be empty.
    pub resolution_hint: String,
}

/// The complete result of one workspace scan.
///
/// Immutable once constructed; superseded wholesale by the next scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyReport {
    pub missing: Vec<MissingPackage>,
    pub outdated: Vec<OutdatedPackage>,
    /// Declared but never referenced from source. Reserved; currently
    /// always empty.
    pub unused: Vec<String>,
    pub conflicts: Vec<Conflict>,
    /// Always within 0..=100.
    pub health_score: i32,
}

impl DependencyReport {
    /// An empty report with a perfect score.
    pub fn empty() -> Self {
        Self {
            missing: Vec::new(),
            outdated: Vec::new(),
            unused: Vec::new(),
            conflicts: Vec::new(),
            health_score: 100,
        }
    }

    /// Number of critical missing packages.
    pub fn critical_count(&self) -> usize {
        self.missing
            .iter()
            .filter(|p| p.severity == Severity::Critical)
            .count()
    }

    /// Number of non-critical missing packages.
    pub fn warning_count(&self) -> usize {
        self.missing.len() - self.critical_count()
    }

    /// Whether any missing package is critical.
    pub fn has_critical(&self) -> bool {
        self.missing
            .iter()
            .any(|p| p.severity == Severity::Critical)
    }
}
