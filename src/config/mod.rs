//! Tool configuration.
//!
//! An optional `.dephealth.yml` at the repository root tunes the scan:
//! cache TTL, ecosystems to skip, and extra directories the import
//! cross-referencer prunes. A missing file means defaults; a malformed
//! file is an error — unlike the scanned repository's manifests, our own
//! config is not fail-open.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DepHealthError, Result};

/// Config file name probed at the repository root.
pub const CONFIG_FILE: &str = ".dephealth.yml";

/// Scan configuration loaded from `.dephealth.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Cache TTL as a humane duration string ("90s", "5m", "1h").
    #[serde(default)]
    pub ttl: Option<String>,

    /// Ecosystem identifiers to skip entirely.
    #[serde(default)]
    pub skip: Vec<String>,

    /// Extra directory names excluded from import cross-referencing.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl ScanConfig {
    /// Load configuration for a repository root.
    ///
    /// Returns defaults when no config file exists.
    pub fn load(repo_root: &Path) -> Result<Self> {
        let path = repo_root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content).map_err(|e| DepHealthError::ConfigParseError {
            path,
            message: e.to_string(),
        })
    }
}
