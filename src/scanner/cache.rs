//! Scan result caching and staleness detection.
//!
//! This module provides the [`ScanCache`] that holds the last computed
//! [`DependencyReport`] together with the manifest modification times
//! observed when it was built, and the [`CacheState`] enum describing
//! whether that report may be served as-is.
//!
//! The cache has two states. `Fresh` means the report is returned without
//! re-running any parser or detector — the TTL is a ceiling, never a
//! trigger for eager refresh. `Stale` carries the reason a rescan is
//! required: no prior scan, TTL elapsed, a watched manifest changed, or an
//! explicit invalidation.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};

use crate::error::{DepHealthError, Result};
use crate::report::DependencyReport;

/// Default time-to-live for a cached report.
pub const DEFAULT_TTL_SECONDS: i64 = 60;

/// Whether the cached report may be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheState {
    /// Cached report is valid; serve it without rescanning.
    Fresh,
    /// A full scan is required.
    Stale(StaleReason),
}

/// Why the cache cannot be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaleReason {
    /// No scan has completed yet.
    NeverScanned,
    /// The TTL window elapsed since the last scan.
    TtlElapsed,
    /// A watched manifest was added, removed, or modified.
    ManifestChanged { file: String },
    /// `invalidate()` was called.
    Invalidated,
}

/// The last completed report plus the manifest mtimes observed at scan time.
///
/// Replaced atomically as one unit on each rescan; never partially updated.
#[derive(Debug, Clone)]
pub struct ScanCacheEntry {
    report: DependencyReport,
    scanned_at: DateTime<Utc>,
    manifest_mtimes: HashMap<String, DateTime<Utc>>,
}

/// In-memory scan cache, one per engine instance per repository root.
#[derive(Debug)]
pub struct ScanCache {
    ttl: Duration,
    entry: Option<ScanCacheEntry>,
    invalidated: bool,
}

impl ScanCache {
    /// Create an empty cache with the default TTL. Initial state is stale.
    pub fn new() -> Self {
        Self::with_ttl(Duration::seconds(DEFAULT_TTL_SECONDS))
    }

    /// Create an empty cache with a specific TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: None,
            invalidated: false,
        }
    }

    /// The configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Determine whether the cached report may be served.
    ///
    /// `watched` is the set of manifest/lock file names to compare against
    /// the mtimes recorded at the last scan.
    pub fn state(&self, repo_root: &Path, watched: &[&str]) -> CacheState {
        if self.invalidated {
            return CacheState::Stale(StaleReason::Invalidated);
        }
        let Some(entry) = &self.entry else {
            return CacheState::Stale(StaleReason::NeverScanned);
        };
        if Utc::now().signed_duration_since(entry.scanned_at) > self.ttl {
            return CacheState::Stale(StaleReason::TtlElapsed);
        }

        let current = collect_mtimes(repo_root, watched);
        // Any added, removed, or touched manifest forces a rescan
        for file in watched {
            match (entry.manifest_mtimes.get(*file), current.get(*file)) {
                (Some(recorded), Some(now)) if recorded == now => {}
                (None, None) => {}
                _ => {
                    return CacheState::Stale(StaleReason::ManifestChanged {
                        file: file.to_string(),
                    });
                }
            }
        }

        CacheState::Fresh
    }

    /// The cached report, if a scan has completed.
    pub fn report(&self) -> Option<&DependencyReport> {
        self.entry.as_ref().map(|e| &e.report)
    }

    /// Record a completed scan: the report and the current manifest mtimes
    /// are stored together as one atomic replacement.
    pub fn store(&mut self, repo_root: &Path, watched: &[&str], report: DependencyReport) {
        self.entry = Some(ScanCacheEntry {
            report,
            scanned_at: Utc::now(),
            manifest_mtimes: collect_mtimes(repo_root, watched),
        });
        self.invalidated = false;
    }

    /// Force the cache stale regardless of TTL or mtimes.
    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }
}

impl Default for ScanCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect the modification times of the watched files that exist.
fn collect_mtimes(repo_root: &Path, watched: &[&str]) -> HashMap<String, DateTime<Utc>> {
    let mut mtimes = HashMap::new();
    for file in watched {
        let path = repo_root.join(file);
        if let Some(mtime) = file_mtime(&path) {
            mtimes.insert(file.to_string(), mtime);
        }
    }
    mtimes
}

fn file_mtime(path: &Path) -> Option<DateTime<Utc>> {
    fs::metadata(path)
        .ok()
        .and_then(|m| m.modified().ok())
        .map(DateTime::from)
}

/// Parse a TTL string like "90s", "5m", "2h", "1d", or bare seconds.
pub fn parse_ttl(ttl: &str) -> Result<Duration> {
    let ttl = ttl.trim().to_lowercase();
    let invalid = || DepHealthError::InvalidDuration { value: ttl.clone() };

    if let Some(days) = ttl.strip_suffix('d') {
        let n: i64 = days.parse().map_err(|_| invalid())?;
        Ok(Duration::days(n))
    } else if let Some(hours) = ttl.strip_suffix('h') {
        let n: i64 = hours.parse().map_err(|_| invalid())?;
        Ok(Duration::hours(n))
    } else if let Some(mins) = ttl.strip_suffix('m') {
        let n: i64 = mins.parse().map_err(|_| invalid())?;
        Ok(Duration::minutes(n))
    } else if let Some(secs) = ttl.strip_suffix('s') {
        let n: i64 = secs.parse().map_err(|_| invalid())?;
        Ok(Duration::seconds(n))
    } else {
        // Assume seconds if no suffix
        let n: i64 = ttl.parse().map_err(|_| invalid())?;
        Ok(Duration::seconds(n))
    }
}

/// Format a duration for display.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.num_seconds();

    if secs >= 86400 {
        format!("{}d", secs / 86400)
    } else if secs >= 3600 {
        format!("{}h", secs / 3600)
    } else if secs >= 60 {
        format!("{}m", secs / 60)
    } else {
        format!("{}s", secs)
    }
}
