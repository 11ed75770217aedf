//! The dependency scanning engine.
//!
//! [`DependencyScanner`] ties the pipeline together: cache freshness check,
//! per-ecosystem manifest parsing, install detection, import
//! cross-referencing, scoring, and the atomic cache swap. One scanner is
//! constructed per repository root; multiple roots scan independently.
//!
//! The engine is synchronous: a report request either returns the cached
//! value or performs the full scan inline. Embedders in concurrent hosts
//! serialize access per root so at most one scan is in flight at a time.

pub mod cache;

pub use cache::{format_duration, parse_ttl, CacheState, ScanCache, StaleReason};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::Duration;
use tracing::debug;

use crate::crossref::ImportCrossReferencer;
use crate::ecosystem::EcosystemRegistry;
use crate::report::{health_score, DependencyReport, MissingPackage};

/// Workspace dependency scanner for one repository root.
pub struct DependencyScanner {
    repo_root: PathBuf,
    registry: EcosystemRegistry,
    referencer: ImportCrossReferencer,
    cache: ScanCache,
    skip: HashSet<String>,
}

impl std::fmt::Debug for DependencyScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependencyScanner")
            .field("repo_root", &self.repo_root)
            .field("skip", &self.skip)
            .finish_non_exhaustive()
    }
}

impl DependencyScanner {
    /// Create a scanner with default TTL and all built-in ecosystems.
    pub fn new(repo_root: &Path) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
            registry: EcosystemRegistry::new(),
            referencer: ImportCrossReferencer::new(),
            cache: ScanCache::new(),
            skip: HashSet::new(),
        }
    }

    /// Override the cache TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.cache = ScanCache::with_ttl(ttl);
        self
    }

    /// Skip the named ecosystems entirely.
    pub fn with_skipped_ecosystems(mut self, skip: &[String]) -> Self {
        self.skip = skip.iter().cloned().collect();
        self
    }

    /// Add extra directory names the cross-referencer prunes.
    pub fn with_excluded_dirs(mut self, exclude: &[String]) -> Self {
        self.referencer = ImportCrossReferencer::new().with_excludes(exclude);
        self
    }

    /// The repository root this scanner watches.
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// The ecosystem registry backing this scanner.
    pub fn registry(&self) -> &EcosystemRegistry {
        &self.registry
    }

    /// Get the dependency report, scanning only if the cache is stale.
    pub fn report(&mut self) -> DependencyReport {
        let watched = self.registry.watched_files();
        match self.cache.state(&self.repo_root, &watched) {
            CacheState::Fresh => {
                debug!("serving cached dependency report");
                // store() always precedes Fresh, so the entry exists
                self.cache
                    .report()
                    .cloned()
                    .unwrap_or_else(DependencyReport::empty)
            }
            CacheState::Stale(reason) => {
                debug!(?reason, "cache stale, running full scan");
                self.run_scan(&watched)
            }
        }
    }

    /// Convenience accessor: only the missing packages.
    pub fn missing_packages(&mut self) -> Vec<MissingPackage> {
        self.report().missing
    }

    /// Force the next report request to rescan.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// Generate ready-to-run install commands for all missing packages,
    /// batched per ecosystem where the installer supports it.
    pub fn suggest_install_commands(&mut self) -> Vec<String> {
        let report = self.report();
        let mut commands = Vec::new();

        for scanner in self.registry.scanners() {
            let profile = scanner.profile();
            let names: Vec<String> = report
                .missing
                .iter()
                .filter(|p| p.ecosystem == profile.name)
                .map(|p| p.name.clone())
                .collect();
            if names.is_empty() {
                continue;
            }
            if profile.batch_install {
                commands.push(profile.render_batch_install(&names));
            } else {
                commands.extend(names.iter().map(|n| profile.render_install(n)));
            }
        }

        commands
    }

    /// Run the full pipeline and atomically replace the cache entry.
    fn run_scan(&mut self, watched: &[&str]) -> DependencyReport {
        let mut missing: Vec<MissingPackage> = Vec::new();

        for scanner in self.registry.scanners() {
            let profile = scanner.profile();
            if self.skip.contains(profile.name) {
                debug!(ecosystem = profile.name, "ecosystem skipped by configuration");
                continue;
            }
            // Ecosystems with no manifest are skipped, not reported as all-missing
            if !scanner.is_present(&self.repo_root) {
                continue;
            }

            let declared = scanner.parse_manifests(&self.repo_root);
            let mut absent = 0;
            for package in &declared {
                if scanner.is_installed(&self.repo_root, package) {
                    continue;
                }
                absent += 1;
                // Internal severity derivation; the string form is the
                // construction-time contract
                match MissingPackage::new(
                    package.name.clone(),
                    profile.name,
                    profile.render_install(&package.name),
                    package.manifest.clone(),
                    "warning",
                ) {
                    Ok(finding) => missing.push(finding),
                    Err(err) => debug!(%err, package = %package.name, "dropping finding"),
                }
            }
            debug!(
                ecosystem = profile.name,
                declared = declared.len(),
                missing = absent,
                "ecosystem scanned"
            );
        }

        // Escalate packages that are actually imported in source
        if !missing.is_empty() {
            let referenced = self.referencer.referenced_packages(&self.repo_root);
            self.referencer.escalate(&mut missing, &referenced);
        }

        let mut report = DependencyReport {
            missing,
            outdated: Vec::new(),
            unused: Vec::new(),
            conflicts: Vec::new(),
            health_score: 0,
        };
        report.health_score = health_score(&report);

        self.cache.store(&self.repo_root, watched, report.clone());
        report
    }
}
