//! CLI command implementations.

pub mod commands;
pub mod completions;
pub mod dispatcher;
pub mod ecosystems;
pub mod scan;
pub mod status;

use std::path::Path;

use crate::config::ScanConfig;
use crate::ecosystem::EcosystemRegistry;
use crate::error::{DepHealthError, Result};
use crate::scanner::{parse_ttl, DependencyScanner};

/// Build a scanner for a repository root, layering config-file values
/// under CLI overrides.
pub fn build_scanner(
    repo_root: &Path,
    cli_ttl: &Option<String>,
    cli_skip: &[String],
) -> Result<DependencyScanner> {
    let config = ScanConfig::load(repo_root)?;

    let mut scanner = DependencyScanner::new(repo_root);

    let ttl = cli_ttl.as_deref().or(config.ttl.as_deref());
    if let Some(ttl) = ttl {
        scanner = scanner.with_ttl(parse_ttl(ttl)?);
    }

    let mut skip = config.skip.clone();
    skip.extend(cli_skip.iter().cloned());
    if !skip.is_empty() {
        let registry = EcosystemRegistry::new();
        for name in &skip {
            if registry.get(name).is_none() {
                return Err(DepHealthError::UnknownEcosystem { name: name.clone() });
            }
        }
        scanner = scanner.with_skipped_ecosystems(&skip);
    }

    if !config.exclude.is_empty() {
        scanner = scanner.with_excluded_dirs(&config.exclude);
    }

    Ok(scanner)
}
