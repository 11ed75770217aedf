//! Ecosystem scanning: manifest parsing and install detection.
//!
//! This module provides:
//! - [`EcosystemScanner`] trait implemented once per ecosystem
//! - [`EcosystemRegistry`] holding the fixed table of scanners
//! - [`DeclaredPackage`] produced by manifest parsing
//! - Name normalization shared by detectors and the cross-referencer
//!
//! Parsing is fail-open: a manifest that does not exist or does not parse
//! contributes zero declared packages, and the scan continues with the
//! other manifests and ecosystems.

pub mod cargo;
pub mod go;
pub mod npm;
pub mod profile;
pub mod python;
pub mod ruby;

pub use profile::{EcosystemProfile, BUILTIN_PROFILES};

use std::path::Path;

/// A dependency declared in a manifest file.
///
/// Produced transiently by manifest parsing; not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredPackage {
    /// Package name as written in the manifest.
    pub name: String,
    /// Version constraint, if the manifest carries one.
    pub constraint: Option<String>,
    /// Ecosystem identifier (e.g., "npm").
    pub ecosystem: &'static str,
    /// Manifest file the declaration was read from (relative to the root).
    pub manifest: String,
}

/// Per-ecosystem scanning interface.
///
/// New ecosystems are added by implementing this trait and registering the
/// implementation in [`EcosystemRegistry::new`], not by branching in the
/// engine.
pub trait EcosystemScanner {
    /// The static profile for this ecosystem.
    fn profile(&self) -> &EcosystemProfile;

    /// Parse all of this ecosystem's manifest files under `repo_root`.
    ///
    /// Returns the declared packages in manifest order, or an empty list
    /// if no manifest exists or none parse.
    fn parse_manifests(&self, repo_root: &Path) -> Vec<DeclaredPackage>;

    /// Whether a declared package has installation evidence under `repo_root`.
    fn is_installed(&self, repo_root: &Path, package: &DeclaredPackage) -> bool;

    /// Whether any of this ecosystem's manifest files exist under `repo_root`.
    fn is_present(&self, repo_root: &Path) -> bool {
        self.profile()
            .manifest_files
            .iter()
            .any(|f| repo_root.join(f).exists())
    }
}

/// The fixed table of ecosystem scanners.
pub struct EcosystemRegistry {
    scanners: Vec<Box<dyn EcosystemScanner>>,
}

impl EcosystemRegistry {
    /// Create a registry with all built-in ecosystems.
    pub fn new() -> Self {
        Self {
            scanners: vec![
                Box::new(npm::NpmScanner::new()),
                Box::new(python::PythonScanner::new()),
                Box::new(go::GoScanner::new()),
                Box::new(cargo::CargoScanner::new()),
                Box::new(ruby::RubyScanner::new()),
            ],
        }
    }

    /// All registered scanners, in registration order.
    pub fn scanners(&self) -> impl Iterator<Item = &dyn EcosystemScanner> {
        self.scanners.iter().map(|s| s.as_ref())
    }

    /// Look up a scanner by ecosystem identifier.
    pub fn get(&self, name: &str) -> Option<&dyn EcosystemScanner> {
        self.scanners
            .iter()
            .find(|s| s.profile().name == name)
            .map(|s| s.as_ref())
    }

    /// All registered ecosystem identifiers.
    pub fn known_names(&self) -> Vec<&'static str> {
        self.scanners.iter().map(|s| s.profile().name).collect()
    }

    /// Union of every ecosystem's manifest and lock file names.
    ///
    /// These are the files the scan cache watches for staleness.
    pub fn watched_files(&self) -> Vec<&'static str> {
        let mut files = Vec::new();
        for scanner in &self.scanners {
            let profile = scanner.profile();
            for name in profile.manifest_files.iter().chain(profile.lock_files) {
                if !files.contains(name) {
                    files.push(*name);
                }
            }
        }
        files
    }
}

impl Default for EcosystemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a package name for cross-ecosystem comparison.
///
/// Lowercases and treats `-`, `_`, and `.` as the same separator, so
/// `Typing-Extensions`, `typing_extensions`, and `typing.extensions`
/// all compare equal.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == '.' { '-' } else { c })
        .collect()
}

/// Split a dependency specifier into name and constraint.
///
/// The name is the substring before the first constraint operator among
/// `<`, `>`, `=`, `!`, `~`, `^`; the constraint is the rest. A specifier
/// without an operator is all name. Extras brackets (`package[extra]`)
/// are stripped from the name.
pub fn split_specifier(spec: &str) -> (String, Option<String>) {
    let spec = spec.trim();
    let operator = spec.find(['<', '>', '=', '!', '~', '^']);

    let (raw_name, constraint) = match operator {
        Some(idx) => (&spec[..idx], Some(spec[idx..].trim().to_string())),
        None => (spec, None),
    };

    // "package[extras]" declares "package"
    let name = match raw_name.find('[') {
        Some(idx) => &raw_name[..idx],
        None => raw_name,
    };

    (name.trim().to_string(), constraint)
}
