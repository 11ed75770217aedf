//! Rust ecosystem scanning.
//!
//! Declared crates come from `Cargo.toml` (`[dependencies]` and
//! `[dev-dependencies]`, both plain-string and table form); installation
//! evidence is the crate appearing in `Cargo.lock`'s resolved package
//! list.

use std::fs;
use std::path::Path;

use toml::Value;

use super::{DeclaredPackage, EcosystemProfile, EcosystemScanner, BUILTIN_PROFILES};

/// Scanner for the cargo ecosystem.
pub struct CargoScanner {
    profile: &'static EcosystemProfile,
}

impl CargoScanner {
    pub fn new() -> Self {
        Self {
            profile: &BUILTIN_PROFILES[3],
        }
    }

    fn collect_section(&self, data: &Value, section: &str, out: &mut Vec<DeclaredPackage>) {
        let Some(deps) = data.get(section).and_then(Value::as_table) else {
            return;
        };
        for (name, value) in deps {
            // "1.0" or { version = "1.0", features = [...] }; path/git
            // dependencies carry no registry constraint
            let constraint = match value {
                Value::String(v) => Some(v.clone()),
                Value::Table(t) => t
                    .get("version")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                _ => None,
            };
            out.push(DeclaredPackage {
                name: name.clone(),
                constraint,
                ecosystem: self.profile.name,
                manifest: "Cargo.toml".to_string(),
            });
        }
    }
}

impl Default for CargoScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl EcosystemScanner for CargoScanner {
    fn profile(&self) -> &EcosystemProfile {
        self.profile
    }

    fn parse_manifests(&self, repo_root: &Path) -> Vec<DeclaredPackage> {
        let Ok(content) = fs::read_to_string(repo_root.join("Cargo.toml")) else {
            return Vec::new();
        };
        let Ok(data) = content.parse::<Value>() else {
            return Vec::new();
        };

        let mut declared = Vec::new();
        self.collect_section(&data, "dependencies", &mut declared);
        self.collect_section(&data, "dev-dependencies", &mut declared);
        declared
    }

    fn is_installed(&self, repo_root: &Path, package: &DeclaredPackage) -> bool {
        let Ok(content) = fs::read_to_string(repo_root.join("Cargo.lock")) else {
            return false;
        };
        let needle = format!("name = \"{}\"", package.name);
        content.lines().any(|line| line.trim() == needle)
    }
}
