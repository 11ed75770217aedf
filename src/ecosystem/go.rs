//! Go ecosystem scanning.
//!
//! Declared modules come from `go.mod` `require` directives (single-line
//! and block form); installation evidence is the module path appearing in
//! the `go.sum` resolved-checksum list.

use std::fs;
use std::path::Path;

use super::{DeclaredPackage, EcosystemProfile, EcosystemScanner, BUILTIN_PROFILES};

/// Scanner for the Go module ecosystem.
pub struct GoScanner {
    profile: &'static EcosystemProfile,
}

impl GoScanner {
    pub fn new() -> Self {
        Self {
            profile: &BUILTIN_PROFILES[2],
        }
    }

    fn declare(&self, line: &str, out: &mut Vec<DeclaredPackage>) {
        // "module/path v1.2.3" with an optional "// indirect" trailer
        let line = line.split("//").next().unwrap_or("").trim();
        let mut parts = line.split_whitespace();
        let (Some(path), version) = (parts.next(), parts.next()) else {
            return;
        };
        if path.is_empty() {
            return;
        }
        out.push(DeclaredPackage {
            name: path.to_string(),
            constraint: version.map(str::to_string),
            ecosystem: self.profile.name,
            manifest: "go.mod".to_string(),
        });
    }
}

impl Default for GoScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl EcosystemScanner for GoScanner {
    fn profile(&self) -> &EcosystemProfile {
        self.profile
    }

    fn parse_manifests(&self, repo_root: &Path) -> Vec<DeclaredPackage> {
        let Ok(content) = fs::read_to_string(repo_root.join("go.mod")) else {
            return Vec::new();
        };

        let mut declared = Vec::new();
        let mut in_block = false;
        for line in content.lines() {
            let line = line.trim();
            if in_block {
                if line == ")" {
                    in_block = false;
                } else if !line.is_empty() {
                    self.declare(line, &mut declared);
                }
            } else if line == "require (" || line == "require(" {
                in_block = true;
            } else if let Some(rest) = line.strip_prefix("require ") {
                self.declare(rest, &mut declared);
            }
        }
        declared
    }

    fn is_installed(&self, repo_root: &Path, package: &DeclaredPackage) -> bool {
        let Ok(content) = fs::read_to_string(repo_root.join("go.sum")) else {
            return false;
        };
        let prefix = format!("{} ", package.name);
        content.lines().any(|line| line.starts_with(&prefix))
    }
}
