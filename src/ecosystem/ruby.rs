//! Ruby ecosystem scanning.
//!
//! Declared gems come from `Gemfile` `gem` lines; installation evidence is
//! the gem appearing in the `Gemfile.lock` specs section.

use std::fs;
use std::path::Path;

use regex::Regex;

use super::{DeclaredPackage, EcosystemProfile, EcosystemScanner, BUILTIN_PROFILES};

/// Scanner for the RubyGems ecosystem.
pub struct RubyScanner {
    profile: &'static EcosystemProfile,
    gem_line: Regex,
}

impl RubyScanner {
    pub fn new() -> Self {
        Self {
            profile: &BUILTIN_PROFILES[4],
            // gem "rails", "~> 7.0"  |  gem 'puma'
            gem_line: Regex::new(
                r#"^\s*gem\s+['"]([^'"]+)['"](?:\s*,\s*['"]([^'"]+)['"])?"#,
            )
            .unwrap(),
        }
    }
}

impl Default for RubyScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl EcosystemScanner for RubyScanner {
    fn profile(&self) -> &EcosystemProfile {
        self.profile
    }

    fn parse_manifests(&self, repo_root: &Path) -> Vec<DeclaredPackage> {
        let Ok(content) = fs::read_to_string(repo_root.join("Gemfile")) else {
            return Vec::new();
        };

        let mut declared = Vec::new();
        for line in content.lines() {
            if let Some(captures) = self.gem_line.captures(line) {
                declared.push(DeclaredPackage {
                    name: captures[1].to_string(),
                    constraint: captures.get(2).map(|m| m.as_str().to_string()),
                    ecosystem: self.profile.name,
                    manifest: "Gemfile".to_string(),
                });
            }
        }
        declared
    }

    fn is_installed(&self, repo_root: &Path, package: &DeclaredPackage) -> bool {
        let Ok(content) = fs::read_to_string(repo_root.join("Gemfile.lock")) else {
            return false;
        };
        // Resolved specs are indented "name (version)" lines
        let needle = format!("{} (", package.name);
        content
            .lines()
            .any(|line| line.trim_start().starts_with(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pkg(name: &str) -> DeclaredPackage {
        DeclaredPackage {
            name: name.to_string(),
            constraint: None,
            ecosystem: "gem",
            manifest: "Gemfile".to_string(),
        }
    }

    #[test]
    fn parses_gem_lines_with_and_without_constraints() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("Gemfile"),
            "source \"https://rubygems.org\"\n\ngem \"rails\", \"~> 7.0\"\ngem 'puma'\n# gem \"commented\"\n",
        )
        .unwrap();

        let scanner = RubyScanner::new();
        let packages = scanner.parse_manifests(temp.path());

        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].name, "rails");
        assert_eq!(packages[0].constraint.as_deref(), Some("~> 7.0"));
        assert_eq!(packages[1].name, "puma");
        assert!(packages[1].constraint.is_none());
    }

    #[test]
    fn missing_gemfile_yields_empty() {
        let temp = TempDir::new().unwrap();
        let scanner = RubyScanner::new();
        assert!(scanner.parse_manifests(temp.path()).is_empty());
    }

    #[test]
    fn lock_spec_counts_as_installed() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("Gemfile.lock"),
            "GEM\n  remote: https://rubygems.org/\n  specs:\n    rails (7.0.8)\n    puma (6.4.0)\n",
        )
        .unwrap();

        let scanner = RubyScanner::new();
        assert!(scanner.is_installed(temp.path(), &pkg("rails")));
        assert!(!scanner.is_installed(temp.path(), &pkg("sidekiq")));
    }

    #[test]
    fn absent_lock_means_nothing_installed() {
        let temp = TempDir::new().unwrap();
        let scanner = RubyScanner::new();
        assert!(!scanner.is_installed(temp.path(), &pkg("rails")));
    }
}
