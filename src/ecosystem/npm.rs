//! JavaScript/TypeScript ecosystem scanning.
//!
//! Declared packages come from `package.json` (`dependencies` and
//! `devDependencies`); installation evidence is a package directory under
//! `node_modules/`, with scoped packages (`@types/node`) resolved through
//! their scope subdirectory.

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::{DeclaredPackage, EcosystemProfile, EcosystemScanner, BUILTIN_PROFILES};

/// Scanner for the npm ecosystem.
pub struct NpmScanner {
    profile: &'static EcosystemProfile,
}

impl NpmScanner {
    pub fn new() -> Self {
        Self {
            profile: &BUILTIN_PROFILES[0],
        }
    }

    fn collect_section(
        &self,
        data: &Value,
        section: &str,
        out: &mut Vec<DeclaredPackage>,
    ) {
        let Some(deps) = data.get(section).and_then(Value::as_object) else {
            return;
        };
        for (name, constraint) in deps {
            out.push(DeclaredPackage {
                name: name.clone(),
                constraint: constraint.as_str().map(str::to_string),
                ecosystem: self.profile.name,
                manifest: "package.json".to_string(),
            });
        }
    }
}

impl Default for NpmScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl EcosystemScanner for NpmScanner {
    fn profile(&self) -> &EcosystemProfile {
        self.profile
    }

    fn parse_manifests(&self, repo_root: &Path) -> Vec<DeclaredPackage> {
        let manifest = repo_root.join("package.json");
        let Ok(content) = fs::read_to_string(&manifest) else {
            return Vec::new();
        };
        let Ok(data) = serde_json::from_str::<Value>(&content) else {
            // Malformed manifest contributes nothing
            return Vec::new();
        };

        let mut declared = Vec::new();
        self.collect_section(&data, "dependencies", &mut declared);
        self.collect_section(&data, "devDependencies", &mut declared);
        declared
    }

    fn is_installed(&self, repo_root: &Path, package: &DeclaredPackage) -> bool {
        let mut dir = repo_root.join(self.profile.install_dir);
        // "@scope/name" lives at node_modules/@scope/name
        for part in package.name.split('/') {
            dir = dir.join(part);
        }
        dir.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn declared(scanner: &NpmScanner, root: &Path) -> Vec<String> {
        scanner
            .parse_manifests(root)
            .into_iter()
            .map(|p| p.name)
            .collect()
    }

    #[test]
    fn parses_dependencies_and_dev_dependencies() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{
                "dependencies": {"express": "^4.18.2"},
                "devDependencies": {"vitest": "~1.0.0"}
            }"#,
        )
        .unwrap();

        let scanner = NpmScanner::new();
        let packages = scanner.parse_manifests(temp.path());

        assert_eq!(packages.len(), 2);
        assert!(packages.iter().any(|p| p.name == "express"
            && p.constraint.as_deref() == Some("^4.18.2")
            && p.manifest == "package.json"));
        assert!(packages.iter().any(|p| p.name == "vitest"));
    }

    #[test]
    fn missing_manifest_yields_empty() {
        let temp = TempDir::new().unwrap();
        let scanner = NpmScanner::new();
        assert!(scanner.parse_manifests(temp.path()).is_empty());
    }

    #[test]
    fn malformed_manifest_yields_empty() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{not json").unwrap();

        let scanner = NpmScanner::new();
        assert!(scanner.parse_manifests(temp.path()).is_empty());
    }

    #[test]
    fn empty_manifest_declares_nothing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();

        let scanner = NpmScanner::new();
        assert!(declared(&scanner, temp.path()).is_empty());
    }

    #[test]
    fn detects_installed_package_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("node_modules/express")).unwrap();

        let scanner = NpmScanner::new();
        let pkg = DeclaredPackage {
            name: "express".to_string(),
            constraint: None,
            ecosystem: "npm",
            manifest: "package.json".to_string(),
        };

        assert!(scanner.is_installed(temp.path(), &pkg));
    }

    #[test]
    fn detects_scoped_package_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("node_modules/@types/node")).unwrap();

        let scanner = NpmScanner::new();
        let pkg = DeclaredPackage {
            name: "@types/node".to_string(),
            constraint: None,
            ecosystem: "npm",
            manifest: "package.json".to_string(),
        };

        assert!(scanner.is_installed(temp.path(), &pkg));
    }

    #[test]
    fn absent_directory_is_not_installed() {
        let temp = TempDir::new().unwrap();
        let scanner = NpmScanner::new();
        let pkg = DeclaredPackage {
            name: "express".to_string(),
            constraint: None,
            ecosystem: "npm",
            manifest: "package.json".to_string(),
        };

        assert!(!scanner.is_installed(temp.path(), &pkg));
    }
}
