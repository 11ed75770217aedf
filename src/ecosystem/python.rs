//! Python ecosystem scanning.
//!
//! Declared packages come from `pyproject.toml` (`[project.dependencies]`
//! and `[tool.poetry.dependencies]`) and `requirements.txt`; installation
//! evidence is an entry in a virtual environment's `site-packages`
//! surface — a package directory, a `*.dist-info` directory, or a
//! `*.egg-info` entry — compared under name normalization.

use std::fs;
use std::path::{Path, PathBuf};

use toml::Value;

use super::{
    normalize_name, split_specifier, DeclaredPackage, EcosystemProfile, EcosystemScanner,
    BUILTIN_PROFILES,
};

/// Scanner for the pip ecosystem.
pub struct PythonScanner {
    profile: &'static EcosystemProfile,
}

impl PythonScanner {
    pub fn new() -> Self {
        Self {
            profile: &BUILTIN_PROFILES[1],
        }
    }

    fn declare(
        &self,
        name: String,
        constraint: Option<String>,
        manifest: &str,
        seen: &mut Vec<String>,
        out: &mut Vec<DeclaredPackage>,
    ) {
        let key = normalize_name(&name);
        if name.is_empty() || key == "python" || seen.contains(&key) {
            return;
        }
        seen.push(key);
        out.push(DeclaredPackage {
            name,
            constraint,
            ecosystem: self.profile.name,
            manifest: manifest.to_string(),
        });
    }

    fn parse_pyproject(&self, repo_root: &Path, seen: &mut Vec<String>, out: &mut Vec<DeclaredPackage>) {
        let Ok(content) = fs::read_to_string(repo_root.join("pyproject.toml")) else {
            return;
        };
        let Ok(data) = content.parse::<Value>() else {
            return;
        };

        // [project] dependencies = ["flask>=2.0", ...]
        if let Some(deps) = data
            .get("project")
            .and_then(|p| p.get("dependencies"))
            .and_then(Value::as_array)
        {
            for dep in deps.iter().filter_map(Value::as_str) {
                let (name, constraint) = split_specifier(dep);
                self.declare(name, constraint, "pyproject.toml", seen, out);
            }
        }

        // [tool.poetry.dependencies] flask = "^2.0"
        if let Some(deps) = data
            .get("tool")
            .and_then(|t| t.get("poetry"))
            .and_then(|p| p.get("dependencies"))
            .and_then(Value::as_table)
        {
            for (name, value) in deps {
                let constraint = value.as_str().map(str::to_string);
                self.declare(name.clone(), constraint, "pyproject.toml", seen, out);
            }
        }
    }

    fn parse_requirements(
        &self,
        repo_root: &Path,
        seen: &mut Vec<String>,
        out: &mut Vec<DeclaredPackage>,
    ) {
        let Ok(content) = fs::read_to_string(repo_root.join("requirements.txt")) else {
            return;
        };
        for line in content.lines() {
            let line = line.trim();
            // Comments and -r/-e/--hash directives are not declarations
            if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
                continue;
            }
            let (name, constraint) = split_specifier(line);
            self.declare(name, constraint, "requirements.txt", seen, out);
        }
    }

    /// Candidate `site-packages` directories under the repository root.
    fn site_packages_roots(&self, repo_root: &Path) -> Vec<PathBuf> {
        let mut roots = Vec::new();
        for env in [".venv", "venv"] {
            let env_root = repo_root.join(env);
            // Unix layout: <env>/lib/pythonX.Y/site-packages
            if let Ok(entries) = fs::read_dir(env_root.join("lib")) {
                for entry in entries.flatten() {
                    let candidate = entry.path().join("site-packages");
                    if candidate.is_dir() {
                        roots.push(candidate);
                    }
                }
            }
            // Windows layout: <env>/Lib/site-packages
            let windows = env_root.join("Lib").join("site-packages");
            if windows.is_dir() {
                roots.push(windows);
            }
        }
        roots
    }

    /// Whether a site-packages entry name provides `wanted` (normalized).
    fn entry_provides(entry_name: &str, wanted: &str) -> bool {
        for suffix in [".dist-info", ".egg-info"] {
            if let Some(stem) = entry_name.strip_suffix(suffix) {
                // "{distribution}-{version}.dist-info"
                let dist = stem.rsplit_once('-').map_or(stem, |(d, _)| d);
                return normalize_name(dist) == wanted;
            }
        }
        // A plain importable package/module directory
        let module = entry_name.strip_suffix(".py").unwrap_or(entry_name);
        normalize_name(module) == wanted
    }
}

impl Default for PythonScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl EcosystemScanner for PythonScanner {
    fn profile(&self) -> &EcosystemProfile {
        self.profile
    }

    fn parse_manifests(&self, repo_root: &Path) -> Vec<DeclaredPackage> {
        let mut declared = Vec::new();
        let mut seen = Vec::new();
        self.parse_pyproject(repo_root, &mut seen, &mut declared);
        self.parse_requirements(repo_root, &mut seen, &mut declared);
        declared
    }

    fn is_installed(&self, repo_root: &Path, package: &DeclaredPackage) -> bool {
        let wanted = normalize_name(&package.name);
        for root in self.site_packages_roots(repo_root) {
            let Ok(entries) = fs::read_dir(&root) else {
                continue;
            };
            for entry in entries.flatten() {
                let name = entry.file_name();
                let Some(name) = name.to_str() else {
                    continue;
                };
                if Self::entry_provides(name, &wanted) {
                    return true;
                }
            }
        }
        false
    }
}
