//! Import cross-referencing.
//!
//! Scans the repository's source files for import/require statements and
//! escalates the severity of missing packages that are actually referenced
//! from code: a dependency that is both declared and imported blocks
//! execution, not just installation hygiene.
//!
//! The scan is best-effort. Vendor and generated directories are pruned,
//! files that cannot be read are skipped silently, and a package is only
//! ever escalated — never demoted.

use std::collections::HashSet;
use std::path::Path;

use regex::Regex;
use tracing::trace;
use walkdir::WalkDir;

use crate::ecosystem::normalize_name;
use crate::report::MissingPackage;

/// Directories never scanned for imports.
const DEFAULT_EXCLUDES: &[&str] = &[
    "node_modules",
    ".git",
    "target",
    "vendor",
    "dist",
    "build",
    ".venv",
    "venv",
    "__pycache__",
    ".tox",
];

/// Source extensions the referencer understands.
const SOURCE_EXTENSIONS: &[&str] = &[
    "py", "js", "jsx", "ts", "tsx", "mjs", "cjs", "go", "rs", "rb",
];

/// Files larger than this are skipped (generated bundles, not source).
const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Import names whose distribution is published under a different name.
const PYTHON_IMPORT_ALIASES: &[(&str, &str)] = &[
    ("pil", "pillow"),
    ("bs4", "beautifulsoup4"),
    ("yaml", "pyyaml"),
    ("sklearn", "scikit-learn"),
    ("cv2", "opencv-python"),
    ("dateutil", "python-dateutil"),
];

/// Scans source files and escalates missing packages that are imported.
pub struct ImportCrossReferencer {
    excludes: Vec<String>,
    python_import: Regex,
    js_import: Regex,
    go_import: Regex,
    rust_use: Regex,
    ruby_require: Regex,
}

impl ImportCrossReferencer {
    pub fn new() -> Self {
        Self {
            excludes: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            // import flask  |  from flask import Flask
            python_import: Regex::new(r"(?m)^\s*(?:import|from)\s+([A-Za-z_][A-Za-z0-9_]*)")
                .unwrap(),
            // import x from 'pkg'  |  require("pkg")
            js_import: Regex::new(r#"(?:from|require\()\s*['"]([^'"]+)['"]"#).unwrap(),
            // import "example.com/mod"  |  alias "example.com/mod"  (block form)
            go_import: Regex::new(r#"(?m)^\s*(?:import\s+)?(?:[A-Za-z_][A-Za-z0-9_]*\s+)?"([a-z0-9.-]+\.[a-z]{2,}/[^"\s]+)""#)
                .unwrap(),
            // use serde::Serialize;  |  extern crate serde;
            rust_use: Regex::new(r"(?m)^\s*(?:pub\s+)?(?:use|extern\s+crate)\s+([A-Za-z_][A-Za-z0-9_]*)")
                .unwrap(),
            // require "json"
            ruby_require: Regex::new(r#"(?m)^\s*require\s+['"]([^'"]+)['"]"#).unwrap(),
        }
    }

    /// Add extra directory names to prune during the walk.
    pub fn with_excludes(mut self, extra: &[String]) -> Self {
        self.excludes.extend(extra.iter().cloned());
        self
    }

    /// Collect the normalized names of every package referenced from source.
    pub fn referenced_packages(&self, repo_root: &Path) -> HashSet<String> {
        let mut referenced = HashSet::new();

        let walker = WalkDir::new(repo_root).into_iter().filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            !(entry.file_type().is_dir() && self.excludes.iter().any(|e| *e == name))
        });

        for entry in walker.flatten() {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if !SOURCE_EXTENSIONS.contains(&ext) {
                continue;
            }
            if entry.metadata().map(|m| m.len() > MAX_FILE_SIZE).unwrap_or(true) {
                continue;
            }
            // Unreadable files are skipped, not errors
            let Ok(content) = std::fs::read_to_string(path) else {
                trace!(file = %path.display(), "skipping unreadable source file");
                continue;
            };
            self.collect_from(ext, &content, &mut referenced);
        }

        referenced
    }

    /// Escalate every missing package whose normalized name was referenced.
    pub fn escalate(&self, missing: &mut [MissingPackage], referenced: &HashSet<String>) {
        for pkg in missing {
            let key = normalize_name(&pkg.name);
            if referenced.contains(&key) {
                trace!(package = %pkg.name, "escalating referenced missing package");
                pkg.escalate();
            }
        }
    }

    fn collect_from(&self, ext: &str, content: &str, out: &mut HashSet<String>) {
        match ext {
            "py" => {
                for captures in self.python_import.captures_iter(content) {
                    let import = normalize_name(&captures[1]);
                    if let Some((_, dist)) =
                        PYTHON_IMPORT_ALIASES.iter().find(|(alias, _)| *alias == import)
                    {
                        out.insert(normalize_name(dist));
                    }
                    out.insert(import);
                }
            }
            "js" | "jsx" | "ts" | "tsx" | "mjs" | "cjs" => {
                for captures in self.js_import.captures_iter(content) {
                    if let Some(name) = js_package_name(&captures[1]) {
                        out.insert(normalize_name(&name));
                    }
                }
            }
            "go" => {
                for captures in self.go_import.captures_iter(content) {
                    let path = &captures[1];
                    out.insert(normalize_name(path));
                    // Subpackage imports also reference the root module
                    let segments: Vec<&str> = path.split('/').collect();
                    if segments.len() > 3 {
                        out.insert(normalize_name(&segments[..3].join("/")));
                    }
                }
            }
            "rs" => {
                for captures in self.rust_use.captures_iter(content) {
                    let root = &captures[1];
                    if !matches!(root, "crate" | "self" | "super" | "std" | "core" | "alloc") {
                        out.insert(normalize_name(root));
                    }
                }
            }
            "rb" => {
                for captures in self.ruby_require.captures_iter(content) {
                    let name = &captures[1];
                    if !name.starts_with('.') && !name.starts_with('/') {
                        out.insert(normalize_name(name));
                    }
                }
            }
            _ => {}
        }
    }
}

impl Default for ImportCrossReferencer {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduce a JS import specifier to its package name.
///
/// `lodash/fp` references `lodash`; `@scope/pkg/util` references
/// `@scope/pkg`; relative and absolute specifiers reference nothing.
fn js_package_name(specifier: &str) -> Option<String> {
    if specifier.starts_with('.') || specifier.starts_with('/') {
        return None;
    }
    let mut segments = specifier.split('/');
    let first = segments.next()?;
    if first.is_empty() {
        return None;
    }
    if first.starts_with('@') {
        let second = segments.next()?;
        Some(format!("{}/{}", first, second))
    } else {
        Some(first.to_string())
    }
}
