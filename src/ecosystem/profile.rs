//! Ecosystem profiles.
//!
//! An [`EcosystemProfile`] is the static description of one package
//! management convention: which manifest files to probe, which lock files
//! to watch, where install artifacts live, and how to render install and
//! check commands. Profiles are pure data; the behavior lives in the
//! per-ecosystem scanners.

/// Static configuration for one package ecosystem.
///
/// Constructed once at process start from a fixed table and never mutated.
#[derive(Debug, Clone)]
pub struct EcosystemProfile {
    /// Ecosystem identifier (e.g., "npm", "pip").
    pub name: &'static str,
    /// Manifest file names to probe, in priority order.
    pub manifest_files: &'static [&'static str],
    /// Lock file names, in priority order.
    pub lock_files: &'static [&'static str],
    /// Install-artifact root, relative to the repository root.
    pub install_dir: &'static str,
    /// Template for installing a single package. `{package}` is replaced
    /// with the package name.
    pub install_command: &'static str,
    /// Template for checking whether a single package is installed.
    pub check_command: &'static str,
    /// Whether the installer accepts multiple packages in one invocation.
    pub batch_install: bool,
}

impl EcosystemProfile {
    /// Render the install command for a single package.
    pub fn render_install(&self, package: &str) -> String {
        self.install_command.replace("{package}", package)
    }

    /// Render the check command for a single package.
    pub fn render_check(&self, package: &str) -> String {
        self.check_command.replace("{package}", package)
    }

    /// Render one batched install command for several packages.
    ///
    /// Only meaningful when `batch_install` is set; callers fall back to
    /// one `render_install` per package otherwise.
    pub fn render_batch_install(&self, packages: &[String]) -> String {
        self.install_command.replace("{package}", &packages.join(" "))
    }
}

/// The fixed table of built-in ecosystem profiles.
pub const BUILTIN_PROFILES: &[EcosystemProfile] = &[
    EcosystemProfile {
        name: "npm",
        manifest_files: &["package.json"],
        lock_files: &["package-lock.json", "yarn.lock", "pnpm-lock.yaml"],
        install_dir: "node_modules",
        install_command: "npm install {package}",
        check_command: "npm ls {package}",
        batch_install: true,
    },
    EcosystemProfile {
        name: "pip",
        manifest_files: &["pyproject.toml", "requirements.txt"],
        lock_files: &["uv.lock", "poetry.lock"],
        install_dir: ".venv",
        install_command: "pip install {package}",
        check_command: "pip show {package}",
        batch_install: true,
    },
    EcosystemProfile {
        name: "go",
        manifest_files: &["go.mod"],
        lock_files: &["go.sum"],
        install_dir: ".",
        install_command: "go get {package}",
        check_command: "go list -m {package}",
        batch_install: false,
    },
    EcosystemProfile {
        name: "cargo",
        manifest_files: &["Cargo.toml"],
        lock_files: &["Cargo.lock"],
        install_dir: "target",
        install_command: "cargo add {package}",
        check_command: "cargo pkgid {package}",
        batch_install: false,
    },
    EcosystemProfile {
        name: "gem",
        manifest_files: &["Gemfile"],
        lock_files: &["Gemfile.lock"],
        install_dir: "vendor/bundle",
        install_command: "gem install {package}",
        check_command: "gem list -i {package}",
        batch_install: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_profiles_cover_five_ecosystems() {
        let names: Vec<_> = BUILTIN_PROFILES.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["npm", "pip", "go", "cargo", "gem"]);
    }

    #[test]
    fn render_install_substitutes_package() {
        let npm = &BUILTIN_PROFILES[0];
        assert_eq!(npm.render_install("express"), "npm install express");
    }

    #[test]
    fn render_check_substitutes_package() {
        let pip = &BUILTIN_PROFILES[1];
        assert_eq!(pip.render_check("flask"), "pip show flask");
    }

    #[test]
    fn render_batch_install_joins_packages() {
        let npm = &BUILTIN_PROFILES[0];
        let cmd = npm.render_batch_install(&["express".to_string(), "lodash".to_string()]);
        assert_eq!(cmd, "npm install express lodash");
    }

    #[test]
    fn go_and_cargo_do_not_batch() {
        let go = BUILTIN_PROFILES.iter().find(|p| p.name == "go").unwrap();
        let cargo = BUILTIN_PROFILES.iter().find(|p| p.name == "cargo").unwrap();
        assert!(!go.batch_install);
        assert!(!cargo.batch_install);
    }

    #[test]
    fn every_profile_has_a_manifest_and_install_command() {
        for profile in BUILTIN_PROFILES {
            assert!(!profile.manifest_files.is_empty(), "{}", profile.name);
            assert!(
                profile.install_command.contains("{package}"),
                "{}",
                profile.name
            );
        }
    }
}
