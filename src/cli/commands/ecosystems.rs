//! Ecosystems command implementation.
//!
//! `dephealth ecosystems` lists every registered ecosystem profile and
//! marks the ones whose manifests are present in the repository.

use std::path::{Path, PathBuf};

use crate::cli::args::EcosystemsArgs;
use crate::ecosystem::EcosystemRegistry;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The ecosystems command implementation.
pub struct EcosystemsCommand {
    repo_root: PathBuf,
    #[allow(dead_code)]
    args: EcosystemsArgs,
}

impl EcosystemsCommand {
    /// Create a new ecosystems command.
    pub fn new(repo_root: &Path, args: EcosystemsArgs) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
            args,
        }
    }
}

impl Command for EcosystemsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = EcosystemRegistry::new();

        for scanner in registry.scanners() {
            let profile = scanner.profile();
            let marker = if scanner.is_present(&self.repo_root) {
                "present"
            } else {
                "not detected"
            };
            ui.message(&format!(
                "{:<8} {:<14} manifests: {}",
                profile.name,
                format!("[{}]", marker),
                profile.manifest_files.join(", ")
            ));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_all_registered_ecosystems() {
        let temp = TempDir::new().unwrap();
        let cmd = EcosystemsCommand::new(temp.path(), EcosystemsArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.messages().len(), 5);
        assert!(ui.all_output().contains("npm"));
        assert!(ui.all_output().contains("gem"));
    }

    #[test]
    fn marks_present_ecosystems() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();

        let cmd = EcosystemsCommand::new(temp.path(), EcosystemsArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let npm_line = ui
            .messages()
            .iter()
            .find(|m| m.starts_with("npm"))
            .unwrap();
        assert!(npm_line.contains("[present]"));
    }
}
