//! Commands command implementation.
//!
//! `dephealth commands` prints the suggested install commands for all
//! missing packages, one per line. It only prints — installing anything
//! is left to the user.

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, CommandsArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The commands command implementation.
pub struct CommandsCommand {
    repo_root: PathBuf,
    ttl: Option<String>,
    skip: Vec<String>,
    #[allow(dead_code)]
    args: CommandsArgs,
}

impl CommandsCommand {
    /// Create a new commands command.
    pub fn new(repo_root: &Path, cli: &Cli, args: CommandsArgs) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
            ttl: cli.ttl.clone(),
            skip: cli.skip.clone(),
            args,
        }
    }
}

impl Command for CommandsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut scanner = super::build_scanner(&self.repo_root, &self.ttl, &self.skip)?;
        let commands = scanner.suggest_install_commands();

        if commands.is_empty() {
            ui.success("All dependencies are installed.");
        } else {
            for command in &commands {
                ui.message(command);
            }
        }

        Ok(CommandResult::success())
    }
}
