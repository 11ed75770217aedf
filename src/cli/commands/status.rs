//! Status command implementation.
//!
//! `dephealth status` prints the one-line health summary, suitable for
//! prompts and editor status bars.

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, StatusArgs};
use crate::error::Result;
use crate::render;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    repo_root: PathBuf,
    ttl: Option<String>,
    skip: Vec<String>,
    #[allow(dead_code)]
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(repo_root: &Path, cli: &Cli, args: StatusArgs) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
            ttl: cli.ttl.clone(),
            skip: cli.skip.clone(),
            args,
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut scanner = super::build_scanner(&self.repo_root, &self.ttl, &self.skip)?;
        let report = scanner.report();

        let line = render::quick_status(&report);
        if report.has_critical() {
            ui.warning(&line);
            Ok(CommandResult::failure(1))
        } else {
            ui.message(&line);
            Ok(CommandResult::success())
        }
    }
}
