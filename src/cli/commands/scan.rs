//! Scan command implementation.
//!
//! `dephealth scan` runs a full workspace scan and prints the dependency
//! report, as markdown by default or as JSON with `--json`.

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, ScanArgs};
use crate::error::Result;
use crate::render;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The scan command implementation.
pub struct ScanCommand {
    repo_root: PathBuf,
    ttl: Option<String>,
    skip: Vec<String>,
    args: ScanArgs,
}

impl ScanCommand {
    /// Create a new scan command.
    pub fn new(repo_root: &Path, cli: &Cli, args: ScanArgs) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
            ttl: cli.ttl.clone(),
            skip: cli.skip.clone(),
            args,
        }
    }
}

impl Command for ScanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut scanner = super::build_scanner(&self.repo_root, &self.ttl, &self.skip)?;
        let report = scanner.report();

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| anyhow::anyhow!("failed to serialize report: {}", e))?;
            ui.message(&json);
        } else {
            let commands = scanner.suggest_install_commands();
            ui.message(&render::format_report(&report, &commands));
        }

        if report.has_critical() {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
