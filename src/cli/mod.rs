//! CLI interface for flow-commit

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commit;
pub mod init;
pub mod man;
pub mod prompt;
pub mod sync;

/// flow-commit: a structured Git commit message helper
#[derive(Parser)]
#[command(name = "flow-commit")]
#[command(about = "A structured Git commit message helper for workflow-based projects", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; without one, the propose-and-commit flow runs.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Main command categories
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the project: scan for workflows and write the config file
    Init(init::InitCommand),
    /// Re-scan the project and merge the result into the existing config
    Sync(sync::SyncCommand),
    /// Display the full manual
    Man(man::ManCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::Init(init_cmd)) => init_cmd.execute(),
            Some(Commands::Sync(sync_cmd)) => sync_cmd.execute(),
            Some(Commands::Man(man_cmd)) => man_cmd.execute(),
            None => commit::CommitCommand.execute(),
        }
    }
}
