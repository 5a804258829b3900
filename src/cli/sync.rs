//! Sync command — re-scans the project and merges into the existing config.

use std::io::BufRead;
use std::path::Path;

use anyhow::Result;
use clap::Parser;

use crate::cli::prompt::{InteractiveScanPrompts, Prompter};
use crate::config::ProjectConfig;
use crate::utils::{print_success, print_warning};
use crate::workflow;

/// Sync command options.
#[derive(Parser)]
pub struct SyncCommand {
    // Sync always scans the current directory; no options needed
}

impl SyncCommand {
    /// Executes the sync command against the current directory.
    pub fn execute(self) -> Result<()> {
        let mut prompter = Prompter::stdin();
        run(Path::new("."), &mut prompter)
    }
}

/// Re-scans `root` and merges the result into the persisted mapping.
///
/// Existing keys keep their labels; new keys are prompted for; keys no
/// longer found are dropped only after per-key confirmation.
pub fn run<R: BufRead>(root: &Path, prompter: &mut Prompter<R>) -> Result<()> {
    let existing = ProjectConfig::load(root)?;
    if let Some(schema) = existing.unsupported_schema() {
        print_warning(&format!(
            "Warning: This project is using an unsupported schema version: {schema}"
        ));
    }

    let scan = workflow::scan(root)?;

    let mut prompts = InteractiveScanPrompts::new(prompter);
    let outcome = workflow::merge(&existing, &scan, &mut prompts)?;

    outcome.config.save(root)?;
    print_success(&format!(
        "Sync complete: {} added, {} removed, {} workflows / {} steps total.",
        outcome.added.len(),
        outcome.removed.len(),
        outcome.config.workflows.len(),
        outcome.config.steps.len(),
    ));

    Ok(())
}
