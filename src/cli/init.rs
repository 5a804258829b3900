//! Init command — scans the project and writes the initial config.

use std::io::BufRead;
use std::path::Path;

use anyhow::Result;
use clap::Parser;

use crate::cli::prompt::{InteractiveScanPrompts, Prompter};
use crate::config::{ProjectConfig, SCHEMA_VERSION};
use crate::utils::{print_success, print_warning};
use crate::workflow;

/// Init command options.
#[derive(Parser)]
pub struct InitCommand {
    // Init always scans the current directory; no options needed
}

impl InitCommand {
    /// Executes the init command against the current directory.
    pub fn execute(self) -> Result<()> {
        let mut prompter = Prompter::stdin();
        run(Path::new("."), &mut prompter)
    }
}

/// Scans `root` and writes a fresh config, prompting for every label.
///
/// Refuses (as a no-op, not an error) when the project is already
/// initialized, so an accidental re-run never touches the persisted mapping.
pub fn run<R: BufRead>(root: &Path, prompter: &mut Prompter<R>) -> Result<()> {
    if ProjectConfig::is_initialized(root) {
        print_warning("This project is already initialized. Run 'flow-commit sync' to re-scan.");
        return Ok(());
    }

    let scan = workflow::scan(root)?;
    if scan.workflows.is_empty() {
        print_warning("No workflow.yaml markers found; writing an empty config.");
    }

    let existing = ProjectConfig::new();
    let mut prompts = InteractiveScanPrompts::new(prompter);
    let outcome = workflow::merge(&existing, &scan, &mut prompts)?;

    outcome.config.save(root)?;
    print_success(&format!(
        "Project initialized successfully with schema version {SCHEMA_VERSION}."
    ));

    Ok(())
}
