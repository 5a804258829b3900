//! Default command — propose a commit message from the changed files and run
//! `git commit`.

use std::io::BufRead;
use std::path::Path;

use anyhow::Result;

use crate::cli::prompt::Prompter;
use crate::config::ProjectConfig;
use crate::git::GitRepository;
use crate::utils::{print_error, print_info, print_success, print_warning};
use crate::workflow::{build_message, resolve_labels};

/// Commit types offered for the structured message prefix.
pub const COMMIT_TYPES: &[&str] = &["add", "fix", "change", "remove"];

/// The propose-and-commit flow, run when no subcommand is given.
pub struct CommitCommand;

impl CommitCommand {
    /// Executes the commit flow against the current directory.
    pub fn execute(self) -> Result<()> {
        let mut prompter = Prompter::stdin();
        run(Path::new("."), &mut prompter)
    }
}

/// Builds and executes a structured commit for the repository at `root`.
///
/// Every early exit here (nothing changed, nothing staged, no match, user
/// declined) is a normal abort with a message, not an error.
pub fn run<R: BufRead>(root: &Path, prompter: &mut Prompter<R>) -> Result<()> {
    let config = ProjectConfig::load(root)?;
    if let Some(schema) = config.unsupported_schema() {
        print_warning(&format!(
            "Warning: This project is using an unsupported schema version: {schema}"
        ));
    }

    let repo = GitRepository::open_at(root)?;
    let mut changes = repo.changed_files()?;

    if changes.is_empty() {
        print_info("No changes detected.");
        return Ok(());
    }

    if !changes.unstaged.is_empty() {
        print_warning(
            "Warning: You have unstaged changes. These changes will not be included in the commit.",
        );
        if prompter.confirm("Do you want to stage all changes?", true)? {
            repo.stage_all()?;
            print_success("All changes have been staged.");
            changes = repo.changed_files()?;
        }
    }

    if changes.staged.is_empty() {
        print_warning("No files are staged for commit. Commit aborted.");
        return Ok(());
    }

    let labels = resolve_labels(&changes.staged, &config);
    if labels.is_empty() {
        print_info("No matching workflow or step found.");
        return Ok(());
    }

    let commit_type = prompter.select("Commit type", COMMIT_TYPES, "fix")?;
    let free_text = prompter.multi_line("Enter commit message (finish with an empty line):")?;

    let message = build_message(&commit_type, &labels, &free_text);

    println!("The following command is ready for review:");
    println!("git commit -m \"{message}\"");

    if prompter.confirm("Do you want to proceed with the commit?", true)? {
        repo.commit(&message)?;
        print_success("Commit successful.");
    } else {
        print_error("Commit aborted.");
    }

    Ok(())
}
