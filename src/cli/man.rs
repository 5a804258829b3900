//! Man command — long-form manual text.

use anyhow::Result;
use clap::Parser;

/// Man command options.
#[derive(Parser)]
pub struct ManCommand {
    // No options; the manual is a single document
}

const MANUAL: &str = r"flow-commit Manual

COMMANDS

flow-commit init
  Scans the project tree for directories carrying a workflow.yaml marker
  file. Each such directory becomes a workflow; its immediate
  subdirectories become steps. You are asked for a display label for every
  detected workflow and step (press Enter to accept the directory name),
  and the resulting mapping is written to flow-commit.yaml. Running init
  in an already-initialized project changes nothing; use sync instead.

flow-commit sync
  Re-scans an initialized project and merges the result into the existing
  mapping. Keys that are still present keep their labels and are not asked
  about again; new keys are prompted for; keys that no longer exist in the
  project are removed only after you confirm each one.

flow-commit
  The commit flow. Reads the changed files from git, offers to stage
  unstaged changes, matches the staged files against the workflow/step
  mapping, and builds a message of the form

      <type>[[workflow][step]]... <message>

  with one [[workflow][step]] annotation per match. The proposed
  git commit command is shown for review before it runs.

flow-commit man
  Shows this manual.

MATCHING

  A changed file matches a workflow when the workflow's directory name is
  contained in the file's directory path, and likewise for steps. The
  containment check is a plain substring test, so a workflow directory
  named 'auth' also matches files under 'authorization/'. Prefer distinct
  directory names for workflows and steps.

FILES

  flow-commit.yaml   The persisted mapping: a schema version string, a
                     workflows table, and a steps table keyed by
                     'workflow/step'. Safe to edit by hand.
  workflow.yaml      Marker file declaring its directory to be a workflow.
";

impl ManCommand {
    /// Prints the manual.
    pub fn execute(self) -> Result<()> {
        print!("{MANUAL}");
        Ok(())
    }
}
