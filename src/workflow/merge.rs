//! Pure merge of a fresh scan against an existing mapping.
//!
//! Label input and removal confirmation go through the [`ScanPrompts`] trait
//! so the merge itself stays deterministic and testable; the interactive
//! implementation lives in [`crate::cli::prompt`].

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::config::ProjectConfig;
use crate::workflow::scan::ProjectScan;

/// Collaborator that supplies display labels for newly detected keys and
/// confirms removal of stale ones.
pub trait ScanPrompts {
    /// Label for a newly detected workflow. `default` is the directory name.
    fn workflow_label(&mut self, dir: &Path, default: &str) -> Result<String>;

    /// Label for a newly detected step. `default` is the directory name.
    fn step_label(&mut self, path: &Path, default: &str) -> Result<String>;

    /// Whether `key` (present in the old mapping, absent from the scan)
    /// should be dropped. Returning `false` keeps the entry.
    fn confirm_removal(&mut self, key: &str) -> Result<bool>;
}

/// Result of merging a scan into an existing config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// The merged mapping, ready to persist.
    pub config: ProjectConfig,
    /// Keys newly added by this merge (workflows and steps).
    pub added: Vec<String>,
    /// Keys dropped by this merge after confirmation.
    pub removed: Vec<String>,
}

/// Merges `scan` into `existing`.
///
/// - Keys already present keep their label and are never re-prompted.
/// - New keys get a label from `prompts`.
/// - Keys missing from the scan are dropped only when `prompts` confirms;
///   nothing is removed silently.
pub fn merge(
    existing: &ProjectConfig,
    scan: &ProjectScan,
    prompts: &mut dyn ScanPrompts,
) -> Result<MergeOutcome> {
    let mut config = ProjectConfig::new();
    let mut added = Vec::new();
    let mut removed = Vec::new();

    for wf in &scan.workflows {
        if !config.workflows.contains_key(&wf.name) {
            let label = match existing.workflows.get(&wf.name) {
                Some(label) => label.clone(),
                None => {
                    added.push(wf.name.clone());
                    prompts.workflow_label(&wf.dir, &wf.name)?
                }
            };
            config.workflows.insert(wf.name.clone(), label);
        }

        for step in &wf.steps {
            let key = wf.step_key(step);
            if config.steps.contains_key(&key) {
                continue;
            }
            let label = match existing.steps.get(&key) {
                Some(label) => label.clone(),
                None => {
                    added.push(key.clone());
                    prompts.step_label(&step.path, &step.name)?
                }
            };
            config.steps.insert(key, label);
        }
    }

    // Stale keys: in the old mapping but not found by this scan.
    for (key, label) in &existing.workflows {
        if !config.workflows.contains_key(key) {
            if prompts.confirm_removal(key)? {
                removed.push(key.clone());
            } else {
                config.workflows.insert(key.clone(), label.clone());
            }
        }
    }
    for (key, label) in &existing.steps {
        if !config.steps.contains_key(key) {
            if prompts.confirm_removal(key)? {
                removed.push(key.clone());
            } else {
                config.steps.insert(key.clone(), label.clone());
            }
        }
    }

    debug!(added = added.len(), removed = removed.len(), "merge complete");

    Ok(MergeOutcome {
        config,
        added,
        removed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::scan::{DetectedStep, DetectedWorkflow};
    use std::path::PathBuf;

    /// Scripted prompts: labels are `<default>-label`, removal answers come
    /// from a fixed queue.
    struct Scripted {
        removal_answers: Vec<bool>,
        removal_asked: Vec<String>,
    }

    impl Scripted {
        fn new(removal_answers: Vec<bool>) -> Self {
            Self {
                removal_answers,
                removal_asked: Vec::new(),
            }
        }
    }

    impl ScanPrompts for Scripted {
        fn workflow_label(&mut self, _dir: &Path, default: &str) -> Result<String> {
            Ok(format!("{default}-label"))
        }

        fn step_label(&mut self, _path: &Path, default: &str) -> Result<String> {
            Ok(format!("{default}-label"))
        }

        fn confirm_removal(&mut self, key: &str) -> Result<bool> {
            self.removal_asked.push(key.to_string());
            Ok(self.removal_answers.remove(0))
        }
    }

    fn scan_with(workflows: &[(&str, &[&str])]) -> ProjectScan {
        ProjectScan {
            workflows: workflows
                .iter()
                .map(|(name, steps)| DetectedWorkflow {
                    name: (*name).to_string(),
                    dir: PathBuf::from(name),
                    steps: steps
                        .iter()
                        .map(|s| DetectedStep {
                            name: (*s).to_string(),
                            path: PathBuf::from(name).join(s),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn new_keys_are_labelled_via_prompts() {
        let existing = ProjectConfig::new();
        let scan = scan_with(&[("auth", &["login"])]);
        let mut prompts = Scripted::new(vec![]);

        let outcome = merge(&existing, &scan, &mut prompts).unwrap();

        assert_eq!(
            outcome.config.workflows.get("auth").map(String::as_str),
            Some("auth-label")
        );
        assert_eq!(
            outcome.config.steps.get("auth/login").map(String::as_str),
            Some("login-label")
        );
        assert_eq!(outcome.added, vec!["auth", "auth/login"]);
        assert!(outcome.removed.is_empty());
    }

    #[test]
    fn existing_keys_keep_their_labels() {
        let mut existing = ProjectConfig::new();
        existing
            .workflows
            .insert("auth".to_string(), "Authentication".to_string());
        existing
            .steps
            .insert("auth/login".to_string(), "Sign-in".to_string());

        let scan = scan_with(&[("auth", &["login", "logout"])]);
        let mut prompts = Scripted::new(vec![]);

        let outcome = merge(&existing, &scan, &mut prompts).unwrap();

        assert_eq!(
            outcome.config.workflows.get("auth").map(String::as_str),
            Some("Authentication")
        );
        assert_eq!(
            outcome.config.steps.get("auth/login").map(String::as_str),
            Some("Sign-in")
        );
        // Only the genuinely new key was prompted
        assert_eq!(outcome.added, vec!["auth/logout"]);
    }

    #[test]
    fn stale_keys_are_removed_only_on_confirmation() {
        let mut existing = ProjectConfig::new();
        existing
            .workflows
            .insert("auth".to_string(), "Auth".to_string());
        existing
            .workflows
            .insert("legacy".to_string(), "Legacy".to_string());
        existing
            .steps
            .insert("legacy/cleanup".to_string(), "Cleanup".to_string());

        let scan = scan_with(&[("auth", &[])]);
        // Keep the workflow, drop the step
        let mut prompts = Scripted::new(vec![false, true]);

        let outcome = merge(&existing, &scan, &mut prompts).unwrap();

        assert_eq!(prompts.removal_asked, vec!["legacy", "legacy/cleanup"]);
        assert!(outcome.config.workflows.contains_key("legacy"));
        assert!(!outcome.config.steps.contains_key("legacy/cleanup"));
        assert_eq!(outcome.removed, vec!["legacy/cleanup"]);
    }

    #[test]
    fn merge_is_deterministic_for_identical_inputs() {
        let mut existing = ProjectConfig::new();
        existing
            .workflows
            .insert("auth".to_string(), "Auth".to_string());
        let scan = scan_with(&[("auth", &["login"])]);

        let a = merge(&existing, &scan, &mut Scripted::new(vec![])).unwrap();
        let b = merge(&existing, &scan, &mut Scripted::new(vec![])).unwrap();
        assert_eq!(a, b);
    }
}
