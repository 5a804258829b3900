//! Matching changed files to workflow/step labels and building the commit
//! message.

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::config::ProjectConfig;

/// A matched workflow/step label pair, rendered as `workflow:step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowStep {
    /// Display label of the matched workflow.
    pub workflow: String,
    /// Display label of the matched step.
    pub step: String,
}

impl WorkflowStep {
    /// Builds a label pair from owned-or-borrowed strings.
    pub fn new(workflow: impl Into<String>, step: impl Into<String>) -> Self {
        Self {
            workflow: workflow.into(),
            step: step.into(),
        }
    }
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.workflow, self.step)
    }
}

/// Matches changed file paths against the mapping.
///
/// For each path, the containing directory string is tested against every
/// workflow key and, inside a matched workflow, every step key, by substring
/// containment. Matches are emitted in encounter order and are NOT
/// de-duplicated: a directory matched by two step keys yields two labels,
/// and repeated matches across files repeat in the output.
///
/// Containment is deliberately loose (key `auth` also matches a directory
/// named `authorization`); this mirrors the tool's original matching
/// behavior. See the `man` page note on choosing distinct directory names.
pub fn resolve_labels(changed_paths: &[String], config: &ProjectConfig) -> Vec<WorkflowStep> {
    let mut labels = Vec::new();

    for file in changed_paths {
        let dir = parent_dir(file);
        debug!(file = %file, dir = %dir, "checking changed file");

        for (wf_key, wf_label) in &config.workflows {
            if !dir.contains(wf_key.as_str()) {
                continue;
            }
            debug!(key = %wf_key, label = %wf_label, "matched workflow");

            for (step_key, step_label) in &config.steps {
                if dir.contains(step_key.as_str()) {
                    debug!(key = %step_key, label = %step_label, "matched step");
                    labels.push(WorkflowStep::new(wf_label.clone(), step_label.clone()));
                }
            }
        }
    }

    labels
}

/// Containing directory of a path, as a string. Mirrors `dirname`: a bare
/// file name maps to `.`.
fn parent_dir(path: &str) -> String {
    match Path::new(path).parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_string_lossy().into_owned(),
        _ => ".".to_string(),
    }
}

/// Assembles the final commit message:
/// `<type>[[workflow][step]]... <free text>`.
///
/// One annotation per label, in order; no annotations at all when `labels`
/// is empty. The free text is appended verbatim after a single space.
pub fn build_message(commit_type: &str, labels: &[WorkflowStep], free_text: &str) -> String {
    let mut annotations = String::new();
    for label in labels {
        annotations.push_str(&format!("[[{}][{}]]", label.workflow, label.step));
    }
    format!("{commit_type}{annotations} {free_text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(workflows: &[(&str, &str)], steps: &[(&str, &str)]) -> ProjectConfig {
        let mut config = ProjectConfig::new();
        for (k, v) in workflows {
            config.workflows.insert((*k).to_string(), (*v).to_string());
        }
        for (k, v) in steps {
            config.steps.insert((*k).to_string(), (*v).to_string());
        }
        config
    }

    #[test]
    fn unmapped_paths_resolve_to_nothing() {
        let config = config_with(&[("auth", "Auth")], &[("auth/login", "Login")]);
        let changed = vec!["docs/readme.md".to_string(), "Cargo.toml".to_string()];

        assert!(resolve_labels(&changed, &config).is_empty());
    }

    #[test]
    fn matching_path_yields_workflow_step_pair() {
        let config = config_with(&[("auth", "Auth")], &[("auth/login", "Login")]);
        let changed = vec!["auth/login/handler.rs".to_string()];

        let labels = resolve_labels(&changed, &config);
        assert_eq!(labels, vec![WorkflowStep::new("Auth", "Login")]);
        assert_eq!(labels[0].to_string(), "Auth:Login");
    }

    #[test]
    fn step_match_requires_a_workflow_match_first() {
        // Step key alone matching the directory is not enough.
        let config = config_with(&[("billing", "Billing")], &[("auth/login", "Login")]);
        let changed = vec!["auth/login/handler.rs".to_string()];

        assert!(resolve_labels(&changed, &config).is_empty());
    }

    #[test]
    fn duplicate_matches_are_kept_in_encounter_order() {
        // Both step keys are substrings of the same directory.
        let config = config_with(
            &[("auth", "Auth")],
            &[("auth/login", "Login"), ("auth/login/oauth", "OAuth")],
        );
        let changed = vec!["auth/login/oauth/token.rs".to_string()];

        let labels = resolve_labels(&changed, &config);
        assert_eq!(
            labels,
            vec![
                WorkflowStep::new("Auth", "Login"),
                WorkflowStep::new("Auth", "OAuth"),
            ]
        );
    }

    #[test]
    fn repeated_files_repeat_their_matches() {
        let config = config_with(&[("auth", "Auth")], &[("auth/login", "Login")]);
        let changed = vec![
            "auth/login/a.rs".to_string(),
            "auth/login/b.rs".to_string(),
        ];

        let labels = resolve_labels(&changed, &config);
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn containment_is_substring_not_segment() {
        // Known-loose matching: "auth" matches "authorization".
        let config = config_with(&[("auth", "Auth")], &[("auth/login", "Login")]);
        let changed = vec!["authorization/auth/login/x.rs".to_string()];

        assert!(!resolve_labels(&changed, &config).is_empty());
    }

    #[test]
    fn bare_file_names_use_dot_directory() {
        let config = config_with(&[(".", "Root")], &[(".", "Top")]);
        let changed = vec!["main.rs".to_string()];

        let labels = resolve_labels(&changed, &config);
        assert_eq!(labels, vec![WorkflowStep::new("Root", "Top")]);
    }

    #[test]
    fn build_message_with_one_label() {
        let labels = vec![WorkflowStep::new("Auth", "Login")];
        assert_eq!(
            build_message("fix", &labels, "hello"),
            "fix[[Auth][Login]] hello"
        );
    }

    #[test]
    fn build_message_without_labels_has_no_brackets() {
        assert_eq!(build_message("add", &[], "x"), "add x");
    }

    #[test]
    fn build_message_keeps_free_text_verbatim() {
        let labels = vec![
            WorkflowStep::new("Auth", "Login"),
            WorkflowStep::new("Auth", "Logout"),
        ];
        assert_eq!(
            build_message("change", &labels, "say \"hi\"\nsecond line"),
            "change[[Auth][Login]][[Auth][Logout]] say \"hi\"\nsecond line"
        );
    }
}
