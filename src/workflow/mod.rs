//! Workflow detection, mapping maintenance, and commit message construction.

pub mod merge;
pub mod resolve;
pub mod scan;

pub use merge::{merge, MergeOutcome, ScanPrompts};
pub use resolve::{build_message, resolve_labels, WorkflowStep};
pub use scan::{scan, DetectedStep, DetectedWorkflow, ProjectScan, MARKER_FILE_NAME};
