//! Utility functions and helpers

pub mod output;

pub use output::{print_error, print_info, print_success, print_warning};
