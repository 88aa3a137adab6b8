//! Terminal output.
//!
//! Stdout carries nothing but the version string so it can be captured by
//! build scripts; every diagnostic goes to stderr.

use console::style;

use crate::boundary::BoundaryWarning;

/// Print the computed version on stdout
pub fn display_version(version: &str) {
    println!("{}", version);
}

/// Format an error message with a red prefix
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("error:").red().bold(), message)
}

/// Format a boundary warning with a yellow prefix
pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("warning:").yellow().bold(), warning)
}

pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", format_boundary_warning(warning));
}
