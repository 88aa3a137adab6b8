//! Workflow glue between command-line arguments and the version rules

pub mod orchestration;

pub use orchestration::{execute_bump, BumpArgs, BumpOutcome};
