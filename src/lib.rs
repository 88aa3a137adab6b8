pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod resolver;
pub mod ui;

pub use error::{BumpError, Result};
pub use resolver::{format_version, resolve, resolve_with, ResolutionContext};
