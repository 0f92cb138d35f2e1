//! Atomizer CLI - command-line front end for proposition extraction.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use cli::{Cli, CliFormat};
pub use error::{CliError, Result};
pub use output::Formatter;
