//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod links;

pub use args::{CheckArgs, Cli, Commands, ExportArgs};
