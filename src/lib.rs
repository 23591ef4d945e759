//! Notebook - site configuration for a technical notebook.
//!
//! Loads `notebook.toml`, validates the navigation, sidebar and metadata it
//! declares, and hands the record (optionally with resolved hrefs) to the
//! static-site generator.

pub mod cli;
pub mod config;
pub mod content;
pub mod core;
pub mod export;
pub mod logger;
pub mod utils;
