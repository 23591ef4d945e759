//! Serializing the record for the generator.
//!
//! The default export is the record exactly as loaded. `resolved` swaps
//! every internal link for its base-prefixed href, for consumers that do not
//! apply `base` themselves.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::config::SiteConfig;
use crate::core::BasePath;

/// Output format for `notebook export`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON with the generator's key names (`socialLinks`).
    #[default]
    Json,
    /// TOML, same layout as `notebook.toml`.
    Toml,
}

/// Copy of `config` with every link replaced by its href.
pub fn resolve_links(config: &SiteConfig) -> SiteConfig {
    let base = config.base_path();
    let mut resolved = config.clone();

    for item in &mut resolved.nav {
        item.link = base.resolve(&item.link);
    }
    for group in &mut resolved.sidebar {
        for item in &mut group.items {
            item.link = base.resolve(&item.link);
        }
    }
    for social in &mut resolved.social_links {
        social.link = base.resolve(&social.link);
    }
    resolved.base = BasePath::new(&config.base).to_string();
    resolved
}

/// Render the record in `format`.
pub fn render(
    config: &SiteConfig,
    format: ExportFormat,
    resolved: bool,
    pretty: bool,
) -> Result<String> {
    let resolved_config;
    let record = if resolved {
        resolved_config = resolve_links(config);
        &resolved_config
    } else {
        config
    };

    match format {
        ExportFormat::Json => record.to_json(pretty),
        ExportFormat::Toml => record.to_toml(),
    }
}

/// Write `content` to `output`, or stdout when no path is given.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create '{}'", path.display()))?;
            writeln!(file, "{}", content.trim_end())?;
        }
        None => println!("{}", content.trim_end()),
    }
    Ok(())
}
