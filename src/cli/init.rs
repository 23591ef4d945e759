//! Starter config generation.

use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::SiteConfig;
use crate::log;

/// Commented example appended after the generated defaults.
const EXAMPLE_ENTRIES: &str = r#"
# Replace the empty arrays above with entries, e.g.:
#
# [[nav]]
# text = "Home"
# link = "/"
#
# [[sidebar]]
# text = "Rust"
# items = [
#     { text = "Ownership", link = "/notes/rust/ownership" },
# ]
#
# [[socialLinks]]
# icon = "github"
# link = "https://github.com/<user>"
"#;

/// Generate notebook.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# notebook configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(&SiteConfig::template_with_header());
    out.push_str(EXAMPLE_ENTRIES);

    out
}

/// Write the starter config into `root`, returning its path.
pub fn write_config(root: &Path, config_name: &Path, force: bool) -> Result<PathBuf> {
    let path = root.join(config_name);
    if path.exists() && !force {
        bail!(
            "'{}' already exists, pass --force to overwrite",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(path)
}

/// `notebook init [NAME]`
pub fn new_site(name: Option<&Path>, config_name: &Path, force: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = match name {
        Some(name) => cwd.join(name),
        None => cwd,
    };

    let path = write_config(&root, config_name, force)?;
    log!("init"; "created {}", path.display());
    Ok(())
}
