//! Site configuration management for `notebook.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # nav, sidebar, socialLinks entry types
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── links.rs       # flat view over every declared link
//! ├── util.rs        # config discovery, path normalization
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Layout
//!
//! ```toml
//! base = "/fish-blog/"
//! title = "Fish Blog"
//! description = "notes on systems programming"
//!
//! [[nav]]
//! text = "Home"
//! link = "/"
//!
//! [[sidebar]]
//! text = "Rust"
//! items = [{ text = "Ownership", link = "/notes/rust/ownership" }]
//!
//! [[socialLinks]]
//! icon = "github"
//! link = "https://github.com/fish"
//! ```
//!
//! The record is loaded once, validated, and only borrowed afterwards.

mod links;
pub mod section;
pub mod types;
mod util;

pub use links::{ConfigLink, LinkSource};
pub use section::{KNOWN_ICONS, NavItem, SidebarGroup, SidebarItem, SocialLink};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{find_config_file, normalize_path};

use section::{validate_nav, validate_sidebar, validate_social_links};

use crate::cli::Cli;
use crate::core::BasePath;
use crate::{debug, log};
use anyhow::{Context, Result, bail};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Site configuration handed to the static-site generator.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "")]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    #[config(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    #[config(skip)]
    pub root: PathBuf,

    /// URL path prefix the site is served under, starts and ends with `/`.
    pub base: String,

    /// Site display title.
    pub title: String,

    /// Site meta-description.
    pub description: String,

    /// Top navigation entries ({ text, link }).
    pub nav: Vec<NavItem>,

    /// Sidebar groups ({ text, items = [{ text, link }] }).
    pub sidebar: Vec<SidebarGroup>,

    /// Header icon links ({ icon, link }).
    #[serde(rename = "socialLinks", alias = "social_links")]
    #[config(name = "socialLinks")]
    pub social_links: Vec<SocialLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            base: "/".into(),
            title: String::new(),
            description: String::new(),
            nav: Vec::new(),
            sidebar: Vec::new(),
            social_links: Vec::new(),
        }
    }
}

/// Equality covers the record only, not where it was loaded from.
impl PartialEq for SiteConfig {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
            && self.title == other.title
            && self.description == other.description
            && self.nav == other.nav
            && self.sidebar == other.sidebar
            && self.social_links == other.social_links
    }
}

impl Eq for SiteConfig {}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root
    /// is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let Some(config_path) = find_config_file(&cli.config, &cwd) else {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run 'notebook init' to create one",
                cli.config.display()
            )));
        };

        let mut config = Self::from_path(&config_path, cli.strict)?;

        config.config_path = normalize_path(&config_path);
        config.root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        debug!("config"; "loaded {}", config.config_path.display());

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path, strict: bool) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if strict {
                bail!("Aborted due to unknown config fields (--strict)");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Base path used to resolve internal links into hrefs.
    pub fn base_path(&self) -> BasePath {
        BasePath::new(&self.base)
    }

    /// Serialize back to TOML. Parsing the output yields an equal record.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Serialize to JSON with the generator's key names.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the record.
    ///
    /// Prints warnings and returns all errors at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every structural check without printing anything.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.validate_base(&mut diag);
        if self.title.trim().is_empty() {
            diag.warn(Self::FIELDS.title, "site has no title");
        }
        validate_nav(&self.nav, &mut diag);
        validate_sidebar(&self.sidebar, &mut diag);
        validate_social_links(&self.social_links, &mut diag);

        diag
    }

    /// `base` must be a non-empty path literal starting and ending with `/`.
    fn validate_base(&self, diag: &mut ConfigDiagnostics) {
        let base = self.base.as_str();
        let suggestion = BasePath::new(base);

        if base.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.base,
                "base is empty",
                "use \"/\" to serve from the domain root",
            );
            return;
        }

        if base.contains(['?', '#']) || base.contains("://") {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("'{base}' must be a plain path, not a URL"),
                "keep only the path, e.g. \"/fish-blog/\"",
            );
            return;
        }

        if !base.starts_with('/') || !base.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("'{base}' must start and end with `/`"),
                format!("use \"{suggestion}\""),
            );
        } else if base.contains("//") {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("'{base}' contains an empty path segment"),
                format!("use \"{suggestion}\""),
            );
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("title = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
