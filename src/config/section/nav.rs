//! `[[nav]]` top navigation entries.
//!
//! # Example
//!
//! ```toml
//! [[nav]]
//! text = "Home"
//! link = "/"
//!
//! [[nav]]
//! text = "Notes"
//! link = "/notes/"
//! ```

use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::validate_link;
use crate::config::ConfigDiagnostics;

/// Top navigation entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "nav")]
pub struct NavItem {
    /// Label shown in the navigation bar.
    pub text: String,

    /// Site-relative path (`/notes/`) or absolute URL.
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(
                Self::FIELDS.text.indexed(&[index]),
                "navigation entry has no text",
            );
        }
        validate_link(&self.link, Self::FIELDS.link.indexed(&[index]), diag);
    }
}

/// Validate every navigation entry and warn about repeated links.
pub fn validate_nav(nav: &[NavItem], diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();
    for (i, item) in nav.iter().enumerate() {
        item.validate(i, diag);
        if !item.link.is_empty() && !seen.insert(item.link.as_str()) {
            diag.warn(
                NavItem::FIELDS.link.indexed(&[i]),
                format!("link '{}' already appears earlier in nav", item.link),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.nav.is_empty());
    }

    #[test]
    fn test_parse_order_preserved() {
        let config = test_parse_config(
            r#"
[[nav]]
text = "Home"
link = "/"

[[nav]]
text = "Notes"
link = "/notes/"
"#,
        );
        assert_eq!(
            config.nav,
            vec![NavItem::new("Home", "/"), NavItem::new("Notes", "/notes/")]
        );
    }

    #[test]
    fn test_validate_bad_link() {
        let mut diag = ConfigDiagnostics::new();
        validate_nav(&[NavItem::new("Notes", "notes/")], &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "nav[0].link");
    }

    #[test]
    fn test_validate_empty_text() {
        let mut diag = ConfigDiagnostics::new();
        validate_nav(
            &[NavItem::new("Home", "/"), NavItem::new("  ", "/notes/")],
            &mut diag,
        );
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "nav[1].text");
    }

    #[test]
    fn test_validate_duplicate_link_warns() {
        let mut diag = ConfigDiagnostics::new();
        validate_nav(
            &[NavItem::new("Home", "/"), NavItem::new("Start", "/")],
            &mut diag,
        );
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].field.as_str(), "nav[1].link");
    }
}
