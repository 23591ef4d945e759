//! `[[sidebar]]` groups shown in the side panel.
//!
//! # Example
//!
//! ```toml
//! [[sidebar]]
//! text = "Rust"
//! items = [
//!     { text = "Ownership", link = "/notes/rust/ownership" },
//!     { text = "Async", link = "/notes/rust/async" },
//! ]
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use super::validate_link;
use crate::config::ConfigDiagnostics;

/// Named collection of sidebar links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "sidebar")]
pub struct SidebarGroup {
    /// Group heading.
    pub text: String,

    /// Entries of the group, in display order. Must not be empty.
    pub items: Vec<SidebarItem>,
}

/// Single sidebar entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "sidebar.items")]
pub struct SidebarItem {
    /// Label shown in the sidebar.
    pub text: String,

    /// Site-relative path or absolute URL.
    pub link: String,
}

impl SidebarItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self {
            text: text.into(),
            items,
        }
    }

    fn validate(&self, group: usize, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(
                Self::FIELDS.text.indexed(&[group]),
                "sidebar group has no text",
            );
        }

        if self.items.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.items.indexed(&[group]),
                "sidebar group has no items",
                "add at least one { text, link } entry or remove the group",
            );
        }

        for (i, item) in self.items.iter().enumerate() {
            if item.text.trim().is_empty() {
                diag.error(
                    SidebarItem::FIELDS.text.indexed(&[group, i]),
                    "sidebar entry has no text",
                );
            }
            validate_link(
                &item.link,
                SidebarItem::FIELDS.link.indexed(&[group, i]),
                diag,
            );
        }
    }
}

/// Validate every sidebar group and its entries.
pub fn validate_sidebar(sidebar: &[SidebarGroup], diag: &mut ConfigDiagnostics) {
    for (i, group) in sidebar.iter().enumerate() {
        group.validate(i, diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_parse_inline_items() {
        let config = test_parse_config(
            r#"
[[sidebar]]
text = "Rust"
items = [
    { text = "Ownership", link = "/notes/rust/ownership" },
    { text = "Async", link = "/notes/rust/async" },
]
"#,
        );
        assert_eq!(config.sidebar.len(), 1);
        assert_eq!(config.sidebar[0].text, "Rust");
        assert_eq!(config.sidebar[0].items[1].link, "/notes/rust/async");
    }

    #[test]
    fn test_parse_item_tables() {
        let config = test_parse_config(
            r#"
[[sidebar]]
text = "Linux"

[[sidebar.items]]
text = "Namespaces"
link = "/notes/linux/namespaces"
"#,
        );
        assert_eq!(
            config.sidebar[0].items,
            vec![SidebarItem::new("Namespaces", "/notes/linux/namespaces")]
        );
    }

    #[test]
    fn test_validate_empty_items() {
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(
            &[
                SidebarGroup::new("Rust", vec![SidebarItem::new("Async", "/notes/rust/async")]),
                SidebarGroup::new("Empty", Vec::new()),
            ],
            &mut diag,
        );
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "sidebar[1].items");
    }

    #[test]
    fn test_validate_item_link_path() {
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(
            &[SidebarGroup::new(
                "Rust",
                vec![
                    SidebarItem::new("Async", "/notes/rust/async"),
                    SidebarItem::new("Broken", "rust/broken"),
                ],
            )],
            &mut diag,
        );
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "sidebar[0].items[1].link");
    }
}
