//! `[[socialLinks]]` icon links shown in the header.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::core::LinkKind;

/// Icon names the generator ships with.
pub const KNOWN_ICONS: &[&str] = &[
    "bluesky",
    "discord",
    "facebook",
    "github",
    "gitlab",
    "instagram",
    "linkedin",
    "mastodon",
    "npm",
    "rss",
    "slack",
    "twitter",
    "x",
    "youtube",
];

/// Header icon link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "socialLinks")]
pub struct SocialLink {
    /// Built-in icon name, e.g. "github".
    pub icon: String,

    /// Absolute http(s) URL.
    pub link: String,
}

impl SocialLink {
    pub fn new(icon: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            link: link.into(),
        }
    }

    /// Whether the generator has an icon for this entry.
    pub fn is_known_icon(&self) -> bool {
        KNOWN_ICONS.contains(&self.icon.as_str())
    }

    fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        let icon_field = Self::FIELDS.icon.indexed(&[index]);
        if self.icon.trim().is_empty() {
            diag.error_with_hint(
                icon_field,
                "social link has no icon",
                format!("use one of: {}", KNOWN_ICONS.join(", ")),
            );
        } else if !self.is_known_icon() {
            diag.warn(icon_field, format!("unknown icon '{}'", self.icon));
        }

        if !(LinkKind::is_http(&self.link) && LinkKind::is_absolute_url(&self.link)) {
            diag.error_with_hint(
                Self::FIELDS.link.indexed(&[index]),
                format!("'{}' is not an absolute http(s) URL", self.link),
                "use format like https://github.com/<user>",
            );
        }
    }
}

/// Validate every social link.
pub fn validate_social_links(links: &[SocialLink], diag: &mut ConfigDiagnostics) {
    for (i, link) in links.iter().enumerate() {
        link.validate(i, diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_parse_camel_case_key() {
        let config = test_parse_config(
            "[[socialLinks]]\nicon = \"github\"\nlink = \"https://github.com/fish\"",
        );
        assert_eq!(
            config.social_links,
            vec![SocialLink::new("github", "https://github.com/fish")]
        );
    }

    #[test]
    fn test_parse_snake_case_alias() {
        let config = test_parse_config(
            "[[social_links]]\nicon = \"github\"\nlink = \"https://github.com/fish\"",
        );
        assert_eq!(config.social_links.len(), 1);
    }

    #[test]
    fn test_validate_unknown_icon_warns() {
        let mut diag = ConfigDiagnostics::new();
        validate_social_links(
            &[SocialLink::new("myspace", "https://myspace.com/fish")],
            &mut diag,
        );
        assert!(diag.is_empty());
        assert_eq!(diag.warnings()[0].field.as_str(), "socialLinks[0].icon");
    }

    #[test]
    fn test_validate_relative_link_rejected() {
        let mut diag = ConfigDiagnostics::new();
        validate_social_links(&[SocialLink::new("github", "/github")], &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "socialLinks[0].link");
    }

    #[test]
    fn test_validate_empty_icon() {
        let mut diag = ConfigDiagnostics::new();
        validate_social_links(&[SocialLink::new("", "https://github.com/fish")], &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].hint.as_deref().unwrap().contains("github"));
    }
}
