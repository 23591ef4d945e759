//! Flat view over every link declared in the config.

use serde::Serialize;

use super::SiteConfig;
use crate::core::{BasePath, LinkKind};

/// Where a link was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkSource {
    Nav,
    Sidebar,
    SocialLinks,
}

/// A link together with its origin in the config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigLink<'a> {
    pub source: LinkSource,
    /// Field path of the entry, e.g. `sidebar[1].items[0]`.
    pub origin: String,
    /// Entry label (`text` for nav/sidebar, `icon` for social links).
    pub text: &'a str,
    pub link: &'a str,
}

impl ConfigLink<'_> {
    pub fn kind(&self) -> LinkKind<'_> {
        LinkKind::parse(self.link)
    }

    /// Site-root links are the ones the generator maps to content.
    pub fn is_internal(&self) -> bool {
        matches!(self.kind(), LinkKind::SiteRoot(_))
    }

    pub fn href(&self, base: &BasePath) -> String {
        base.resolve(self.link)
    }
}

impl SiteConfig {
    /// Every link in document order: nav, sidebar, social links.
    pub fn links(&self) -> Vec<ConfigLink<'_>> {
        let mut links = Vec::new();

        for (i, item) in self.nav.iter().enumerate() {
            links.push(ConfigLink {
                source: LinkSource::Nav,
                origin: format!("nav[{i}]"),
                text: &item.text,
                link: &item.link,
            });
        }

        for (g, group) in self.sidebar.iter().enumerate() {
            for (i, item) in group.items.iter().enumerate() {
                links.push(ConfigLink {
                    source: LinkSource::Sidebar,
                    origin: format!("sidebar[{g}].items[{i}]"),
                    text: &item.text,
                    link: &item.link,
                });
            }
        }

        for (i, social) in self.social_links.iter().enumerate() {
            links.push(ConfigLink {
                source: LinkSource::SocialLinks,
                origin: format!("socialLinks[{i}]"),
                text: &social.icon,
                link: &social.link,
            });
        }

        links
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_links_document_order() {
        let config = test_parse_config(
            r#"
base = "/fish-blog/"

[[nav]]
text = "Home"
link = "/"

[[sidebar]]
text = "Rust"
items = [{ text = "Async", link = "/notes/rust/async" }]

[[socialLinks]]
icon = "github"
link = "https://github.com/fish"
"#,
        );

        let links = config.links();
        let origins: Vec<_> = links.iter().map(|l| l.origin.as_str()).collect();
        assert_eq!(origins, ["nav[0]", "sidebar[0].items[0]", "socialLinks[0]"]);

        assert!(links[0].is_internal());
        assert!(links[1].is_internal());
        assert!(!links[2].is_internal());

        let base = config.base_path();
        assert_eq!(links[0].href(&base), "/fish-blog/");
        assert_eq!(links[1].href(&base), "/fish-blog/notes/rust/async");
        assert_eq!(links[2].href(&base), "https://github.com/fish");
    }
}
