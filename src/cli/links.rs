//! `notebook links`: every declared link with its resolved href.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::config::SiteConfig;

/// One output row.
#[derive(Debug, Serialize)]
pub struct LinkRow<'a> {
    pub origin: String,
    pub kind: &'static str,
    pub text: &'a str,
    pub link: &'a str,
    pub href: String,
}

/// Collect rows in document order.
pub fn link_rows(config: &SiteConfig) -> Vec<LinkRow<'_>> {
    let base = config.base_path();
    config
        .links()
        .into_iter()
        .map(|link| LinkRow {
            kind: link.kind().label(),
            href: link.href(&base),
            origin: link.origin,
            text: link.text,
            link: link.link,
        })
        .collect()
}

pub fn list_links(config: &SiteConfig, json: bool) -> Result<()> {
    let rows = link_rows(config);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let width = rows.iter().map(|r| r.origin.len()).max().unwrap_or(0);
    for row in &rows {
        println!(
            "{:<width$}  {:<8}  {}  {}",
            row.origin.cyan(),
            row.kind,
            row.href,
            row.text.dimmed(),
            width = width
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_link_rows() {
        let config = test_parse_config(
            r#"
base = "/fish-blog/"

[[nav]]
text = "Home"
link = "/"

[[socialLinks]]
icon = "github"
link = "https://github.com/fish"
"#,
        );
        let rows = link_rows(&config);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].origin, "nav[0]");
        assert_eq!(rows[0].kind, "internal");
        assert_eq!(rows[0].href, "/fish-blog/");
        assert_eq!(rows[1].kind, "external");
        assert_eq!(rows[1].text, "github");
    }

    #[test]
    fn test_link_rows_json_shape() {
        let config = test_parse_config("[[nav]]\ntext = \"Home\"\nlink = \"/\"");
        let json = serde_json::to_value(link_rows(&config)).unwrap();
        assert_eq!(json[0]["origin"], "nav[0]");
        assert_eq!(json[0]["href"], "/");
    }
}
