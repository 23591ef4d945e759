//! Broken link report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural_s;

/// A single internal link without a backing document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    /// Field path of the entry (e.g. `nav[1]`).
    pub origin: String,
    /// The link as written in the config.
    pub link: String,
    /// Error reason/message.
    pub reason: String,
}

/// Broken links grouped by config section.
#[derive(Debug, Default)]
pub struct LinkReport {
    pub sections: BTreeMap<String, Vec<BrokenLink>>,
}

impl LinkReport {
    /// Add a broken link under `section`.
    pub fn add(&mut self, section: &str, origin: String, link: String, reason: String) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .push(BrokenLink {
                origin,
                link,
                reason,
            });
    }

    /// Total broken link count.
    pub fn error_count(&self) -> usize {
        self.sections.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Print the full report to stderr.
    pub fn print(&self) {
        for (section, errors) in &self.sections {
            eprintln!();
            eprintln!(
                "{} {}",
                section.red().bold(),
                format!("({} broken link{})", errors.len(), plural_s(errors.len())).dimmed()
            );
            for e in errors {
                eprintln!("{}{}{}", "[".dimmed(), e.origin.cyan(), "]".dimmed());
                if e.reason.is_empty() {
                    eprintln!("{} {}", "→".red(), e.link);
                } else {
                    eprintln!("{} {} {}", "→".red(), e.link, e.reason.dimmed());
                }
            }
        }
    }
}

impl fmt::Display for LinkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.error_count();

        if total == 0 {
            write!(f, "{}", "all links resolve to content".green())
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("broken link{}", plural_s(total)).dimmed()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_groups_by_section() {
        let mut report = LinkReport::default();
        assert!(report.is_empty());

        report.add("nav", "nav[1]".into(), "/notes/".into(), String::new());
        report.add(
            "sidebar",
            "sidebar[0].items[2]".into(),
            "/notes/rust/errors".into(),
            "(tried notes/rust/errors.md)".into(),
        );
        report.add("nav", "nav[2]".into(), "/about".into(), String::new());

        assert_eq!(report.error_count(), 3);
        assert_eq!(report.sections["nav"].len(), 2);
        assert_eq!(report.sections["sidebar"][0].origin, "sidebar[0].items[2]");
    }

    #[test]
    fn test_display_summary() {
        let report = LinkReport::default();
        assert!(format!("{report}").contains("all links resolve to content"));
    }
}
