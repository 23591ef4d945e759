//! `notebook check`: config validation plus the link-to-content check.

use anyhow::{Result, bail};

use crate::cli::CheckArgs;
use crate::config::{LinkSource, SiteConfig};
use crate::content::{ContentIndex, LinkReport};
use crate::utils::{plural_count, plural_s};
use crate::{debug, log};

/// Report the loaded config and, with `--content`, verify internal links.
///
/// Structural validation already ran in `SiteConfig::load`.
pub fn check_site(config: &SiteConfig, args: &CheckArgs) -> Result<()> {
    let group_links: usize = config.sidebar.iter().map(|g| g.items.len()).sum();
    log!("check"; "config valid: {}, {} ({}), {}",
        plural_count(config.nav.len(), "nav link"),
        plural_count(config.sidebar.len(), "sidebar group"),
        plural_count(group_links, "link"),
        plural_count(config.social_links.len(), "social link"));

    let Some(content) = &args.content else {
        debug!("check"; "no --content given, skipping link check");
        return Ok(());
    };

    let dir = config.root_join(content);
    if !dir.is_dir() {
        bail!("content directory '{}' not found", dir.display());
    }

    let index = ContentIndex::with_extension(dir, &args.ext);
    let report = check_links(config, &index);

    report.print();
    log!("check"; "{}", report);

    let count = report.error_count();
    if count > 0 && !args.warn_only {
        bail!("check failed: {} broken link{}", count, plural_s(count));
    }
    Ok(())
}

/// Look up every internal link in `index`.
pub fn check_links(config: &SiteConfig, index: &ContentIndex) -> LinkReport {
    let mut report = LinkReport::default();

    for link in config.links().iter().filter(|l| l.is_internal()) {
        match index.lookup(link.link) {
            Some(path) => {
                debug!("check"; "{} -> {}", link.link, path.display());
            }
            None => {
                let tried = index
                    .candidates(link.link)
                    .iter()
                    .filter_map(|p| p.strip_prefix(index.dir()).ok())
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>();
                let reason = if tried.is_empty() {
                    "(outside the content directory)".to_string()
                } else {
                    format!("(tried {})", tried.join(", "))
                };
                report.add(
                    section_name(link.source),
                    link.origin.clone(),
                    link.link.to_string(),
                    reason,
                );
            }
        }
    }

    report
}

const fn section_name(source: LinkSource) -> &'static str {
    match source {
        LinkSource::Nav => "nav",
        LinkSource::Sidebar => "sidebar",
        LinkSource::SocialLinks => "socialLinks",
    }
}
