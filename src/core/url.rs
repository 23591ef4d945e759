//! Base path type for href resolution.
//!
//! - Links in the config are decoded, site-relative (`/notes/rust/`)
//! - Hrefs handed to the generator are base-prefixed and percent-encoded

use std::sync::Arc;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use super::link::{LinkKind, split_link};

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// URL prefix the site is served under.
///
/// Invariants:
/// - Always starts and ends with `/`
/// - The root base is exactly `/`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasePath(Arc<str>);

impl BasePath {
    /// Normalize a raw `base` literal. Missing slashes are added,
    /// surrounding whitespace and repeated slashes are dropped.
    ///
    /// `"/fish-blog"` -> `/fish-blog/`, `""` -> `/`
    pub fn new(raw: &str) -> Self {
        let segments: Vec<&str> = raw
            .trim()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        if segments.is_empty() {
            return Self(Arc::from("/"));
        }
        Self(Arc::from(format!("/{}/", segments.join("/"))))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve a config link into the href the generator emits.
    ///
    /// - External and fragment links are returned unchanged
    /// - Site-root links are prefixed with the base, their path is encoded,
    ///   query and fragment are kept
    /// - File-relative links have no page to be relative to and are also
    ///   returned unchanged (validation rejects them)
    ///
    /// ```ignore
    /// let base = BasePath::new("/fish-blog");
    /// assert_eq!(base.resolve("/"), "/fish-blog/");
    /// assert_eq!(base.resolve("/notes/rust#ownership"), "/fish-blog/notes/rust#ownership");
    /// ```
    pub fn resolve(&self, link: &str) -> String {
        match LinkKind::parse(link) {
            LinkKind::SiteRoot(link) => self.join(link.trim_start_matches('/'), link),
            LinkKind::External(_) | LinkKind::Fragment(_) | LinkKind::FileRelative(_) => {
                link.to_string()
            }
        }
    }

    /// Join `relative` (no leading slash) onto the base, keeping the query
    /// and fragment found in `original`.
    fn join(&self, relative: &str, original: &str) -> String {
        let (_, query, fragment) = split_link(original);
        let (path, _, _) = split_link(relative);

        let mut href = String::with_capacity(self.0.len() + original.len());
        href.push_str(&self.0);
        href.push_str(&encode_path(path));
        if !query.is_empty() {
            href.push('?');
            href.push_str(query);
        }
        if !fragment.is_empty() {
            href.push('#');
            href.push_str(fragment);
        }
        href
    }
}

/// Percent-encode each segment of a decoded or partially encoded path.
///
/// Segments are decoded first so existing escapes are not doubled.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            let decoded = percent_decode_str(segment).decode_utf8_lossy();
            utf8_percent_encode(&decoded, SEGMENT).to_string()
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Decode a percent-encoded path, leaving invalid UTF-8 untouched.
pub fn decode_path(path: &str) -> String {
    percent_decode_str(path)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl std::fmt::Display for BasePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
