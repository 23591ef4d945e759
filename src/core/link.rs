//! Link classification utilities.

/// Syntactic classification of links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// External link with URL scheme (https://, mailto:, tel:, etc.)
    External(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/about, /notes/rust/).
    SiteRoot(&'a str),
    /// File-relative path (./image.png, ../other, guide/).
    FileRelative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) {
            Self::External(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if let Some(anchor) = link.strip_prefix("./#") {
            // ./#fragment is semantically equivalent to #fragment
            Self::Fragment(anchor)
        } else if link.starts_with('/') && !link.starts_with("//") {
            Self::SiteRoot(link)
        } else {
            Self::FileRelative(link)
        }
    }

    /// Short label for listings.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::External(_) => "external",
            Self::Fragment(_) => "fragment",
            Self::SiteRoot(_) => "internal",
            Self::FileRelative(_) => "relative",
        }
    }

    /// Check if link is HTTP/HTTPS.
    #[inline]
    pub fn is_http(link: &str) -> bool {
        link.starts_with("http://") || link.starts_with("https://")
    }

    /// Check if the link is an absolute URL the `url` crate accepts.
    pub fn is_absolute_url(link: &str) -> bool {
        is_external_link(link) && url::Url::parse(link).is_ok()
    }
}

/// Check if a link has a URL scheme (`https:`, `mailto:`, ...).
///
/// A valid scheme has at least one character before the colon and only
/// contains ASCII alphanumerics or `+`, `-`, `.`.
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a link into path, query and fragment parts (separators dropped).
///
/// `/notes/?tab=1#intro` -> (`/notes/`, `tab=1`, `intro`)
pub fn split_link(link: &str) -> (&str, &str, &str) {
    let (rest, fragment) = link.split_once('#').unwrap_or((link, ""));
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
    (path, query, fragment)
}
