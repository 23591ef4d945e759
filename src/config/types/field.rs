//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A config field path such as `sidebar.items.link`.
///
/// Static paths come from `#[derive(Config)]`:
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "nav")]
/// pub struct NavItem {
///     pub text: String,
///     pub link: String,
/// }
///
/// diag.error(NavItem::FIELDS.link.indexed(&[2]), "must start with `/`");
/// // reported as `nav[2].link`
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Attach sequence indices to the leading segments of the path.
    ///
    /// `sidebar.items.link` with `[1, 0]` becomes `sidebar[1].items[0].link`.
    /// Indices beyond the segment count are ignored.
    pub fn indexed(&self, indices: &[usize]) -> Self {
        let mut out = String::with_capacity(self.0.len() + indices.len() * 4);
        for (i, segment) in self.0.split('.').enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push_str(segment);
            if let Some(index) = indices.get(i) {
                out.push_str(&format!("[{index}]"));
            }
        }
        Self(Cow::Owned(out))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}
