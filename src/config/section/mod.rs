//! Configuration section definitions.
//!
//! Each module corresponds to an array of tables in `notebook.toml`:
//!
//! | Module    | TOML Section       | Purpose                       |
//! |-----------|--------------------|-------------------------------|
//! | `nav`     | `[[nav]]`          | Top navigation entries        |
//! | `sidebar` | `[[sidebar]]`      | Sidebar groups and entries    |
//! | `social`  | `[[socialLinks]]`  | Header icon links             |

mod nav;
mod sidebar;
mod social;

pub use nav::{NavItem, validate_nav};
pub use sidebar::{SidebarGroup, SidebarItem, validate_sidebar};
pub use social::{KNOWN_ICONS, SocialLink, validate_social_links};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::LinkKind;

/// Check that a navigation link is site-relative or an absolute URL.
fn validate_link(link: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if link.trim().is_empty() {
        diag.error(field, "link is empty");
        return;
    }

    match LinkKind::parse(link) {
        LinkKind::SiteRoot(_) => {}
        LinkKind::External(_) if LinkKind::is_absolute_url(link) => {}
        LinkKind::External(_) => {
            diag.error_with_hint(
                field,
                format!("'{link}' is not a valid absolute URL"),
                "use format like https://example.com",
            );
        }
        LinkKind::FileRelative(_) if link.starts_with("//") => {
            diag.error_with_hint(
                field,
                format!("'{link}' is protocol-relative, which needs a scheme"),
                format!("use \"https:{link}\""),
            );
        }
        LinkKind::Fragment(_) | LinkKind::FileRelative(_) => {
            diag.error_with_hint(
                field,
                format!("'{link}' must start with `/` or be an absolute URL"),
                format!("use \"/{}\"", link.trim_start_matches("./")),
            );
        }
    }
}
