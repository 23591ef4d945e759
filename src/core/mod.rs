//! Core types - pure abstractions shared across the codebase.

mod link;
mod url;

pub use link::{LinkKind, is_external_link, split_link};
pub use url::{BasePath, decode_path, encode_path};
