//! Mapping internal links to content documents.
//!
//! The generator serves `notes/rust.md` at `/notes/rust` and
//! `notes/index.md` at `/notes/`. This module mirrors that routing so broken
//! navigation can be caught before the generator runs.
//!
//! | Link             | Candidates                               |
//! |------------------|------------------------------------------|
//! | `/`              | `index.md`                               |
//! | `/notes/`        | `notes/index.md`                         |
//! | `/notes/rust`    | `notes/rust.md`, `notes/rust/index.md`   |
//! | `/about.html`    | `about.md`, `about/index.md`             |

mod report;

pub use report::{BrokenLink, LinkReport};

use std::path::{Path, PathBuf};

use crate::core::{LinkKind, decode_path, split_link};

/// Default content document extension.
pub const CONTENT_EXTENSION: &str = "md";

/// Content directory the generator reads documents from.
#[derive(Debug, Clone)]
pub struct ContentIndex {
    dir: PathBuf,
    extension: String,
}

impl ContentIndex {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_extension(dir, CONTENT_EXTENSION)
    }

    pub fn with_extension(dir: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Documents that could back `link`, most specific first.
    ///
    /// Returns an empty list for links that are not site-root paths or that
    /// try to leave the content directory.
    pub fn candidates(&self, link: &str) -> Vec<PathBuf> {
        let LinkKind::SiteRoot(link) = LinkKind::parse(link) else {
            return Vec::new();
        };

        let (path, _, _) = split_link(link);
        let decoded = decode_path(path);
        let relative = decoded.trim_start_matches('/');

        if relative.split('/').any(|segment| segment == "..") {
            return Vec::new();
        }

        let index = format!("index.{}", self.extension);
        if relative.is_empty() {
            return vec![self.dir.join(index)];
        }
        if relative.ends_with('/') {
            return vec![self.dir.join(relative).join(index)];
        }

        let source_suffix = format!(".{}", self.extension);
        if relative.ends_with(&source_suffix) {
            return vec![self.dir.join(relative)];
        }

        let stem = relative.strip_suffix(".html").unwrap_or(relative);
        vec![
            self.dir.join(format!("{stem}{source_suffix}")),
            self.dir.join(stem).join(index),
        ]
    }

    /// First existing document for `link`.
    pub fn lookup(&self, link: &str) -> Option<PathBuf> {
        self.candidates(link).into_iter().find(|path| path.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site() -> (TempDir, ContentIndex) {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("notes/rust")).unwrap();
        fs::create_dir_all(root.join("guide")).unwrap();
        fs::write(root.join("index.md"), "# home").unwrap();
        fs::write(root.join("about.md"), "# about").unwrap();
        fs::write(root.join("notes/index.md"), "# notes").unwrap();
        fs::write(root.join("notes/rust/async.md"), "# async").unwrap();
        fs::write(root.join("guide/index.md"), "# guide").unwrap();
        let index = ContentIndex::new(root);
        (temp, index)
    }

    #[test]
    fn test_candidates_root() {
        let index = ContentIndex::new("/site");
        assert_eq!(index.candidates("/"), vec![PathBuf::from("/site/index.md")]);
    }

    #[test]
    fn test_candidates_directory() {
        let index = ContentIndex::new("/site");
        assert_eq!(
            index.candidates("/notes/"),
            vec![PathBuf::from("/site/notes/index.md")]
        );
    }

    #[test]
    fn test_candidates_page() {
        let index = ContentIndex::new("/site");
        assert_eq!(
            index.candidates("/notes/rust#ownership"),
            vec![
                PathBuf::from("/site/notes/rust.md"),
                PathBuf::from("/site/notes/rust/index.md"),
            ]
        );
        assert_eq!(
            index.candidates("/about.html"),
            vec![
                PathBuf::from("/site/about.md"),
                PathBuf::from("/site/about/index.md"),
            ]
        );
    }

    #[test]
    fn test_candidates_skip_non_internal() {
        let index = ContentIndex::new("/site");
        assert!(index.candidates("https://github.com/fish").is_empty());
        assert!(index.candidates("#top").is_empty());
        assert!(index.candidates("/../etc/passwd").is_empty());
    }

    #[test]
    fn test_candidates_custom_extension() {
        let index = ContentIndex::with_extension("/site", ".typ");
        assert_eq!(
            index.candidates("/notes/"),
            vec![PathBuf::from("/site/notes/index.typ")]
        );
    }

    #[test]
    fn test_lookup_existing() {
        let (temp, index) = site();
        assert_eq!(index.lookup("/"), Some(temp.path().join("index.md")));
        assert_eq!(index.lookup("/about"), Some(temp.path().join("about.md")));
        assert_eq!(
            index.lookup("/notes/rust/async"),
            Some(temp.path().join("notes/rust/async.md"))
        );
        assert_eq!(
            index.lookup("/guide"),
            Some(temp.path().join("guide/index.md"))
        );
    }

    #[test]
    fn test_lookup_missing() {
        let (_temp, index) = site();
        assert_eq!(index.lookup("/notes/rust/ownership"), None);
        assert_eq!(index.lookup("/rust/"), None);
    }

    #[test]
    fn test_lookup_percent_encoded() {
        let (temp, index) = site();
        fs::write(temp.path().join("hello world.md"), "# hi").unwrap();
        assert_eq!(
            index.lookup("/hello%20world"),
            Some(temp.path().join("hello world.md"))
        );
    }
}
