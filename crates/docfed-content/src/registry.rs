//! Static page mapping registry.
//!
//! A [`PageRegistry`] is the immutable table mapping local route slugs
//! to titles and remote document filenames. It is defined once at
//! process start (from configuration) and fully determines which pages
//! are federated: a requested slug is external iff it appears here.

use serde::{Deserialize, Serialize};

/// One entry of the page mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMapping {
    /// Local route segment, e.g. `"s3"`.
    pub slug: String,
    /// Page title used as static metadata for the federated page.
    pub title: String,
    /// Document filename in the external repository, e.g. `"s3.md"`.
    pub remote_file: String,
}

/// Immutable lookup table over [`PageMapping`] entries.
///
/// Lookups are exact-match only, in both directions: by local slug
/// (content resolution) and by remote filename (link rewriting).
#[derive(Debug, Clone, Default)]
pub struct PageRegistry {
    entries: Vec<PageMapping>,
}

impl PageRegistry {
    /// Build a registry from mapping entries.
    pub fn new(entries: Vec<PageMapping>) -> Self {
        Self { entries }
    }

    /// Look up an entry by its local slug. Exact match only.
    pub fn by_slug(&self, slug: &str) -> Option<&PageMapping> {
        self.entries.iter().find(|m| m.slug == slug)
    }

    /// Look up an entry by its remote document filename. Exact match only.
    pub fn by_remote_file(&self, remote_file: &str) -> Option<&PageMapping> {
        self.entries.iter().find(|m| m.remote_file == remote_file)
    }

    /// Iterate over the local slugs in table order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|m| m.slug.as_str())
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = &PageMapping> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
