//! Static path enumeration.
//!
//! The routing surface is the union of paths derived from the local
//! content tree and the fixed registry slugs, deduplicated. The index
//! page maps to the empty segment list.

use std::collections::HashSet;
use std::path::Path;

use docfed_core::util::files::{self, FindOptions};
use docfed_core::Result;

use crate::registry::PageRegistry;

/// Enumerate every routable segment list.
///
/// Local `.mdx` files contribute their extension-stripped relative
/// paths (`index.mdx` at the root contributes the empty list); each
/// registry slug contributes a single-segment path. Duplicates are
/// dropped, first occurrence wins.
pub async fn enumerate_static_paths(
    content_dir: &Path,
    registry: &PageRegistry,
) -> Result<Vec<Vec<String>>> {
    let mut paths: Vec<Vec<String>> = Vec::new();
    let mut seen: HashSet<Vec<String>> = HashSet::new();

    if files::exists(content_dir).await {
        for file in files::find_all_files(content_dir, FindOptions::mdx()).await? {
            let rel = file.relative_path.with_extension("");
            let segments: Vec<String> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            let segments = if segments == ["index"] {
                Vec::new()
            } else {
                segments
            };
            if seen.insert(segments.clone()) {
                paths.push(segments);
            }
        }
    }

    for slug in registry.slugs() {
        let segments = vec![slug.to_string()];
        if seen.insert(segments.clone()) {
            paths.push(segments);
        }
    }

    Ok(paths)
}
