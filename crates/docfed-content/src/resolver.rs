//! Content resolution.
//!
//! Given an ordered list of route segments, [`ContentResolver`] decides
//! whether the page comes from the local `.mdx` content tree or from the
//! federated external repository, and normalizes both into a uniform
//! [`ResolvedPage`].

use std::path::{Path, PathBuf};

use serde::Serialize;

use docfed_core::util::files;
use docfed_core::{Error, Result};

use crate::config::FederationConfig;
use crate::fetch::RemoteFetcher;
use crate::frontmatter::{self, PageMeta};
use crate::registry::{PageMapping, PageRegistry};

/// Where a requested page's content lives, decided once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    /// Page is served from the local content tree.
    Local {
        /// Full filesystem path of the `.mdx` file.
        path: PathBuf,
    },
    /// Page is federated from the external repository.
    External {
        /// Mapping entry that matched the requested slug.
        mapping: PageMapping,
    },
}

impl PageSource {
    /// Classify a request. External iff the first segment exactly
    /// matches a registry slug; everything else is local.
    ///
    /// # Errors
    ///
    /// Segments that would escape the content tree (`.`, `..`, or
    /// embedded path separators) fail with a not-found error before
    /// any path is built.
    pub fn classify(segments: &[&str], registry: &PageRegistry, content_dir: &Path) -> Result<Self> {
        if let Some(mapping) = segments.first().and_then(|s| registry.by_slug(s)) {
            return Ok(Self::External {
                mapping: mapping.clone(),
            });
        }
        for segment in segments {
            if *segment == "." || *segment == ".." || segment.contains(['/', '\\']) {
                return Err(Error::not_found("page", segments.join("/")));
            }
        }
        Ok(Self::Local {
            path: content_dir.join(format!("{}.mdx", joined_page(segments))),
        })
    }
}

/// Uniform page shape handed to the rendering layer. One per request.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPage {
    /// Request pathname, `/`-joined segments.
    pub pathname: String,
    /// True iff the page is federated.
    pub is_external: bool,
    /// Canonical source location: repo-relative path for local pages,
    /// repository blob URL for federated ones.
    pub edit_link: String,
    /// Page metadata. Front-matter for local pages, the static mapping
    /// title for federated ones.
    pub meta: PageMeta,
    /// Raw Markdown content.
    pub content: String,
}

/// Resolves route segments into pages.
///
/// Holds the immutable configuration (content directory, federation
/// tuple, page registry) and a [`RemoteFetcher`]; performs at most one
/// blocking I/O operation per invocation and shares no mutable state
/// across requests.
pub struct ContentResolver<F: RemoteFetcher> {
    content_dir: PathBuf,
    federation: FederationConfig,
    registry: PageRegistry,
    fetcher: F,
}

impl<F: RemoteFetcher> ContentResolver<F> {
    /// Create a resolver over a local content directory and a
    /// federation source.
    pub fn new(
        content_dir: impl Into<PathBuf>,
        federation: FederationConfig,
        registry: PageRegistry,
        fetcher: F,
    ) -> Self {
        Self {
            content_dir: content_dir.into(),
            federation,
            registry,
            fetcher,
        }
    }

    /// The page mapping table.
    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    /// The local content directory.
    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Resolve route segments into a [`ResolvedPage`].
    ///
    /// # Errors
    ///
    /// - Federated page: a failed fetch propagates as [`docfed_core::Error::Fetch`].
    /// - Local page: a missing file propagates as an I/O error; a
    ///   missing or invalid front-matter header fails with
    ///   [`docfed_core::Error::InvalidFrontmatter`].
    /// - Traversal segments (`.`, `..`, embedded separators) fail as
    ///   not found without touching the filesystem.
    pub async fn resolve(&self, segments: &[&str]) -> Result<ResolvedPage> {
        let pathname = format!("/{}", segments.join("/"));

        match PageSource::classify(segments, &self.registry, &self.content_dir)? {
            PageSource::External { mapping } => {
                let url = self.federation.raw_url(&mapping.remote_file);
                tracing::debug!(slug = %mapping.slug, %url, "resolving federated page");
                let content = self.fetcher.fetch_raw(&url).await?;
                Ok(ResolvedPage {
                    pathname,
                    is_external: true,
                    edit_link: self.federation.blob_url(&mapping.remote_file),
                    meta: PageMeta {
                        title: mapping.title,
                        description: None,
                    },
                    content,
                })
            }
            PageSource::Local { path } => {
                tracing::debug!(path = %path.display(), "resolving local page");
                let raw = files::read_file(&path).await?;
                let fm = frontmatter::parse(&raw)?;
                Ok(ResolvedPage {
                    pathname,
                    is_external: false,
                    edit_link: self.federation.local_edit_link(&joined_page(segments)),
                    meta: fm.meta,
                    content: fm.body,
                })
            }
        }
    }
}

/// Segments joined for path building; empty segments mean the index page.
fn joined_page(segments: &[&str]) -> String {
    if segments.is_empty() {
        "index".to_string()
    } else {
        segments.join("/")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fetch::mock::MockFetcher;
    use docfed_core::Error;
    use tempfile::TempDir;

    fn federation() -> FederationConfig {
        FederationConfig {
            host: "raw.githubusercontent.com".into(),
            org: "acme".into(),
            repo: "wrappers".into(),
            branch: "main".into(),
            docs_dir: "docs".into(),
            site_root: "https://acme.github.io/wrappers".into(),
            local_edit_root: "docs/content".into(),
        }
    }

    fn registry() -> PageRegistry {
        PageRegistry::new(vec![PageMapping {
            slug: "s3".into(),
            title: "Amazon S3".into(),
            remote_file: "s3.md".into(),
        }])
    }

    async fn write_page(dir: &TempDir, rel: &str, content: &str) {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.unwrap();
        }
        tokio::fs::write(path, content).await.unwrap();
    }

    #[test]
    fn test_classify_external_on_first_segment() {
        let reg = registry();
        let source = PageSource::classify(&["s3"], &reg, Path::new("/content")).unwrap();
        assert!(matches!(source, PageSource::External { .. }));
    }

    #[test]
    fn test_classify_local_builds_mdx_path() {
        let reg = registry();
        let source = PageSource::classify(&["connecting"], &reg, Path::new("/content")).unwrap();
        assert_eq!(
            source,
            PageSource::Local {
                path: PathBuf::from("/content/connecting.mdx")
            }
        );
    }

    #[test]
    fn test_classify_empty_segments_is_index() {
        let reg = registry();
        let source = PageSource::classify(&[], &reg, Path::new("/content")).unwrap();
        assert_eq!(
            source,
            PageSource::Local {
                path: PathBuf::from("/content/index.mdx")
            }
        );
    }

    #[test]
    fn test_classify_rejects_traversal_segments() {
        let reg = registry();
        for segments in [
            vec!["..", "secret"],
            vec!["guides", ".."],
            vec!["."],
            vec!["a/b"],
            vec!["a\\b"],
        ] {
            let err = PageSource::classify(&segments, &reg, Path::new("/content")).unwrap_err();
            assert!(err.is_not_found(), "segments {segments:?} must be rejected");
        }
    }

    #[tokio::test]
    async fn test_resolve_external_page() {
        let temp = TempDir::new().unwrap();
        let fetcher = MockFetcher::new().with_page(
            "https://raw.githubusercontent.com/acme/wrappers/main/docs/s3.md",
            "# S3 wrapper\n",
        );
        let resolver = ContentResolver::new(temp.path(), federation(), registry(), fetcher);

        let page = resolver.resolve(&["s3"]).await.unwrap();
        assert!(page.is_external);
        assert_eq!(page.pathname, "/s3");
        assert_eq!(page.meta.title, "Amazon S3");
        assert_eq!(page.content, "# S3 wrapper\n");
        assert_eq!(
            page.edit_link,
            "https://github.com/acme/wrappers/blob/main/docs/s3.md"
        );
    }

    #[tokio::test]
    async fn test_resolve_external_fetch_failure_propagates() {
        let temp = TempDir::new().unwrap();
        // No canned response registered: the fetch fails.
        let resolver =
            ContentResolver::new(temp.path(), federation(), registry(), MockFetcher::new());

        let err = resolver.resolve(&["s3"]).await.unwrap_err();
        assert!(matches!(err, Error::Fetch { .. }));
    }

    #[tokio::test]
    async fn test_resolve_local_page() {
        let temp = TempDir::new().unwrap();
        write_page(
            &temp,
            "connecting.mdx",
            "---\ntitle: Connecting\ndescription: How to connect\n---\nBody text\n",
        )
        .await;
        let resolver =
            ContentResolver::new(temp.path(), federation(), registry(), MockFetcher::new());

        let page = resolver.resolve(&["connecting"]).await.unwrap();
        assert!(!page.is_external);
        assert_eq!(page.meta.title, "Connecting");
        assert_eq!(page.meta.description.as_deref(), Some("How to connect"));
        assert_eq!(page.content, "Body text\n");
        assert_eq!(page.edit_link, "docs/content/connecting.mdx");
    }

    #[tokio::test]
    async fn test_resolve_empty_segments_reads_index() {
        let temp = TempDir::new().unwrap();
        write_page(&temp, "index.mdx", "---\ntitle: Overview\n---\nWelcome\n").await;
        let resolver =
            ContentResolver::new(temp.path(), federation(), registry(), MockFetcher::new());

        let page = resolver.resolve(&[]).await.unwrap();
        assert!(!page.is_external);
        assert_eq!(page.meta.title, "Overview");
        assert_eq!(page.edit_link, "docs/content/index.mdx");
    }

    #[tokio::test]
    async fn test_resolve_nested_local_page() {
        let temp = TempDir::new().unwrap();
        write_page(
            &temp,
            "guides/setup.mdx",
            "---\ntitle: Setup\n---\nSteps\n",
        )
        .await;
        let resolver =
            ContentResolver::new(temp.path(), federation(), registry(), MockFetcher::new());

        let page = resolver.resolve(&["guides", "setup"]).await.unwrap();
        assert_eq!(page.pathname, "/guides/setup");
        assert_eq!(page.edit_link, "docs/content/guides/setup.mdx");
    }

    #[tokio::test]
    async fn test_resolve_local_invalid_frontmatter() {
        let temp = TempDir::new().unwrap();
        write_page(&temp, "broken.mdx", "---\ndescription: missing title\n---\nx").await;
        let resolver =
            ContentResolver::new(temp.path(), federation(), registry(), MockFetcher::new());

        let err = resolver.resolve(&["broken"]).await.unwrap_err();
        assert!(matches!(err, Error::InvalidFrontmatter(_)));
    }

    #[tokio::test]
    async fn test_resolve_dotdot_cannot_escape_content_dir() {
        let temp = TempDir::new().unwrap();
        let content = temp.path().join("content");
        tokio::fs::create_dir(&content).await.unwrap();
        // A sibling of the content dir must stay unreachable.
        write_page(&temp, "secret.mdx", "---\ntitle: Secret\n---\nouter").await;
        let resolver =
            ContentResolver::new(&content, federation(), registry(), MockFetcher::new());

        let err = resolver.resolve(&["..", "secret"]).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_resolve_missing_local_page_is_not_found() {
        let temp = TempDir::new().unwrap();
        let resolver =
            ContentResolver::new(temp.path(), federation(), registry(), MockFetcher::new());

        let err = resolver.resolve(&["nope"]).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
