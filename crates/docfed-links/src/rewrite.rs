//! Link rewriting for federated content.
//!
//! Documents fetched from the external repository contain links written
//! for that repository's own site. [`LinkRewriter`] redirects links to
//! pages known locally onto local routes and points everything else at
//! the external site's canonical location. The API is total: any parse
//! failure is logged and the input returned verbatim.

use url::Url;

use docfed_content::{FederationConfig, PageRegistry};
use docfed_core::{Error, Result};

/// Synthetic base used to resolve relative references without
/// requiring a real origin.
const PLACEHOLDER_BASE: &str = "https://docfed.invalid/";

/// Rewrites hyperlinks found in federated page content.
#[derive(Debug)]
pub struct LinkRewriter {
    registry: PageRegistry,
    site_root: Url,
}

impl LinkRewriter {
    /// Create a rewriter for an external site root.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `site_root` is not a valid
    /// absolute URL.
    pub fn new(site_root: &str, registry: PageRegistry) -> Result<Self> {
        let site_root = Url::parse(site_root)
            .map_err(|e| Error::config(format!("invalid site root '{site_root}': {e}")))?;
        Ok(Self {
            registry,
            site_root,
        })
    }

    /// Create a rewriter from the federation configuration.
    pub fn from_config(federation: &FederationConfig, registry: PageRegistry) -> Result<Self> {
        Self::new(&federation.site_root, registry)
    }

    /// Rewrite a single URL string. Never fails: on any parse error the
    /// original input is returned unchanged.
    pub fn rewrite(&self, href: &str) -> String {
        match self.try_rewrite(href) {
            Ok(rewritten) => rewritten,
            Err(e) => {
                tracing::warn!(href, error = %e, "link rewrite failed, passing through");
                href.to_string()
            }
        }
    }

    fn try_rewrite(&self, href: &str) -> std::result::Result<String, url::ParseError> {
        // Absolute URLs with a real host (and scheme-only forms like
        // mailto:) are left alone.
        if let Ok(absolute) = Url::parse(href) {
            if absolute.has_host() || absolute.cannot_be_a_base() {
                return Ok(href.to_string());
            }
        }

        // Pure fragments point at the current document root.
        if href.starts_with('#') {
            return Ok(href.to_string());
        }

        let joined = Url::parse(PLACEHOLDER_BASE)?.join(href)?;
        let fragment = match joined.fragment() {
            Some(f) => format!("#{f}"),
            None => String::new(),
        };

        let path = joined.path().trim_start_matches('/');
        let relative_page = match path.strip_suffix(".md") {
            Some(stripped) => stripped,
            None => self.strip_site_root(path),
        };

        match self.registry.by_remote_file(&format!("{relative_page}.md")) {
            Some(mapping) => Ok(format!("{}{}", mapping.slug, fragment)),
            None => Ok(format!(
                "{}/{}{}",
                self.site_root.as_str().trim_end_matches('/'),
                relative_page,
                fragment
            )),
        }
    }

    /// Strip the external site's root path prefix, if present.
    fn strip_site_root<'a>(&self, path: &'a str) -> &'a str {
        let root_path = self.site_root.path().trim_matches('/');
        if root_path.is_empty() {
            return path;
        }
        path.strip_prefix(root_path)
            .map(|rest| rest.trim_start_matches('/'))
            .unwrap_or(path)
    }
}
