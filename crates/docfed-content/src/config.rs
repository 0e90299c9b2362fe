//! Federation configuration.
//!
//! [`FederationConfig`] is the fixed `{org, repo, branch, docs_dir}`
//! tuple (plus the external site root and edit-link roots) that the
//! resolver and link rewriter receive as an explicit immutable value.
//! Nothing here is ambient module state; both components stay pure and
//! independently testable.

use serde::{Deserialize, Serialize};

/// Where federated documentation lives and how to link back to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FederationConfig {
    /// Raw-content host, e.g. `raw.githubusercontent.com`.
    pub host: String,
    /// Repository organization.
    pub org: String,
    /// Repository name.
    pub repo: String,
    /// Branch to fetch from.
    pub branch: String,
    /// Directory within the repository holding the documents.
    pub docs_dir: String,
    /// Canonical root URL of the external documentation site.
    pub site_root: String,
    /// Repo-relative root of the local content tree, used for edit links.
    pub local_edit_root: String,
}

impl Default for FederationConfig {
    fn default() -> Self {
        Self {
            host: "raw.githubusercontent.com".to_string(),
            org: "example".to_string(),
            repo: "wrappers".to_string(),
            branch: "main".to_string(),
            docs_dir: "docs".to_string(),
            site_root: "https://example.github.io/wrappers".to_string(),
            local_edit_root: "docs/content".to_string(),
        }
    }
}

impl FederationConfig {
    /// Raw-content URL for a remote document.
    pub fn raw_url(&self, remote_file: &str) -> String {
        format!(
            "https://{}/{}/{}/{}/{}/{}",
            self.host, self.org, self.repo, self.branch, self.docs_dir, remote_file
        )
    }

    /// Repository blob URL for a remote document, used as its edit link.
    pub fn blob_url(&self, remote_file: &str) -> String {
        format!(
            "https://github.com/{}/{}/blob/{}/{}/{}",
            self.org, self.repo, self.branch, self.docs_dir, remote_file
        )
    }

    /// Repo-relative edit link for a local page.
    pub fn local_edit_link(&self, page: &str) -> String {
        format!("{}/{}.mdx", self.local_edit_root, page)
    }
}
