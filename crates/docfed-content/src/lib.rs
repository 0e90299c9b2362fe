//! docfed content — page registry, frontmatter, and content resolution.
//!
//! This crate decides, per request, whether a documentation page is
//! served from the local `.mdx` content tree or federated from an
//! external repository, and normalizes both into a uniform
//! [`ResolvedPage`] shape.
//!
//! # Modules
//!
//! - [`registry`]: immutable slug ↔ remote-file mapping table
//! - [`config`]: federation source configuration
//! - [`frontmatter`]: YAML header extraction and validation
//! - [`fetch`]: remote raw-content fetching (trait + HTTP + mock)
//! - [`resolver`]: the content resolver itself
//! - [`paths`]: static path enumeration for the routing surface

pub mod config;
pub mod fetch;
pub mod frontmatter;
pub mod paths;
pub mod registry;
pub mod resolver;

pub use config::FederationConfig;
pub use fetch::{HttpFetcher, RemoteFetcher};
pub use frontmatter::{Frontmatter, PageMeta};
pub use paths::enumerate_static_paths;
pub use registry::{PageMapping, PageRegistry};
pub use resolver::{ContentResolver, PageSource, ResolvedPage};
