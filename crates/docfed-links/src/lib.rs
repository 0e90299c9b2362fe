//! docfed links — hyperlink rewriting for federated content.
//!
//! Post-processes hyperlinks found in remotely-fetched documentation so
//! that links to locally-served pages land on local routes while
//! everything else points at the external site's canonical location.

pub mod rewrite;

pub use rewrite::LinkRewriter;
