//! docfed core — shared types, traits, errors, and utilities.
//!
//! This crate provides the foundational types used across all docfed
//! crates. It has no internal docfed dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`state`]: Generic application state container
//! - [`traits`]: Configuration abstraction
//! - [`util`]: File utilities

pub mod error;
pub mod state;
pub mod traits;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use state::AppState;
pub use traits::ConfigProvider;
