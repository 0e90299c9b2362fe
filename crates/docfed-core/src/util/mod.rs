//! Utility modules.
//!
//! - [`files`]: async file discovery and reading

pub mod files;
