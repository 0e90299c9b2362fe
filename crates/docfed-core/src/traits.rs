//! Core traits for docfed domain abstraction.
//!
//! The primary trait is [`ConfigProvider`], which abstracts the
//! application's configuration: project identity and content paths.
//! Keeping configuration behind a trait keeps the content resolver and
//! link rewriter pure and independently testable — neither reads ambient
//! module state.

use std::path::PathBuf;

use crate::Result;

/// Trait for application configuration.
///
/// Every docfed-based binary implements this to provide the paths the
/// content crates need.
///
/// # Bounds
///
/// - `Send + Sync`: configuration must be shareable across threads
/// - `Clone`: configuration can be duplicated for passing to subsystems
/// - `'static`: configuration lifetime is not borrowed
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used for env var prefixes and default paths.
    fn project_name(&self) -> &str;

    /// Base path for all project data.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined.
    fn base_path(&self) -> Result<PathBuf>;

    /// Path for a specific content section.
    ///
    /// `section` is a route-relative key like `"database/extensions/wrappers"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the section path cannot be resolved.
    fn content_path(&self, section: &str) -> Result<PathBuf>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TestConfig {
        name: String,
        base: PathBuf,
    }

    impl ConfigProvider for TestConfig {
        fn project_name(&self) -> &str {
            &self.name
        }

        fn base_path(&self) -> Result<PathBuf> {
            Ok(self.base.clone())
        }

        fn content_path(&self, section: &str) -> Result<PathBuf> {
            Ok(self.base.join(section))
        }
    }

    #[test]
    fn test_config_provider_paths() {
        let config = TestConfig {
            name: "docs".into(),
            base: PathBuf::from("/content"),
        };
        assert_eq!(config.project_name(), "docs");
        assert_eq!(config.base_path().unwrap(), PathBuf::from("/content"));
        assert_eq!(
            config.content_path("database/extensions/wrappers").unwrap(),
            PathBuf::from("/content/database/extensions/wrappers")
        );
    }

    #[test]
    fn test_config_provider_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TestConfig>();
    }
}
