//! Integration tests for the Tamales Dali storefront core.
//!
//! # Test Categories
//!
//! - `order_flow` - Cart and checkout against the full application state
//! - `profile_persistence` - Account/address round-trips through the file
//!   store, including restart simulation
//!
//! Each test builds an [`AppState`] over a scratch storage directory via
//! [`TestContext`]; "restarting" is building a second state over the same
//! directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tamales_dali_storefront::config::StorefrontConfig;
use tamales_dali_storefront::state::AppState;

/// Shared setup for integration tests: a scratch storage directory that lives
/// as long as the context and is removed on drop.
pub struct TestContext {
    storage_dir: tempfile::TempDir,
}

impl TestContext {
    /// Create a context with an empty storage directory.
    ///
    /// # Panics
    ///
    /// Panics if the scratch directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        init_logging();
        let storage_dir = tempfile::tempdir().expect("create scratch storage directory");
        Self { storage_dir }
    }

    /// Configuration pointing at the scratch directory.
    #[must_use]
    pub fn config(&self) -> StorefrontConfig {
        StorefrontConfig {
            storage_dir: self.storage_dir.path().to_path_buf(),
        }
    }

    /// Build an application state over the scratch directory.
    ///
    /// Call again to simulate a fresh process over the same storage.
    ///
    /// # Panics
    ///
    /// Panics if the state cannot be built.
    #[must_use]
    pub fn app(&self) -> AppState {
        AppState::new(self.config()).expect("build application state")
    }

    /// Path of the document stored under `key`, for direct inspection.
    #[must_use]
    pub fn record_path(&self, key: &str) -> std::path::PathBuf {
        self.storage_dir.path().join(format!("{key}.json"))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the test log subscriber once; later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
