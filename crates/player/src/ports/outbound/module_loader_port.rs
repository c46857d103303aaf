//! Module Loader Port - makes named assets available before rendering
//!
//! Note: uses `async_trait` instead of returning `Pin<Box<dyn Future>>`
//! for better mockall compatibility.

use thiserror::Error;

use super::LibraryError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoaderError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to read {asset}: {message}")]
    Io { asset: String, message: String },

    #[error("Failed to parse {asset}: {message}")]
    Parse { asset: String, message: String },

    #[error(transparent)]
    Library(#[from] LibraryError),
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ModuleLoaderPort: Send + Sync {
    /// Load a single asset. Loading an asset twice is a no-op.
    async fn load(&self, asset: &str) -> Result<(), LoaderError>;

    fn is_loaded(&self, asset: &str) -> bool;
}
