//! Catalog loaders backing the module gate.
//!
//! An asset is a JSON [`Catalog`]; loading it installs its games into the
//! shared [`InMemoryGameLibrary`]. Desktop reads assets from disk, the web
//! build fetches them over HTTP.

#[cfg(not(target_arch = "wasm32"))]
mod desktop;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::FsCatalogLoader;
#[cfg(target_arch = "wasm32")]
pub use wasm::HttpCatalogLoader;

use std::collections::HashSet;
use std::sync::RwLock;

use crate::infrastructure::game_library::{Catalog, InMemoryGameLibrary};
use crate::ports::outbound::LoaderError;

/// Parse `text` as a catalog and register its games.
pub(crate) fn install_catalog_text(
    library: &InMemoryGameLibrary,
    asset: &str,
    text: &str,
) -> Result<usize, LoaderError> {
    let catalog = Catalog::from_json(text).map_err(|e| LoaderError::Parse {
        asset: asset.to_string(),
        message: e.to_string(),
    })?;
    let count = library.install_catalog(catalog)?;
    tracing::info!(asset = %asset, games = count, "Game catalog loaded");
    Ok(count)
}

/// Assets already installed, shared by both loaders.
#[derive(Default)]
pub(crate) struct LoadedAssets(RwLock<HashSet<String>>);

impl LoadedAssets {
    pub(crate) fn contains(&self, asset: &str) -> bool {
        match self.0.read() {
            Ok(loaded) => loaded.contains(asset),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for loaded assets: {}", e);
                false
            }
        }
    }

    pub(crate) fn insert(&self, asset: &str) {
        match self.0.write() {
            Ok(mut loaded) => {
                loaded.insert(asset.to_string());
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for loaded assets: {}", e);
            }
        }
    }
}
