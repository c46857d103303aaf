//! Desktop catalog loader reading assets from a local directory.

use std::path::PathBuf;

use super::{install_catalog_text, LoadedAssets};
use crate::infrastructure::game_library::InMemoryGameLibrary;
use crate::ports::outbound::{LoaderError, ModuleLoaderPort};

pub struct FsCatalogLoader {
    root: PathBuf,
    library: InMemoryGameLibrary,
    loaded: LoadedAssets,
}

impl FsCatalogLoader {
    /// Asset paths such as `/assets/games/configurations.json` are resolved
    /// relative to `root`.
    pub fn new(root: impl Into<PathBuf>, library: InMemoryGameLibrary) -> Self {
        Self {
            root: root.into(),
            library,
            loaded: LoadedAssets::default(),
        }
    }

    fn path_for(&self, asset: &str) -> PathBuf {
        self.root.join(asset.trim_start_matches('/'))
    }
}

#[async_trait::async_trait]
impl ModuleLoaderPort for FsCatalogLoader {
    async fn load(&self, asset: &str) -> Result<(), LoaderError> {
        if self.loaded.contains(asset) {
            return Ok(());
        }

        let path = self.path_for(asset);
        tracing::debug!(asset = %asset, path = ?path, "Loading asset");
        let text = tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoaderError::NotFound(asset.to_string())
            } else {
                LoaderError::Io {
                    asset: asset.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        install_catalog_text(&self.library, asset, &text)?;
        self.loaded.insert(asset);
        Ok(())
    }

    fn is_loaded(&self, asset: &str) -> bool {
        self.loaded.contains(asset)
    }
}
