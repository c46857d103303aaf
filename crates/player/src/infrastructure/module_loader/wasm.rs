//! Web catalog loader fetching assets from the serving origin.

use gloo_net::http::Request;

use super::{install_catalog_text, LoadedAssets};
use crate::infrastructure::game_library::InMemoryGameLibrary;
use crate::ports::outbound::{LoaderError, ModuleLoaderPort};

pub struct HttpCatalogLoader {
    library: InMemoryGameLibrary,
    loaded: LoadedAssets,
}

impl HttpCatalogLoader {
    pub fn new(library: InMemoryGameLibrary) -> Self {
        Self {
            library,
            loaded: LoadedAssets::default(),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ModuleLoaderPort for HttpCatalogLoader {
    async fn load(&self, asset: &str) -> Result<(), LoaderError> {
        if self.loaded.contains(asset) {
            return Ok(());
        }

        let io_error = |message: String| LoaderError::Io {
            asset: asset.to_string(),
            message,
        };
        let response = Request::get(asset)
            .send()
            .await
            .map_err(|e| io_error(e.to_string()))?;
        if response.status() == 404 {
            return Err(LoaderError::NotFound(asset.to_string()));
        }
        if !response.ok() {
            return Err(io_error(format!("HTTP {}", response.status())));
        }
        let text = response.text().await.map_err(|e| io_error(e.to_string()))?;

        install_catalog_text(&self.library, asset, &text)?;
        self.loaded.insert(asset);
        Ok(())
    }

    fn is_loaded(&self, asset: &str) -> bool {
        self.loaded.contains(asset)
    }
}
