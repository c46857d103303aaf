//! Service providers for the presentation layer
//!
//! The composition root builds a [`Services`] bundle and provides it as
//! Dioxus context. Components reach application services and ports through
//! the `use_*` hooks below and never name infrastructure adapters.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::GameCreationService;
use crate::ports::outbound::ModuleLoaderPort;

#[derive(Clone)]
pub struct Services {
    pub game_creation: Arc<GameCreationService>,
    /// Loads catalog assets ahead of the screens that need them
    pub modules: Arc<dyn ModuleLoaderPort>,
}

impl Services {
    pub fn new(game_creation: GameCreationService, modules: Arc<dyn ModuleLoaderPort>) -> Self {
        Self {
            game_creation: Arc::new(game_creation),
            modules,
        }
    }
}

/// Hook to access the GameCreationService from context
pub fn use_game_creation_service() -> Arc<GameCreationService> {
    let services = use_context::<Services>();
    services.game_creation.clone()
}

/// Hook to access the module loader from context
pub fn use_module_loader() -> Arc<dyn ModuleLoaderPort> {
    let services = use_context::<Services>();
    services.modules.clone()
}
