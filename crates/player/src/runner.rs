use std::sync::Arc;

use crate::application::services::GameCreationService;
use crate::infrastructure::game_library::InMemoryGameLibrary;
use crate::infrastructure::messaging::{ActionBus, ActionReceiver};
use crate::ports::outbound::ModuleLoaderPort;
use crate::presentation::state::SessionProfile;
use crate::presentation::Services;

/// Configuration types for the player runner.
pub mod config {
    use std::path::PathBuf;

    use thiserror::Error;

    use parlor_domain::{User, UserId};

    const USER_ID_VAR: &str = "PARLOR_USER_ID";
    const USER_NAME_VAR: &str = "PARLOR_USER_NAME";
    const USERS_VAR: &str = "PARLOR_USERS";
    const ASSET_ROOT_VAR: &str = "PARLOR_ASSET_ROOT";

    const DEFAULT_USER_ID: u64 = 1;
    const DEFAULT_USER_NAME: &str = "Player";

    #[derive(Debug, Error, Clone, PartialEq, Eq)]
    pub enum ConfigError {
        #[error("{var} must be a numeric user id, got '{value}'")]
        InvalidUserId { var: &'static str, value: String },

        #[error("{var} entries must look like 'id:name', got '{entry}'")]
        InvalidUserEntry { var: &'static str, entry: String },
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct RunnerConfig {
        pub user: User,
        /// Other known users; the current user is added when missing
        pub users: Vec<User>,
        /// Directory asset paths are resolved against (desktop only)
        pub asset_root: PathBuf,
    }

    impl Default for RunnerConfig {
        fn default() -> Self {
            Self {
                user: User::new(UserId::new(DEFAULT_USER_ID), DEFAULT_USER_NAME),
                users: Vec::new(),
                asset_root: default_asset_root(),
            }
        }
    }

    impl RunnerConfig {
        /// Read configuration from process environment variables.
        pub fn from_env() -> Result<Self, ConfigError> {
            Self::from_lookup(|var| std::env::var(var).ok())
        }

        /// Build configuration from any variable source. Unset or blank
        /// variables fall back to defaults.
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
            let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
            let defaults = Self::default();

            let user_id = match get(USER_ID_VAR) {
                Some(raw) => parse_user_id(USER_ID_VAR, &raw)?,
                None => defaults.user.id,
            };
            let user_name = get(USER_NAME_VAR)
                .map(|name| name.trim().to_string())
                .unwrap_or(defaults.user.name);
            let users = match get(USERS_VAR) {
                Some(raw) => parse_users(&raw)?,
                None => defaults.users,
            };
            let asset_root = get(ASSET_ROOT_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.asset_root);

            Ok(Self {
                user: User::new(user_id, user_name),
                users,
                asset_root,
            })
        }
    }

    fn default_asset_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }

    fn parse_user_id(var: &'static str, raw: &str) -> Result<UserId, ConfigError> {
        raw.trim()
            .parse::<UserId>()
            .map_err(|_| ConfigError::InvalidUserId {
                var,
                value: raw.to_string(),
            })
    }

    /// Parse `id:name,id:name`.
    fn parse_users(raw: &str) -> Result<Vec<User>, ConfigError> {
        raw.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let invalid = || ConfigError::InvalidUserEntry {
                    var: USERS_VAR,
                    entry: entry.to_string(),
                };
                let (id, name) = entry.split_once(':').ok_or_else(invalid)?;
                let name = name.trim();
                if name.is_empty() {
                    return Err(invalid());
                }
                Ok(User::new(parse_user_id(USERS_VAR, id)?, name))
            })
            .collect()
    }

}

use config::RunnerConfig;

pub struct RunnerDeps {
    pub library: InMemoryGameLibrary,
    pub modules: Arc<dyn ModuleLoaderPort>,
    pub actions: ActionBus,
    pub config: RunnerConfig,
}

impl RunnerDeps {
    /// Wire the default adapters for the current target. The returned
    /// receiver must be drained for created games to leave the client.
    pub fn from_config(config: RunnerConfig) -> (Self, ActionReceiver) {
        let library = InMemoryGameLibrary::with_builtin_games();
        let (actions, receiver) = ActionBus::channel();

        #[cfg(not(target_arch = "wasm32"))]
        let modules: Arc<dyn ModuleLoaderPort> = Arc::new(
            crate::infrastructure::module_loader::FsCatalogLoader::new(
                config.asset_root.clone(),
                library.clone(),
            ),
        );
        #[cfg(target_arch = "wasm32")]
        let modules: Arc<dyn ModuleLoaderPort> = Arc::new(
            crate::infrastructure::module_loader::HttpCatalogLoader::new(library.clone()),
        );

        (
            Self {
                library,
                modules,
                actions,
                config,
            },
            receiver,
        )
    }

    pub fn services(&self) -> Services {
        let game_creation = GameCreationService::new(
            Arc::new(self.library.clone()),
            Arc::new(self.actions.clone()),
        );
        Services::new(game_creation, Arc::clone(&self.modules))
    }

    pub fn profile(&self) -> SessionProfile {
        SessionProfile::new(self.config.user.clone(), self.config.users.clone())
    }
}

pub fn run(deps: RunnerDeps) {
    let services = deps.services();
    let profile = deps.profile();

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_player_css(&deps.config.asset_root);
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(services)
        .with_context(profile)
        .launch(crate::ui::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_player_css(asset_root: &std::path::Path) -> String {
    let css_path = asset_root.join("assets/css/player.css");
    std::fs::read_to_string(&css_path).unwrap_or_else(|e| {
        tracing::warn!(path = ?css_path, error = %e, "Player stylesheet not found");
        String::new()
    })
}
