//! Parlor Player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parlor_player::infrastructure::messaging::ActionReceiver;
use parlor_player::runner::{self, config::RunnerConfig, RunnerDeps};

fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "parlor_player=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Parlor Player");

    let config = RunnerConfig::from_env()?;
    tracing::debug!(user = %config.user.name, known_users = config.users.len(), "Configuration loaded");

    let (deps, actions) = RunnerDeps::from_config(config);
    spawn_action_store(actions)?;

    runner::run(deps);
    Ok(())
}

/// Drain dispatched actions. There is no server connection yet, so the store
/// only records what it receives.
#[cfg(not(target_arch = "wasm32"))]
fn spawn_action_store(actions: ActionReceiver) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    std::thread::Builder::new()
        .name("parlor-action-store".to_string())
        .spawn(move || runtime.block_on(actions.for_each(record_action)))?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn spawn_action_store(actions: ActionReceiver) -> anyhow::Result<()> {
    wasm_bindgen_futures::spawn_local(async move {
        actions.for_each(record_action).await;
    });
    Ok(())
}

fn record_action(action: parlor_shared::ClientAction) {
    match serde_json::to_string(&action) {
        Ok(json) => tracing::info!(action = action.kind(), payload = %json, "Action stored"),
        Err(e) => tracing::error!(action = action.kind(), error = %e, "Failed to encode action"),
    }
}
