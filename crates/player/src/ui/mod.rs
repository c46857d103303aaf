use dioxus::prelude::*;

pub mod presentation;

use presentation::state::{SessionProfile, SessionState};
use presentation::views::LobbyView;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/runner.rs`).
    let profile = use_context::<SessionProfile>();

    // Signals must be created inside an active Dioxus runtime.
    use_context_provider(|| SessionState::from_profile(&profile));

    rsx! {
        div {
            style: "width: 100vw; min-height: 100vh;",
            class: "bg-dark-bg",
            LobbyView {}
        }
    }
}
