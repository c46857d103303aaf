//! Lobby view - the new game form plus the games created this session

use dioxus::prelude::*;

use parlor_shared::GameData;

use crate::presentation::components::common::ModuleGate;
use crate::presentation::components::lobby::NewGameForm;
use crate::presentation::state::SessionState;

/// Catalog the game library is populated from.
pub const GAME_CATALOG_ASSET: &str = "/assets/games/configurations.json";

#[component]
pub fn LobbyView() -> Element {
    let session = use_context::<SessionState>();
    let mut created: Signal<Vec<GameData>> = use_signal(Vec::new);
    let user_name = session.user.read().name.clone();

    rsx! {
        div {
            class: "lobby-view max-w-xl mx-auto p-6 space-y-6",

            h1 { class: "text-2xl font-bold text-white", "New Game" }
            p { class: "text-sm text-gray-400", "Signed in as {user_name}" }

            ModuleGate {
                assets: vec![GAME_CATALOG_ASSET.to_string()],
                NewGameForm {
                    on_created: move |data: GameData| created.write().push(data),
                }
            }

            if !created.read().is_empty() {
                div {
                    class: "space-y-2",
                    h2 { class: "text-lg font-semibold text-white", "Created this session" }
                    ul {
                        class: "space-y-1",
                        for (index, game) in created.read().iter().enumerate() {
                            li {
                                key: "{index}",
                                class: "text-sm text-gray-300",
                                "{game.title} ({game.game}, {game.players.len()} players)"
                            }
                        }
                    }
                }
            }
        }
    }
}
