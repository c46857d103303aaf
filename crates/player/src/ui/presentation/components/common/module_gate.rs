//! Module Gate - renders its children once the named assets are loaded

use dioxus::prelude::*;

use crate::presentation::services::use_module_loader;

#[derive(Debug, Clone, PartialEq)]
enum GateStatus {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Props, Clone, PartialEq)]
pub struct ModuleGateProps {
    /// Asset paths, loaded in order
    pub assets: Vec<String>,
    pub children: Element,
}

#[component]
pub fn ModuleGate(props: ModuleGateProps) -> Element {
    let loader = use_module_loader();
    let already_loaded = props.assets.iter().all(|a| loader.is_loaded(a));
    let mut status = use_signal(move || {
        if already_loaded {
            GateStatus::Ready
        } else {
            GateStatus::Loading
        }
    });

    let assets = props.assets.clone();
    use_effect(move || {
        if *status.peek() != GateStatus::Loading {
            return;
        }
        let loader = loader.clone();
        let assets = assets.clone();
        spawn(async move {
            for asset in &assets {
                if let Err(e) = loader.load(asset).await {
                    tracing::error!(asset = %asset, error = %e, "Module failed to load");
                    status.set(GateStatus::Failed(e.to_string()));
                    return;
                }
            }
            status.set(GateStatus::Ready);
        });
    });

    let current = status.read().clone();
    match current {
        GateStatus::Ready => rsx! { {props.children} },
        GateStatus::Loading => rsx! {
            div {
                class: "flex items-center justify-center py-12",
                span { class: "text-gray-400", "Loading..." }
            }
        },
        GateStatus::Failed(err) => rsx! {
            div {
                class: "p-3 bg-red-500/20 border border-red-500/30 rounded-lg text-red-400 text-sm",
                "Failed to load games: {err}"
            }
        },
    }
}
