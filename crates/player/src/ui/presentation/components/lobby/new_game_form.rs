//! New Game Form - pick a game, seat players, set options and create it
//!
//! Rendering is driven entirely by [`NewGameView`]; this component only wires
//! DOM events to the form state and runs the async steps through the
//! [`GameCreationService`](crate::application::services::GameCreationService).

use dioxus::prelude::*;
use serde_json::Value;

use parlor_domain::{GameId, OptionKind, UserId};
use parlor_shared::GameData;

use crate::application::forms::{NewGameFormState, NewGameView, OptionControl, PlayerSlotView};
use crate::presentation::services::use_game_creation_service;
use crate::presentation::state::SessionState;

const INPUT_CLASS: &str = "w-full px-3 py-2 bg-black/30 border border-white/10 rounded-lg text-white placeholder-gray-500 focus:outline-none focus:border-indigo-500/50 disabled:opacity-50";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-400 mb-1";
const FIELD_ERROR_CLASS: &str = "mt-1 text-xs text-red-400";

#[derive(Props, Clone, PartialEq)]
pub struct NewGameFormProps {
    /// Called with the dispatched data once a game was created
    #[props(default)]
    pub on_created: Option<EventHandler<GameData>>,
}

#[component]
pub fn NewGameForm(props: NewGameFormProps) -> Element {
    let service = use_game_creation_service();
    let session = use_context::<SessionState>();
    let mut form = use_signal(|| NewGameFormState::new(&session.user.read()));

    let view: NewGameView = service.view(&form.read(), &session.users.read());

    let handle_submit = {
        let service = service.clone();
        let on_created = props.on_created;
        move |e: FormEvent| {
            e.prevent_default();
            let Some((config, data)) = service.prepare_submission(&mut form.write()) else {
                return;
            };
            let service = service.clone();
            spawn(async move {
                let result = service.create_game(&config, data).await;
                let created = result.as_ref().ok().cloned();
                form.write().finish_submission(result);
                if let (Some(data), Some(handler)) = (created, on_created) {
                    handler.call(data);
                }
            });
        }
    };

    let handle_option = {
        let service = service.clone();
        move |(control, value): (OptionControl, Value)| {
            let pending =
                form.write()
                    .change_option(&control.spec.name, value, control.spec.validate.clone());
            if let Some(pending) = pending {
                let service = service.clone();
                spawn(async move {
                    let outcome = service.validate(pending).await;
                    form.write().apply_validation(outcome);
                });
            }
        }
    };

    let selected_game = view
        .selected_game
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    rsx! {
        form {
            class: "new-game-form flex flex-col gap-4 p-4 bg-dark-surface rounded-lg",
            onsubmit: handle_submit,

            if let Some(ref err) = view.error {
                div {
                    class: "p-3 bg-red-500/20 border border-red-500/30 rounded-lg text-red-400 text-sm",
                    "Error: {err}"
                }
            }

            div {
                class: "form-group",
                label { class: LABEL_CLASS, "Game" }
                select {
                    class: INPUT_CLASS,
                    value: "{selected_game}",
                    onchange: move |e| {
                        let id = e.value();
                        if !id.is_empty() {
                            form.write().select_game(GameId::from(id));
                        }
                    },
                    option { value: "", disabled: true, selected: view.selected_game.is_none(), "Select Game" }
                    for choice in view.games.iter() {
                        option {
                            key: "{choice.id}",
                            value: "{choice.id}",
                            selected: view.selected_game.as_ref() == Some(&choice.id),
                            "{choice.label}"
                        }
                    }
                }
            }

            div {
                class: "form-group",
                label { class: LABEL_CLASS, "Game Title" }
                input {
                    class: INPUT_CLASS,
                    r#type: "text",
                    value: "{view.title.value}",
                    oninput: move |e| form.write().change_title(e.value()),
                }
                if let Some(err) = view.title.error {
                    p { class: FIELD_ERROR_CLASS, "{err}" }
                }
            }

            if let Some(ref err) = view.configuration_error {
                p { class: "text-sm text-red-400", "{err}" }
            }

            if !view.players.is_empty() {
                div {
                    class: "form-group space-y-2",
                    label { class: LABEL_CLASS, "Players" }
                    for slot in view.players.iter().cloned() {
                        PlayerSlotField {
                            key: "{slot.slot}",
                            slot: slot.clone(),
                            on_change: move |player: Option<UserId>| {
                                form.write().change_player(slot.slot, player);
                            },
                        }
                    }
                }
            }

            if !view.options.is_empty() {
                div {
                    class: "form-group space-y-3",
                    for control in view.options.iter().cloned() {
                        OptionField {
                            key: "{control.spec.name}",
                            control: control.clone(),
                            on_change: {
                                let mut handle_option = handle_option.clone();
                                move |value: Value| handle_option((control.clone(), value))
                            },
                        }
                    }
                }
            }

            if view.can_submit || view.is_submitting {
                div {
                    class: "flex justify-end",
                    button {
                        class: "px-4 py-2 bg-indigo-500 hover:bg-indigo-600 text-white rounded-lg transition-colors disabled:opacity-50 disabled:cursor-not-allowed",
                        r#type: "submit",
                        disabled: view.is_submitting,
                        if view.is_submitting { "Creating..." } else { "Create Game" }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct PlayerSlotFieldProps {
    slot: PlayerSlotView,
    on_change: EventHandler<Option<UserId>>,
}

#[component]
fn PlayerSlotField(props: PlayerSlotFieldProps) -> Element {
    let slot = &props.slot;
    let selected = slot.selected.map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        div {
            label { class: "block text-xs text-gray-500 mb-1", "{slot.label}" }
            select {
                class: INPUT_CLASS,
                value: "{selected}",
                onchange: move |e| props.on_change.call(e.value().parse::<UserId>().ok()),
                option { value: "", selected: slot.selected.is_none(), "" }
                for user in slot.candidates.iter() {
                    option {
                        key: "{user.id}",
                        value: "{user.id}",
                        selected: slot.selected == Some(user.id),
                        "{user.name}"
                    }
                }
            }
            if let Some(err) = slot.error {
                p { class: FIELD_ERROR_CLASS, "{err}" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct OptionFieldProps {
    control: OptionControl,
    on_change: EventHandler<Value>,
}

#[component]
fn OptionField(props: OptionFieldProps) -> Element {
    let control = &props.control;
    let spec = &control.spec;
    let current = control.display_value();

    let input = match control.kind() {
        OptionKind::Boolean => rsx! {
            label {
                class: "flex items-center gap-2 cursor-pointer",
                input {
                    class: "w-4 h-4 rounded border-white/10 bg-black/30 text-indigo-500 focus:ring-indigo-500/50",
                    r#type: "checkbox",
                    disabled: spec.disabled,
                    checked: control.is_toggled(),
                    onchange: move |e| props.on_change.call(Value::Bool(e.checked())),
                }
                span { class: "text-sm text-gray-300", "{spec.label}" }
            }
        },
        OptionKind::Select => {
            let choices = spec.clone();
            rsx! {
                label { class: LABEL_CLASS, "{spec.label}" }
                select {
                    class: INPUT_CLASS,
                    disabled: spec.disabled,
                    value: "{current}",
                    onchange: move |e| {
                        let key = e.value();
                        if let Some(item) = choices.item_by_key(&key) {
                            props.on_change.call(item.value.clone());
                        }
                    },
                    option { value: "", disabled: true, selected: control.value.is_none(), "" }
                    for item in spec.items.iter() {
                        option {
                            key: "{item.key()}",
                            value: "{item.key()}",
                            selected: item.key() == current,
                            "{item.label}"
                        }
                    }
                }
            }
        }
        OptionKind::Text => rsx! {
            label { class: LABEL_CLASS, "{spec.label}" }
            input {
                class: INPUT_CLASS,
                r#type: "text",
                disabled: spec.disabled,
                value: "{current}",
                oninput: move |e| props.on_change.call(Value::String(e.value())),
            }
        },
    };

    rsx! {
        div {
            class: "form-group",
            {input}
            if let Some(err) = control.visible_error() {
                p { class: FIELD_ERROR_CLASS, "{err}" }
            }
        }
    }
}
