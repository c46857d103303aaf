//! View derivation for the new game form
//!
//! `derive_view` recomputes everything the form shows from the current
//! state, the game library and the session's users. It is pure apart from
//! the library lookups, so renderers stay thin and the rendering rules are
//! testable without a UI runtime.

use serde_json::Value;

use parlor_domain::{GameId, OptionKind, User, UserId};
use parlor_shared::GameOptions;

use crate::application::dto::{value_key, GameConfiguration, OptionSpec};
use crate::application::forms::{FormPhase, NewGameFormState, SubmissionStatus};
use crate::ports::outbound::GameLibraryPort;

pub const PLAYER_REQUIRED: &str = "This player is required";

/// One entry of the game selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameChoice {
    pub id: GameId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleField {
    pub value: String,
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSlotView {
    pub slot: usize,
    pub label: String,
    pub selected: Option<UserId>,
    pub candidates: Vec<User>,
    pub error: Option<&'static str>,
}

/// One rendered option control.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionControl {
    pub spec: OptionSpec,
    pub value: Option<Value>,
    pub error: Option<String>,
}

impl OptionControl {
    pub fn kind(&self) -> OptionKind {
        self.spec.kind
    }

    /// Toggle state; anything but `true` reads as off.
    pub fn is_toggled(&self) -> bool {
        matches!(self.value, Some(Value::Bool(true)))
    }

    /// Validation error to show beside the control. Toggles never show one.
    pub fn visible_error(&self) -> Option<&str> {
        match self.spec.kind {
            OptionKind::Select | OptionKind::Text => self.error.as_deref(),
            OptionKind::Boolean => None,
        }
    }

    /// Value as shown in a text field or matched against select item keys.
    pub fn display_value(&self) -> String {
        self.value.as_ref().map(value_key).unwrap_or_default()
    }
}

/// Everything the form renders.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGameView {
    /// Submission error, shown as a banner
    pub error: Option<String>,
    pub games: Vec<GameChoice>,
    pub selected_game: Option<GameId>,
    pub title: TitleField,
    pub players: Vec<PlayerSlotView>,
    pub options: Vec<OptionControl>,
    /// Set when the selected game could not be resolved
    pub configuration_error: Option<String>,
    pub can_submit: bool,
    /// Exposed for hosts; the form itself never blocks on option errors
    pub has_option_errors: bool,
    pub is_submitting: bool,
    pub phase: FormPhase,
}

/// Entries for the game selector, labelled with each game's display name.
pub fn game_choices(library: &dyn GameLibraryPort) -> Vec<GameChoice> {
    let display_context = GameOptions::new();
    library
        .list()
        .into_iter()
        .map(|id| {
            let label = match library.resolve(&id, &display_context, None) {
                Ok(config) => config.name,
                Err(err) => {
                    tracing::warn!(game = %id, error = %err, "Game listed but not resolvable");
                    id.to_string()
                }
            };
            GameChoice { id, label }
        })
        .collect()
}

/// Resolve the selected game's configuration for the form's current context.
pub fn current_configuration(
    form: &NewGameFormState,
    library: &dyn GameLibraryPort,
) -> Option<Result<GameConfiguration, crate::ports::outbound::LibraryError>> {
    let game = form.game()?;
    Some(library.resolve(game, form.options(), Some(form.players().len())))
}

pub fn derive_view(
    form: &NewGameFormState,
    library: &dyn GameLibraryPort,
    users: &[User],
) -> NewGameView {
    let (config, configuration_error) = match current_configuration(form, library) {
        None => (None, None),
        Some(Ok(config)) => (Some(config), None),
        Some(Err(err)) => {
            tracing::warn!(error = %err, "Selected game could not be resolved");
            (None, Some(err.to_string()))
        }
    };

    let players = config
        .as_ref()
        .map(|config| player_slots(form, config, users))
        .unwrap_or_default();
    let options = config
        .as_ref()
        .map(|config| option_controls(form, config))
        .unwrap_or_default();

    NewGameView {
        error: form.error().map(str::to_string),
        games: game_choices(library),
        selected_game: form.game().cloned(),
        title: TitleField {
            value: form.title().to_string(),
            error: form.title_error(),
        },
        players,
        options,
        configuration_error,
        can_submit: config.as_ref().is_some_and(|c| form.can_submit(c)),
        has_option_errors: form.has_option_errors(),
        is_submitting: form.status() == SubmissionStatus::Submitting,
        phase: form.phase(config.as_ref()),
    }
}

fn player_slots(
    form: &NewGameFormState,
    config: &GameConfiguration,
    users: &[User],
) -> Vec<PlayerSlotView> {
    let roster = form.players();
    (0..config.max_players())
        .filter(|slot| roster.is_slot_visible(*slot, &config.players))
        .map(|slot| {
            let selected = roster.get(slot);
            PlayerSlotView {
                slot,
                label: format!("Player {}", slot + 1),
                selected,
                candidates: roster.candidates(slot, users).into_iter().cloned().collect(),
                error: (selected.is_none() && config.players.requires(slot))
                    .then_some(PLAYER_REQUIRED),
            }
        })
        .collect()
}

fn option_controls(form: &NewGameFormState, config: &GameConfiguration) -> Vec<OptionControl> {
    config
        .options
        .iter()
        .map(|spec| OptionControl {
            spec: spec.clone(),
            value: form.option_value(&spec.name).cloned(),
            error: form.option_error(&spec.name).map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::SelectItem;
    use crate::infrastructure::testing::fixtures::{chess_configuration, sample_users};
    use crate::ports::outbound::{LibraryError, MockGameLibraryPort};
    use mockall::predicate::*;
    use parlor_domain::PlayerBounds;
    use serde_json::json;

    fn users() -> Vec<User> {
        sample_users()
    }

    fn chess() -> GameConfiguration {
        chess_configuration()
    }

    fn chess_library() -> MockGameLibraryPort {
        let mut library = MockGameLibraryPort::new();
        library
            .expect_list()
            .returning(|| vec![GameId::from("chess")]);
        library
            .expect_resolve()
            .with(eq(GameId::from("chess")), always(), always())
            .returning(|_, _, _| Ok(chess()));
        library
    }

    #[test]
    fn game_selector_uses_display_names() {
        let mut library = MockGameLibraryPort::new();
        library
            .expect_list()
            .returning(|| vec![GameId::from("chess"), GameId::from("ghost")]);
        library
            .expect_resolve()
            .with(eq(GameId::from("chess")), always(), eq(None))
            .returning(|_, _, _| Ok(chess()));
        library
            .expect_resolve()
            .with(eq(GameId::from("ghost")), always(), eq(None))
            .returning(|id, _, _| Err(LibraryError::UnknownGame(id.clone())));

        let choices = game_choices(&library);
        assert_eq!(
            choices,
            vec![
                GameChoice {
                    id: GameId::from("chess"),
                    label: "Chess".to_string()
                },
                GameChoice {
                    id: GameId::from("ghost"),
                    label: "ghost".to_string()
                },
            ]
        );
    }

    #[test]
    fn nothing_game_specific_renders_before_a_game_is_chosen() {
        let library = chess_library();
        let form = NewGameFormState::new(&users()[0]);

        let view = derive_view(&form, &library, &users());
        assert!(view.players.is_empty());
        assert!(view.options.is_empty());
        assert!(!view.can_submit);
        assert_eq!(view.title.value, "Ann's Game");
        assert_eq!(view.title.error, None);
        assert_eq!(view.phase, FormPhase::Idle);
    }

    #[test]
    fn chess_renders_two_seats_with_host_prefilled() {
        let library = chess_library();
        let mut form = NewGameFormState::new(&users()[0]);
        form.select_game(GameId::from("chess"));

        let view = derive_view(&form, &library, &users());
        assert_eq!(view.players.len(), 2);

        let first = &view.players[0];
        assert_eq!(first.label, "Player 1");
        assert_eq!(first.selected, Some(UserId::new(1)));
        assert_eq!(first.error, None);

        let second = &view.players[1];
        assert_eq!(second.selected, None);
        assert_eq!(second.error, Some(PLAYER_REQUIRED));
        let candidate_ids: Vec<UserId> = second.candidates.iter().map(|u| u.id).collect();
        assert_eq!(candidate_ids, vec![UserId::new(2), UserId::new(3)]);

        assert!(!view.can_submit);

        form.change_player(1, Some(UserId::new(2)));
        let view = derive_view(&form, &library, &users());
        assert!(view.can_submit);
        assert_eq!(view.phase, FormPhase::ReadyToSubmit);
    }

    #[test]
    fn options_are_resolved_with_current_player_count() {
        let mut library = MockGameLibraryPort::new();
        library.expect_list().returning(Vec::new);
        library
            .expect_resolve()
            .with(eq(GameId::from("hearts")), always(), eq(Some(3)))
            .times(1)
            .returning(|_, _, _| {
                Ok(
                    GameConfiguration::new("Hearts", PlayerBounds::new(3, 4).expect("valid"))
                        .with_option(OptionSpec::select(
                            "deal",
                            "Deal",
                            vec![SelectItem::new("left", "Left"), SelectItem::new("right", "Right")],
                        ))
                        .with_option(OptionSpec::boolean("jokers", "Jokers")),
                )
            });

        let mut form = NewGameFormState::new(&users()[0]);
        form.select_game(GameId::from("hearts"));
        form.change_player(1, Some(UserId::new(2)));
        form.change_player(2, Some(UserId::new(3)));
        form.change_option("jokers", json!(true), None);

        let view = derive_view(&form, &library, &users());
        assert_eq!(view.options.len(), 2);
        assert_eq!(view.options[0].kind(), OptionKind::Select);
        assert_eq!(view.options[0].display_value(), "");
        assert!(view.options[1].is_toggled());
        // three seated out of four: one free seat offered
        assert_eq!(view.players.len(), 4);
    }

    #[test]
    fn validation_errors_are_not_shown_under_toggles() {
        let control = |spec: OptionSpec| OptionControl {
            spec,
            value: None,
            error: Some("Not allowed".to_string()),
        };

        assert_eq!(control(OptionSpec::boolean("rated", "Rated")).visible_error(), None);
        assert_eq!(
            control(OptionSpec::text("increment", "Increment")).visible_error(),
            Some("Not allowed")
        );
        assert_eq!(
            control(OptionSpec::select("clock", "Clock", vec![SelectItem::new(5, "5 min")]))
                .visible_error(),
            Some("Not allowed")
        );
    }

    #[test]
    fn unresolvable_game_reports_configuration_error() {
        let mut library = MockGameLibraryPort::new();
        library.expect_list().returning(Vec::new);
        library
            .expect_resolve()
            .returning(|id, _, _| Err(LibraryError::UnknownGame(id.clone())));

        let mut form = NewGameFormState::new(&users()[0]);
        form.select_game(GameId::from("ghost"));

        let view = derive_view(&form, &library, &users());
        assert_eq!(view.configuration_error.as_deref(), Some("Unknown game: ghost"));
        assert!(view.players.is_empty());
        assert!(!view.can_submit);
    }

    #[test]
    fn option_errors_surface_without_blocking_submit() {
        let library = chess_library();
        let mut form = NewGameFormState::new(&users()[0]);
        form.select_game(GameId::from("chess"));
        form.change_player(1, Some(UserId::new(2)));
        let pending = form
            .change_option(
                "clock",
                json!("x"),
                Some(std::sync::Arc::new(
                    crate::ports::outbound::MockOptionValidator::new(),
                )),
            )
            .expect("validator attached");
        form.apply_validation(crate::application::forms::ValidationOutcome {
            option: pending.option,
            token: pending.token,
            error: Some("Bad clock".to_string()),
        });

        let view = derive_view(&form, &library, &users());
        assert!(view.has_option_errors);
        assert!(view.can_submit);
    }
}
