//! New game form state
//!
//! Headless model behind the "create a new game" form. All transitions are
//! synchronous; the two asynchronous steps (option validation and the
//! presubmit hook) are started by the caller and fed back through
//! [`NewGameFormState::apply_validation`] and
//! [`NewGameFormState::finish_submission`].

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde_json::Value;

use parlor_domain::{GameId, PlayerRoster, User, UserId};
use parlor_shared::{GameData, GameOptions};

use crate::application::dto::GameConfiguration;
use crate::application::SubmitError;
use crate::ports::outbound::OptionValidator;

pub const TITLE_REQUIRED: &str = "You must set a title";

/// Identifies one validation request for one option.
///
/// Tokens grow monotonically; only the newest token of an option may write
/// that option's error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ValidationToken(u64);

/// A validation the caller must run and feed back.
#[derive(Clone)]
pub struct PendingValidation {
    pub option: String,
    pub token: ValidationToken,
    pub value: Value,
    pub validator: Arc<dyn OptionValidator>,
}

/// Result of a finished validation, `error: None` meaning the value is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub option: String,
    pub token: ValidationToken,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed,
}

/// Coarse lifecycle of the form, derived from state and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    ConfiguringOptions,
    ReadyToSubmit,
    Submitting,
    Submitted,
    ErrorDisplayed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewGameFormState {
    game: Option<GameId>,
    title: String,
    players: PlayerRoster,
    dirty_title: bool,
    options: GameOptions,
    /// `None` records a passed validation
    option_errors: BTreeMap<String, Option<String>>,
    latest_tokens: HashMap<String, ValidationToken>,
    next_token: u64,
    error: Option<String>,
    status: SubmissionStatus,
}

impl NewGameFormState {
    /// Fresh form for `host`: default title, host in the first seat.
    pub fn new(host: &User) -> Self {
        Self {
            game: None,
            title: host.default_game_title(),
            players: PlayerRoster::seeded(host.id),
            dirty_title: false,
            options: GameOptions::new(),
            option_errors: BTreeMap::new(),
            latest_tokens: HashMap::new(),
            next_token: 0,
            error: None,
            status: SubmissionStatus::Idle,
        }
    }

    pub fn game(&self) -> Option<&GameId> {
        self.game.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn players(&self) -> &PlayerRoster {
        &self.players
    }

    pub fn is_title_dirty(&self) -> bool {
        self.dirty_title
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    pub fn option_value(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    pub fn option_error(&self, name: &str) -> Option<&str> {
        self.option_errors.get(name).and_then(|e| e.as_deref())
    }

    pub fn has_option_errors(&self) -> bool {
        self.option_errors.values().any(Option::is_some)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Options already entered survive a change of game.
    pub fn select_game(&mut self, game: GameId) {
        tracing::debug!(game = %game, "Game selected");
        self.game = Some(game);
        self.touch();
    }

    pub fn change_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.dirty_title = true;
        self.touch();
    }

    /// Seat `player` at `slot`, or clear the slot with `None`.
    pub fn change_player(&mut self, slot: usize, player: Option<UserId>) {
        self.players.assign(slot, player);
        self.touch();
    }

    /// Store `value` immediately; returns the validation to run, if any.
    pub fn change_option(
        &mut self,
        name: impl Into<String>,
        value: Value,
        validator: Option<Arc<dyn OptionValidator>>,
    ) -> Option<PendingValidation> {
        let name = name.into();
        self.options.insert(name.clone(), value.clone());
        self.touch();

        let validator = validator?;
        let token = ValidationToken(self.next_token);
        self.next_token += 1;
        self.latest_tokens.insert(name.clone(), token);

        Some(PendingValidation {
            option: name,
            token,
            value,
            validator,
        })
    }

    /// Record a finished validation. Returns `false` when a newer validation
    /// for the same option was issued meanwhile and the outcome was dropped.
    pub fn apply_validation(&mut self, outcome: ValidationOutcome) -> bool {
        let is_latest = self.latest_tokens.get(&outcome.option) == Some(&outcome.token);
        if !is_latest {
            tracing::debug!(
                option = %outcome.option,
                token = ?outcome.token,
                "Dropping stale option validation"
            );
            return false;
        }
        self.option_errors.insert(outcome.option, outcome.error);
        true
    }

    /// Inline title error, only once the user touched the title or tried to submit.
    pub fn title_error(&self) -> Option<&'static str> {
        (self.dirty_title && self.title.is_empty()).then_some(TITLE_REQUIRED)
    }

    /// Whether the create control is offered. Option errors do not gate it.
    pub fn can_submit(&self, config: &GameConfiguration) -> bool {
        self.game.is_some()
            && !self.title.is_empty()
            && config.players.is_satisfied_by(self.players.len())
    }

    /// Start a create attempt.
    ///
    /// Marks the title dirty and clears the previous error, then returns the
    /// game data to submit, or `None` when the form is incomplete (nothing is
    /// reported in that case beyond the inline field errors).
    pub fn begin_submit(&mut self, config: &GameConfiguration) -> Option<GameData> {
        if self.status == SubmissionStatus::Submitting {
            tracing::debug!("Create already in flight, ignoring");
            return None;
        }

        self.dirty_title = true;
        self.error = None;

        let Some(game) = self.game.clone() else {
            tracing::debug!("Create aborted: no game selected");
            return None;
        };
        if self.title.is_empty() {
            tracing::debug!(game = %game, "Create aborted: empty title");
            return None;
        }
        if !config.players.is_satisfied_by(self.players.len()) {
            tracing::debug!(
                game = %game,
                players = self.players.len(),
                min_players = config.min_players(),
                "Create aborted: not enough players"
            );
            return None;
        }

        self.status = SubmissionStatus::Submitting;
        Some(GameData {
            game,
            title: self.title.clone(),
            players: self.players.to_vec(),
            options: self.options.clone(),
        })
    }

    /// Record the outcome of a create attempt started with `begin_submit`.
    pub fn finish_submission(&mut self, result: Result<GameData, SubmitError>) {
        match result {
            Ok(_) => {
                self.status = SubmissionStatus::Submitted;
            }
            Err(err) => {
                self.status = SubmissionStatus::Failed;
                self.error = Some(err.to_string());
            }
        }
    }

    pub fn phase(&self, config: Option<&GameConfiguration>) -> FormPhase {
        match self.status {
            SubmissionStatus::Submitting => FormPhase::Submitting,
            SubmissionStatus::Submitted => FormPhase::Submitted,
            SubmissionStatus::Failed => FormPhase::ErrorDisplayed,
            SubmissionStatus::Idle => match (&self.game, config) {
                (None, _) | (_, None) => FormPhase::Idle,
                (Some(_), Some(config)) if self.can_submit(config) => FormPhase::ReadyToSubmit,
                (Some(_), Some(_)) => FormPhase::ConfiguringOptions,
            },
        }
    }

    /// Any edit after a finished attempt returns the form to editing.
    fn touch(&mut self) {
        if matches!(
            self.status,
            SubmissionStatus::Submitted | SubmissionStatus::Failed
        ) {
            self.status = SubmissionStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{HookRejection, MockOptionValidator};
    use parlor_domain::PlayerBounds;
    use serde_json::json;

    fn ann() -> User {
        User::new(UserId::new(1), "Ann")
    }

    fn chess() -> GameConfiguration {
        GameConfiguration::new("Chess", PlayerBounds::new(2, 2).expect("valid"))
    }

    fn validator() -> Arc<dyn OptionValidator> {
        Arc::new(MockOptionValidator::new())
    }

    #[test]
    fn starts_with_host_seated_and_default_title() {
        let form = NewGameFormState::new(&ann());
        assert_eq!(form.title(), "Ann's Game");
        assert_eq!(form.players().as_slice(), &[UserId::new(1)]);
        assert!(!form.is_title_dirty());
        assert!(form.game().is_none());
        assert!(form.options().is_empty());
    }

    #[test]
    fn changing_title_marks_it_dirty() {
        let mut form = NewGameFormState::new(&ann());
        form.change_title("");
        assert!(form.is_title_dirty());
        assert_eq!(form.title_error(), Some(TITLE_REQUIRED));

        form.change_title("Rematch");
        assert_eq!(form.title_error(), None);
    }

    #[test]
    fn selecting_another_game_keeps_entered_options() {
        let mut form = NewGameFormState::new(&ann());
        form.select_game(GameId::from("chess"));
        form.change_option("rated", json!(true), None);
        form.select_game(GameId::from("go"));
        assert_eq!(form.option_value("rated"), Some(&json!(true)));
    }

    #[test]
    fn empty_title_aborts_and_reveals_title_error() {
        let mut form = NewGameFormState::new(&ann());
        form.select_game(GameId::from("chess"));
        form.change_player(1, Some(UserId::new(2)));
        form.title = String::new();

        assert!(form.begin_submit(&chess()).is_none());
        assert!(form.is_title_dirty());
        assert_eq!(form.title_error(), Some(TITLE_REQUIRED));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn too_few_players_aborts_silently() {
        let mut form = NewGameFormState::new(&ann());
        form.select_game(GameId::from("chess"));

        assert!(!form.can_submit(&chess()));
        assert!(form.begin_submit(&chess()).is_none());
        assert!(form.error().is_none());
    }

    #[test]
    fn begin_submit_builds_compacted_game_data() {
        let mut form = NewGameFormState::new(&ann());
        form.select_game(GameId::from("chess"));
        form.change_player(3, Some(UserId::new(2)));

        let data = form.begin_submit(&chess()).expect("form is complete");
        assert_eq!(data.game, GameId::from("chess"));
        assert_eq!(data.title, "Ann's Game");
        assert_eq!(data.players, vec![UserId::new(1), UserId::new(2)]);
        assert!(data.options.is_empty());
        assert_eq!(form.phase(Some(&chess())), FormPhase::Submitting);
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut form = NewGameFormState::new(&ann());
        form.select_game(GameId::from("chess"));
        form.change_player(1, Some(UserId::new(2)));

        assert!(form.begin_submit(&chess()).is_some());
        assert!(form.begin_submit(&chess()).is_none());
    }

    #[test]
    fn failed_submission_keeps_inputs_and_shows_error_until_next_attempt() {
        let mut form = NewGameFormState::new(&ann());
        form.select_game(GameId::from("chess"));
        form.change_player(1, Some(UserId::new(2)));

        assert!(form.begin_submit(&chess()).is_some());
        form.finish_submission(Err(HookRejection::message("Table is full").into()));

        assert_eq!(form.error(), Some("Table is full"));
        assert_eq!(form.phase(Some(&chess())), FormPhase::ErrorDisplayed);
        assert_eq!(form.players().len(), 2);

        form.change_title("Second try");
        assert_eq!(form.phase(Some(&chess())), FormPhase::ReadyToSubmit);
        assert_eq!(form.error(), Some("Table is full"));

        assert!(form.begin_submit(&chess()).is_some());
        assert!(form.error().is_none());
    }

    #[test]
    fn phase_follows_form_progress() {
        let mut form = NewGameFormState::new(&ann());
        assert_eq!(form.phase(None), FormPhase::Idle);

        form.select_game(GameId::from("chess"));
        assert_eq!(form.phase(Some(&chess())), FormPhase::ConfiguringOptions);

        form.change_player(1, Some(UserId::new(2)));
        assert_eq!(form.phase(Some(&chess())), FormPhase::ReadyToSubmit);

        let data = form.begin_submit(&chess()).expect("complete");
        form.finish_submission(Ok(data));
        assert_eq!(form.phase(Some(&chess())), FormPhase::Submitted);
    }

    #[test]
    fn option_value_is_stored_before_validation_runs() {
        let mut form = NewGameFormState::new(&ann());
        let pending = form
            .change_option("buyIn", json!("abc"), Some(validator()))
            .expect("validator attached");

        assert_eq!(form.option_value("buyIn"), Some(&json!("abc")));
        assert_eq!(pending.option, "buyIn");
        assert_eq!(pending.value, json!("abc"));
        assert!(form.option_error("buyIn").is_none());
    }

    #[test]
    fn options_without_validator_need_no_follow_up() {
        let mut form = NewGameFormState::new(&ann());
        assert!(form.change_option("rated", json!(false), None).is_none());
    }

    #[test]
    fn rejected_validation_records_error_and_keeps_value() {
        let mut form = NewGameFormState::new(&ann());
        let pending = form
            .change_option("buyIn", json!("abc"), Some(validator()))
            .expect("validator attached");

        assert!(form.apply_validation(ValidationOutcome {
            option: pending.option,
            token: pending.token,
            error: Some("Must be a number".to_string()),
        }));

        assert_eq!(form.option_error("buyIn"), Some("Must be a number"));
        assert_eq!(form.option_value("buyIn"), Some(&json!("abc")));
        assert!(form.has_option_errors());
    }

    #[test]
    fn stale_validation_cannot_overwrite_newer_result() {
        let mut form = NewGameFormState::new(&ann());
        let first = form
            .change_option("buyIn", json!("abc"), Some(validator()))
            .expect("first");
        let second = form
            .change_option("buyIn", json!("20"), Some(validator()))
            .expect("second");

        assert!(form.apply_validation(ValidationOutcome {
            option: second.option.clone(),
            token: second.token,
            error: None,
        }));
        assert!(!form.apply_validation(ValidationOutcome {
            option: first.option.clone(),
            token: first.token,
            error: Some("Must be a number".to_string()),
        }));

        assert!(form.option_error("buyIn").is_none());
        assert!(!form.has_option_errors());
    }

    #[test]
    fn option_errors_do_not_gate_submission() {
        let mut form = NewGameFormState::new(&ann());
        form.select_game(GameId::from("chess"));
        form.change_player(1, Some(UserId::new(2)));
        let pending = form
            .change_option("clock", json!("forever"), Some(validator()))
            .expect("validator attached");
        form.apply_validation(ValidationOutcome {
            option: pending.option,
            token: pending.token,
            error: Some("Unsupported clock".to_string()),
        });

        assert!(form.can_submit(&chess()));
    }
}
