//! Game Creation Service - asynchronous glue behind the new game form
//!
//! Owns the injected game library and dispatch sink. The form state itself
//! stays with the caller (a UI signal or a plain value in tests); this
//! service only runs the steps that need ports or have to be awaited.

use std::sync::Arc;

use parlor_domain::User;
use parlor_shared::{ClientAction, GameData};

use crate::application::dto::GameConfiguration;
use crate::application::forms::{
    current_configuration, derive_view, game_choices, GameChoice, NewGameFormState, NewGameView,
    PendingValidation, ValidationOutcome,
};
use crate::application::SubmitError;
use crate::ports::outbound::{DispatchPort, GameLibraryPort, OptionVerdict};

/// What a full submit attempt ended in.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The form was incomplete; nothing was sent
    Aborted,
    /// The create-game action was dispatched with this data
    Created(GameData),
    /// The attempt failed; the message is now the form's error
    Failed(String),
}

pub struct GameCreationService {
    library: Arc<dyn GameLibraryPort>,
    dispatch: Arc<dyn DispatchPort>,
}

impl GameCreationService {
    pub fn new(library: Arc<dyn GameLibraryPort>, dispatch: Arc<dyn DispatchPort>) -> Self {
        Self { library, dispatch }
    }

    pub fn games(&self) -> Vec<GameChoice> {
        game_choices(self.library.as_ref())
    }

    pub fn view(&self, form: &NewGameFormState, users: &[User]) -> NewGameView {
        derive_view(form, self.library.as_ref(), users)
    }

    /// Run one option validator.
    ///
    /// A `Valid` verdict clears the option's error; an `Invalid` verdict or a
    /// failing validator both become the error text.
    pub async fn validate(&self, pending: PendingValidation) -> ValidationOutcome {
        let PendingValidation {
            option,
            token,
            value,
            validator,
        } = pending;

        let error = match validator.validate(value).await {
            Ok(OptionVerdict::Valid) => None,
            Ok(OptionVerdict::Invalid(reason)) => Some(reason),
            Err(failure) => {
                tracing::debug!(option = %option, error = %failure, "Option validator failed");
                Some(failure)
            }
        };

        ValidationOutcome {
            option,
            token,
            error,
        }
    }

    /// Resolve the configuration and open a create attempt on `form`.
    ///
    /// Returns `None` when there is nothing to send: no game selected, an
    /// incomplete form, or a configuration that failed to resolve (the
    /// failure is recorded as the form's error).
    pub fn prepare_submission(
        &self,
        form: &mut NewGameFormState,
    ) -> Option<(GameConfiguration, GameData)> {
        match current_configuration(form, self.library.as_ref())? {
            Ok(config) => {
                let data = form.begin_submit(&config)?;
                Some((config, data))
            }
            Err(err) => {
                tracing::warn!(error = %err, "Cannot submit: configuration unavailable");
                form.finish_submission(Err(err.into()));
                None
            }
        }
    }

    /// Run the presubmit hook (identity when absent) and dispatch the result.
    pub async fn create_game(
        &self,
        config: &GameConfiguration,
        data: GameData,
    ) -> Result<GameData, SubmitError> {
        let data = match &config.hooks.presubmit {
            Some(hook) => hook.presubmit(data).await.inspect_err(|err| {
                tracing::info!(game = %config.name, error = %err, "Presubmit hook rejected game");
            })?,
            None => data,
        };

        self.dispatch
            .dispatch(ClientAction::CreateGame(data.clone()))
            .inspect_err(|err| tracing::error!(error = %err, "Failed to dispatch CREATE_GAME"))?;

        tracing::info!(
            game = %data.game,
            title = %data.title,
            players = data.players.len(),
            "Dispatched CREATE_GAME"
        );
        Ok(data)
    }

    /// Full submit pipeline for callers that own the form across the await.
    pub async fn submit(&self, form: &mut NewGameFormState) -> SubmitOutcome {
        let Some((config, data)) = self.prepare_submission(form) else {
            return match form.error() {
                Some(message) => SubmitOutcome::Failed(message.to_string()),
                None => SubmitOutcome::Aborted,
            };
        };

        let result = self.create_game(&config, data).await;
        let outcome = match &result {
            Ok(data) => SubmitOutcome::Created(data.clone()),
            Err(err) => SubmitOutcome::Failed(err.to_string()),
        };
        form.finish_submission(result);
        outcome
    }
}
