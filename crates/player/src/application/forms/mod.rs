//! Form models: state, transitions and view derivation, free of any UI runtime.

mod new_game_form;
mod new_game_view;

pub use new_game_form::{
    FormPhase, NewGameFormState, PendingValidation, SubmissionStatus, ValidationOutcome,
    ValidationToken, TITLE_REQUIRED,
};
pub use new_game_view::{
    current_configuration, derive_view, game_choices, GameChoice, NewGameView, OptionControl,
    PlayerSlotView, TitleField, PLAYER_REQUIRED,
};
