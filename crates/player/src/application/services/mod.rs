//! Application services

mod game_creation_service;

pub use game_creation_service::{GameCreationService, SubmitOutcome};
