//! Application layer - Use cases and orchestration

pub mod dto;
pub mod error;
pub mod forms;
pub mod services;

pub use error::SubmitError;
