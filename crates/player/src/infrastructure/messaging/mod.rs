//! Messaging infrastructure.
//!
//! - `ActionBus`: queues client actions for the store and implements the
//!   dispatch port used by application services

pub mod action_bus;

pub use action_bus::{ActionBus, ActionReceiver};
