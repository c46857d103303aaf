//! Reusable UI components, grouped by screen.

pub mod common;
pub mod lobby;
