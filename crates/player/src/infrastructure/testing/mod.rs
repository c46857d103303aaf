//! Test support shared by unit tests and downstream crates (`testing` feature).

pub mod fixtures;
