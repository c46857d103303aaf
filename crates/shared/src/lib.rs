//! Parlor Shared - wire types for client/server communication
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and the domain ids
//! 2. **No business logic** - Pure data types and serialization
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets

pub mod messages;
pub mod requests;

pub use messages::ClientAction;
pub use requests::{GameData, GameOptions};
