//! Common reusable UI components.

mod module_gate;
pub use module_gate::ModuleGate;
