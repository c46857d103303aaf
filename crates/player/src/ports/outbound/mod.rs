//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with the game registry, the store
//! and the asset loader without depending on concrete implementations.

pub mod dispatch_port;
pub mod game_hooks;
pub mod game_library_port;
pub mod module_loader_port;

pub use dispatch_port::{DispatchError, DispatchPort};
pub use game_hooks::{HookRejection, OptionValidator, OptionVerdict, PresubmitHook};
pub use game_library_port::{GameLibraryPort, LibraryError};
pub use module_loader_port::{LoaderError, ModuleLoaderPort};

#[cfg(any(test, feature = "testing"))]
pub use dispatch_port::MockDispatchPort;
#[cfg(any(test, feature = "testing"))]
pub use game_hooks::{MockOptionValidator, MockPresubmitHook};
#[cfg(any(test, feature = "testing"))]
pub use game_library_port::MockGameLibraryPort;
#[cfg(any(test, feature = "testing"))]
pub use module_loader_port::MockModuleLoaderPort;
