//! # Commands
//!
//! One type per REPL verb behind the [`ReplCommand`] trait, and the
//! [`CommandRegistry`] that maps a typed verb to exactly one of them.

pub mod context;
pub mod events;
pub mod headers;
pub mod registry;
pub mod request;
pub mod session;
pub mod settings;

#[cfg(test)]
pub(crate) mod testing;

pub use context::CommandContext;
pub use events::CommandEvent;
pub use headers::{HeaderListCommand, HeaderSetCommand};
pub use registry::{CommandRegistry, ReplCommand};
pub use request::HttpCommand;
pub use session::{HelpCommand, QuitCommand};
pub use settings::{ConfigGetCommand, ConfigSetCommand, ServerCommand};
