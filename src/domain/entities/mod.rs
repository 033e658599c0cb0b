//! Domain entities - Core business objects with no external dependencies

pub mod command;
pub mod message;

pub use command::{CommandDefinition, CommandHandler, CommandRegistry};
pub use message::IncomingMessage;
