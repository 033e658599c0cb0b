//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Commands: the built-in command handlers and registry assembly
//! - Errors: Domain-specific errors
//! - Messaging: command dispatching

pub mod commands;
pub mod errors;
pub mod messaging;
