//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (IncomingMessage, CommandRegistry)
//! - Traits: Abstractions for infrastructure (Bot)

pub mod entities;
pub mod traits;
