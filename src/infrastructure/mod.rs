//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Quotes: the financial quote provider client
//! - Adapters: Platform integrations (Telegram, console)

pub mod adapters;
pub mod config;
pub mod quotes;
