//! Built-in commands and registry assembly

pub mod format;

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::errors::BotError;
use crate::domain::entities::{CommandDefinition, CommandHandler, CommandRegistry};
use crate::infrastructure::quotes::QuoteProvider;

/// `price <SYMBOL>` - latest intraday bar for an equity symbol
pub struct PriceCommand {
    provider: Arc<dyn QuoteProvider>,
}

impl PriceCommand {
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl CommandHandler for PriceCommand {
    async fn run(&self, argument: &str) -> String {
        let symbol = argument.to_uppercase();

        match self.provider.equity_quote(&symbol).await {
            Ok(quote) => format::equity_reply(&symbol, &quote),
            Err(e) => {
                tracing::warn!("Equity lookup for '{}' failed: {}", symbol, e);
                format::equity_apology(&symbol)
            }
        }
    }
}

/// `crypto <BASE>/<QUOTE>` - current exchange rate for a crypto pair
pub struct CryptoCommand {
    provider: Arc<dyn QuoteProvider>,
}

impl CryptoCommand {
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl CommandHandler for CryptoCommand {
    async fn run(&self, argument: &str) -> String {
        // No separator means the provider is never consulted.
        let Some((base, quote)) = argument.split_once('/') else {
            return format::crypto_apology(argument);
        };

        let base = base.to_uppercase();
        let quote = quote.to_uppercase();

        match self.provider.crypto_quote(&base, &quote).await {
            Ok(rate) => format::crypto_reply(&rate),
            Err(e) => {
                tracing::warn!("Crypto lookup for '{}' failed: {}", argument, e);
                format::crypto_apology(argument)
            }
        }
    }
}

/// `help` - enumerate the visible commands
pub struct HelpCommand {
    marker: String,
    patterns: Vec<String>,
}

impl HelpCommand {
    pub fn new(marker: impl Into<String>, patterns: Vec<String>) -> Self {
        Self {
            marker: marker.into(),
            patterns,
        }
    }
}

#[async_trait]
impl CommandHandler for HelpCommand {
    async fn run(&self, _argument: &str) -> String {
        format::help_reply(&self.marker, &self.patterns)
    }
}

/// Catch-all for anything the other triggers did not claim
pub struct UnknownCommand {
    marker: String,
}

impl UnknownCommand {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }
}

#[async_trait]
impl CommandHandler for UnknownCommand {
    async fn run(&self, _argument: &str) -> String {
        format::unknown_reply(&self.marker)
    }
}

/// Build the default registry. Order matters: the scan stops at the first
/// matching trigger, so the catch-all must stay last.
pub fn default_registry(
    marker: &str,
    provider: Arc<dyn QuoteProvider>,
) -> Result<CommandRegistry, BotError> {
    let mut definitions = vec![
        CommandDefinition::new("price", Arc::new(PriceCommand::new(provider.clone())))?,
        CommandDefinition::new("crypto", Arc::new(CryptoCommand::new(provider)))?,
    ];

    // The help listing covers every visible command, itself included.
    let mut listed: Vec<String> = definitions
        .iter()
        .filter(|d| !d.is_hidden())
        .map(|d| d.pattern().to_string())
        .collect();
    listed.push("help".to_string());

    definitions.push(CommandDefinition::new(
        "help",
        Arc::new(HelpCommand::new(marker, listed)),
    )?);
    definitions.push(
        CommandDefinition::new("[^ ]*", Arc::new(UnknownCommand::new(marker)))?.hidden(),
    );

    Ok(CommandRegistry::new(definitions))
}
