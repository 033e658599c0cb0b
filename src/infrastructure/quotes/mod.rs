//! Quote provider - financial market data lookups
//!
//! The bot only needs two operations: the latest intraday bar for an equity
//! symbol and the current exchange rate for a crypto pair. Everything else
//! (transport, auth, rate limits) is the provider's concern.

pub mod alphavantage;

use async_trait::async_trait;

use crate::application::errors::QuoteError;

pub use alphavantage::AlphaVantageClient;

/// Most recent 1-minute bar for an equity symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityQuote {
    pub symbol: String,
    pub open: f64,
    pub close: f64,
}

/// Current exchange rate for a crypto pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CryptoQuote {
    pub base: String,
    pub quote: String,
    pub price: f64,
}

/// Quote provider abstraction - one request, one ephemeral sample
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch the most recent intraday sample for an equity symbol
    async fn equity_quote(&self, symbol: &str) -> Result<EquityQuote, QuoteError>;

    /// Fetch the current exchange rate for a crypto pair
    async fn crypto_quote(&self, base: &str, quote: &str) -> Result<CryptoQuote, QuoteError>;
}
