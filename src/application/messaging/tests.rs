//! Dispatcher tests against a stubbed quote provider

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::MessageDispatcher;
use crate::application::commands::{self, format};
use crate::application::errors::QuoteError;
use crate::domain::entities::CommandDefinition;
use crate::domain::entities::CommandRegistry;
use crate::infrastructure::quotes::{CryptoQuote, EquityQuote, QuoteProvider};

/// Canned provider that records every lookup it receives.
#[derive(Default)]
struct StubProvider {
    equity: Option<(f64, f64)>,
    crypto_price: Option<f64>,
    equity_symbols: Mutex<Vec<String>>,
    crypto_pairs: Mutex<Vec<(String, String)>>,
}

impl StubProvider {
    fn with_equity(open: f64, close: f64) -> Self {
        Self {
            equity: Some((open, close)),
            ..Default::default()
        }
    }

    fn with_crypto(price: f64) -> Self {
        Self {
            crypto_price: Some(price),
            ..Default::default()
        }
    }
}

#[async_trait]
impl QuoteProvider for StubProvider {
    async fn equity_quote(&self, symbol: &str) -> Result<EquityQuote, QuoteError> {
        self.equity_symbols.lock().unwrap().push(symbol.to_string());
        match self.equity {
            Some((open, close)) => Ok(EquityQuote {
                symbol: symbol.to_string(),
                open,
                close,
            }),
            None => Err(QuoteError::UnknownSymbol(symbol.to_string())),
        }
    }

    async fn crypto_quote(&self, base: &str, quote: &str) -> Result<CryptoQuote, QuoteError> {
        self.crypto_pairs
            .lock()
            .unwrap()
            .push((base.to_string(), quote.to_string()));
        match self.crypto_price {
            Some(price) => Ok(CryptoQuote {
                base: base.to_string(),
                quote: quote.to_string(),
                price,
            }),
            None => Err(QuoteError::Network("connection refused".to_string())),
        }
    }
}

fn dispatcher_with(provider: Arc<StubProvider>) -> MessageDispatcher {
    let registry = commands::default_registry("$", provider).unwrap();
    MessageDispatcher::new("$", registry)
}

#[tokio::test]
async fn price_formats_latest_bar() {
    let provider = Arc::new(StubProvider::with_equity(100.0, 105.0));
    let dispatcher = dispatcher_with(provider);

    let reply = dispatcher.handle("$price aapl").await;
    assert_eq!(
        reply.as_deref(),
        Some("AAPL last minute price:\nopening: 100\nclosing: 105")
    );
}

#[tokio::test]
async fn price_upper_cases_its_argument() {
    let provider = Arc::new(StubProvider::with_equity(100.0, 105.0));
    let dispatcher = dispatcher_with(provider.clone());

    dispatcher.handle("$price aapl").await;
    assert_eq!(*provider.equity_symbols.lock().unwrap(), vec!["AAPL"]);
}

#[tokio::test]
async fn exact_trigger_yields_empty_argument() {
    let provider = Arc::new(StubProvider::default());
    let dispatcher = dispatcher_with(provider.clone());

    dispatcher.handle("$price").await;
    assert_eq!(*provider.equity_symbols.lock().unwrap(), vec![""]);
}

// Argument extraction removes exactly one space, so a second internal
// space survives verbatim.
#[tokio::test]
async fn only_the_first_space_is_trimmed() {
    let provider = Arc::new(StubProvider::with_equity(1.0, 2.0));
    let dispatcher = dispatcher_with(provider.clone());

    dispatcher.handle("$price aa pl").await;
    assert_eq!(*provider.equity_symbols.lock().unwrap(), vec!["AA PL"]);
}

#[tokio::test]
async fn only_the_leading_marker_is_stripped() {
    let provider = Arc::new(StubProvider::with_equity(1.0, 2.0));
    let dispatcher = dispatcher_with(provider.clone());

    dispatcher.handle("$price a$b").await;
    assert_eq!(*provider.equity_symbols.lock().unwrap(), vec!["A$B"]);
}

#[tokio::test]
async fn failed_equity_lookup_becomes_an_apology() {
    let provider = Arc::new(StubProvider::default());
    let dispatcher = dispatcher_with(provider);

    let reply = dispatcher.handle("$price msft").await;
    assert_eq!(reply, Some(format::equity_apology("MSFT")));
}

#[tokio::test]
async fn crypto_pair_is_split_and_upper_cased() {
    let provider = Arc::new(StubProvider::with_crypto(500.0));
    let dispatcher = dispatcher_with(provider.clone());

    let reply = dispatcher.handle("$crypto btc/usd").await;
    assert_eq!(reply.as_deref(), Some("1 BTC: 500 USD"));
    assert_eq!(
        *provider.crypto_pairs.lock().unwrap(),
        vec![("BTC".to_string(), "USD".to_string())]
    );
}

#[tokio::test]
async fn big_crypto_price_carries_gains_suffix() {
    let provider = Arc::new(StubProvider::with_crypto(1500.0));
    let dispatcher = dispatcher_with(provider);

    let reply = dispatcher.handle("$crypto btc/usd").await.unwrap();
    assert_eq!(reply, format!("1 BTC: 1500 USD{}", format::GAINS_SUFFIX));
}

#[tokio::test]
async fn malformed_crypto_pair_never_reaches_the_provider() {
    let provider = Arc::new(StubProvider::with_crypto(500.0));
    let dispatcher = dispatcher_with(provider.clone());

    let reply = dispatcher.handle("$crypto btcusd").await;
    assert_eq!(reply, Some(format::crypto_apology("btcusd")));
    assert!(provider.crypto_pairs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn failed_crypto_lookup_becomes_an_apology() {
    let provider = Arc::new(StubProvider::default());
    let dispatcher = dispatcher_with(provider);

    let reply = dispatcher.handle("$crypto btc/usd").await;
    assert_eq!(reply, Some(format::crypto_apology("btc/usd")));
}

#[tokio::test]
async fn help_lists_visible_commands_in_registry_order() {
    let provider = Arc::new(StubProvider::default());
    let dispatcher = dispatcher_with(provider);

    let reply = dispatcher.handle("$help").await;
    assert_eq!(
        reply.as_deref(),
        Some("Available commands are:\n`$price`\n`$crypto`\n`$help`\n")
    );
}

#[tokio::test]
async fn help_output_is_stable_across_calls() {
    let provider = Arc::new(StubProvider::default());
    let dispatcher = dispatcher_with(provider);

    let first = dispatcher.handle("$help").await;
    let second = dispatcher.handle("$help").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn unmatched_text_falls_through_to_the_catch_all() {
    let provider = Arc::new(StubProvider::default());
    let dispatcher = dispatcher_with(provider);

    let reply = dispatcher.handle("$xyz123").await;
    assert_eq!(reply, Some(format::unknown_reply("$")));
}

#[tokio::test]
async fn no_match_without_a_catch_all_yields_none() {
    let provider = Arc::new(StubProvider::default());
    let price = commands::PriceCommand::new(provider);
    let registry = CommandRegistry::new(vec![
        CommandDefinition::new("price", Arc::new(price)).unwrap()
    ]);
    let dispatcher = MessageDispatcher::new("$", registry);

    assert_eq!(dispatcher.handle("$!!!").await, None);
}

#[test]
fn accepts_requires_the_leading_marker() {
    let provider = Arc::new(StubProvider::default());
    let dispatcher = dispatcher_with(provider);

    assert!(dispatcher.accepts("$help"));
    assert!(!dispatcher.accepts("help"));
    assert!(!dispatcher.accepts("hello $help"));
}
