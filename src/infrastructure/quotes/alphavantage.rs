//! Alpha Vantage adapter for the quote provider

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{CryptoQuote, EquityQuote, QuoteProvider};
use crate::application::errors::QuoteError;

/// Alpha Vantage API base URL
const API_BASE: &str = "https://www.alphavantage.co/query";

/// Quote provider backed by the Alpha Vantage REST API
pub struct AlphaVantageClient {
    api_key: String,
    client: Client,
}

impl AlphaVantageClient {
    /// Create a client with a bounded request timeout. A timed-out lookup is
    /// reported as `QuoteError::Timeout` so the caller never waits forever.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self, QuoteError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QuoteError::Network(e.to_string()))?;

        Ok(Self {
            api_key: api_key.into(),
            client,
        })
    }

    async fn query(&self, params: &[(&str, &str)]) -> Result<Value, QuoteError> {
        let response = self
            .client
            .get(API_BASE)
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            return Err(QuoteError::Network(format!(
                "Alpha Vantage error: {}",
                response.status()
            )));
        }

        response.json().await.map_err(map_transport_error)
    }
}

#[async_trait]
impl QuoteProvider for AlphaVantageClient {
    async fn equity_quote(&self, symbol: &str) -> Result<EquityQuote, QuoteError> {
        let body = self
            .query(&[
                ("function", "TIME_SERIES_INTRADAY"),
                ("symbol", symbol),
                ("interval", "1min"),
                ("outputsize", "compact"),
            ])
            .await?;

        parse_equity(&body, symbol)
    }

    async fn crypto_quote(&self, base: &str, quote: &str) -> Result<CryptoQuote, QuoteError> {
        let body = self
            .query(&[
                ("function", "CURRENCY_EXCHANGE_RATE"),
                ("from_currency", base),
                ("to_currency", quote),
            ])
            .await?;

        parse_crypto(&body, base, quote)
    }
}

fn map_transport_error(e: reqwest::Error) -> QuoteError {
    if e.is_timeout() {
        QuoteError::Timeout
    } else {
        QuoteError::Network(e.to_string())
    }
}

/// Pick the newest bar out of the intraday series. Series keys are
/// "YYYY-MM-DD HH:MM:SS" timestamps, so the lexicographic maximum is the
/// most recent sample. An unknown symbol comes back without the series
/// object (only an "Error Message" field).
fn parse_equity(body: &Value, symbol: &str) -> Result<EquityQuote, QuoteError> {
    let series = body
        .get("Time Series (1min)")
        .and_then(Value::as_object)
        .ok_or_else(|| QuoteError::UnknownSymbol(symbol.to_string()))?;

    let (_, bar) = series
        .iter()
        .max_by(|(a, _), (b, _)| a.cmp(b))
        .ok_or_else(|| QuoteError::UnknownSymbol(symbol.to_string()))?;

    Ok(EquityQuote {
        symbol: symbol.to_string(),
        open: parse_field(bar, "1. open")?,
        close: parse_field(bar, "4. close")?,
    })
}

fn parse_crypto(body: &Value, base: &str, quote: &str) -> Result<CryptoQuote, QuoteError> {
    let rate = body
        .get("Realtime Currency Exchange Rate")
        .and_then(|v| v.get("5. Exchange Rate"))
        .ok_or_else(|| QuoteError::UnknownSymbol(format!("{}/{}", base, quote)))?;

    let price = rate
        .as_str()
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| QuoteError::Parse("Exchange rate is not a number".to_string()))?;

    Ok(CryptoQuote {
        base: base.to_string(),
        quote: quote.to_string(),
        price,
    })
}

fn parse_field(bar: &Value, field: &str) -> Result<f64, QuoteError> {
    bar.get(field)
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| QuoteError::Parse(format!("Missing or invalid field '{}'", field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equity_parser_picks_latest_bar() {
        let body = json!({
            "Meta Data": { "2. Symbol": "AAPL" },
            "Time Series (1min)": {
                "2026-08-26 19:58:00": { "1. open": "99.0", "4. close": "100.0" },
                "2026-08-26 19:59:00": { "1. open": "100.0", "4. close": "105.0" },
                "2026-08-26 19:57:00": { "1. open": "98.0", "4. close": "99.0" }
            }
        });

        let quote = parse_equity(&body, "AAPL").unwrap();
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.open, 100.0);
        assert_eq!(quote.close, 105.0);
    }

    #[test]
    fn equity_parser_maps_error_body_to_unknown_symbol() {
        let body = json!({
            "Error Message": "Invalid API call."
        });

        let result = parse_equity(&body, "NOPE");
        assert!(matches!(result, Err(QuoteError::UnknownSymbol(s)) if s == "NOPE"));
    }

    #[test]
    fn crypto_parser_reads_exchange_rate() {
        let body = json!({
            "Realtime Currency Exchange Rate": {
                "1. From_Currency Code": "BTC",
                "3. To_Currency Code": "USD",
                "5. Exchange Rate": "1500.25"
            }
        });

        let quote = parse_crypto(&body, "BTC", "USD").unwrap();
        assert_eq!(quote.base, "BTC");
        assert_eq!(quote.quote, "USD");
        assert_eq!(quote.price, 1500.25);
    }

    #[test]
    fn crypto_parser_maps_missing_rate_to_unknown_symbol() {
        let body = json!({ "Error Message": "Invalid API call." });

        let result = parse_crypto(&body, "XXX", "USD");
        assert!(matches!(result, Err(QuoteError::UnknownSymbol(s)) if s == "XXX/USD"));
    }

    #[test]
    fn crypto_parser_rejects_non_numeric_rate() {
        let body = json!({
            "Realtime Currency Exchange Rate": { "5. Exchange Rate": "not-a-number" }
        });

        let result = parse_crypto(&body, "BTC", "USD");
        assert!(matches!(result, Err(QuoteError::Parse(_))));
    }
}
