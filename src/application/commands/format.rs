//! Response formatting - pure functions from quote data to reply strings

use crate::infrastructure::quotes::{CryptoQuote, EquityQuote};

/// Appended when a crypto price clears 1000 quote units.
pub const GAINS_SUFFIX: &str = " 🚀 big gains!";

/// Appended when the base currency is DOGE.
pub const DOGE_SUFFIX: &str = " 🐶 wow, much coin!";

/// Format the latest intraday bar of an equity symbol
pub fn equity_reply(symbol: &str, quote: &EquityQuote) -> String {
    format!(
        "{} last minute price:\nopening: {}\nclosing: {}",
        symbol, quote.open, quote.close
    )
}

pub fn equity_apology(symbol: &str) -> String {
    format!("Sorry, I couldn't find a price for {} :(", symbol)
}

/// Format a crypto exchange rate. The magnitude suffix is checked first,
/// the DOGE suffix second; the checks are independent and both can apply.
pub fn crypto_reply(quote: &CryptoQuote) -> String {
    let mut reply = format!("1 {}: {} {}", quote.base, quote.price, quote.quote);

    if quote.price > 1000.0 {
        reply.push_str(GAINS_SUFFIX);
    }
    if quote.base == "DOGE" {
        reply.push_str(DOGE_SUFFIX);
    }

    reply
}

pub fn crypto_apology(argument: &str) -> String {
    format!("Sorry, I couldn't get a rate for '{}' :(", argument)
}

/// Header plus one backtick-wrapped line per visible trigger, registry order
pub fn help_reply(marker: &str, patterns: &[String]) -> String {
    let mut reply = String::from("Available commands are:\n");
    for pattern in patterns {
        reply.push_str(&format!("`{}{}`\n", marker, pattern));
    }
    reply
}

pub fn unknown_reply(marker: &str) -> String {
    format!("I don't know what you want. Type `{}help`", marker)
}
