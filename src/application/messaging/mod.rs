//! Message handling - dispatch of marker-prefixed commands

pub mod dispatcher;

pub use dispatcher::MessageDispatcher;

#[cfg(test)]
mod tests;
