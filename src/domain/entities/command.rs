use std::sync::Arc;

use async_trait::async_trait;
use regex_lite::Regex;

use crate::application::errors::BotError;

/// A command handler - receives the extracted argument text, returns the
/// reply. Handlers are total: every failure path must be converted into a
/// user-facing string before returning.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn run(&self, argument: &str) -> String;
}

/// One entry in the command registry: a trigger pattern plus the handler
/// invoked when it matches.
pub struct CommandDefinition {
    trigger: Regex,
    pattern: String,
    handler: Arc<dyn CommandHandler>,
    hidden: bool,
}

impl CommandDefinition {
    pub fn new(pattern: impl Into<String>, handler: Arc<dyn CommandHandler>) -> Result<Self, BotError> {
        let pattern = pattern.into();
        let trigger = Regex::new(&pattern)
            .map_err(|e| BotError::Config(format!("Invalid trigger '{}': {}", pattern, e)))?;
        Ok(Self {
            trigger,
            pattern,
            handler,
            hidden: false,
        })
    }

    /// Exclude this command from the help listing. Hidden commands still
    /// participate in matching.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn trigger(&self) -> &Regex {
        &self.trigger
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn handler(&self) -> &Arc<dyn CommandHandler> {
        &self.handler
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Ordered, immutable set of command definitions. Dispatch is a linear
/// first-match scan over this order, so the catch-all must be appended last.
pub struct CommandRegistry {
    definitions: Vec<CommandDefinition>,
}

impl CommandRegistry {
    pub fn new(definitions: Vec<CommandDefinition>) -> Self {
        Self { definitions }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.definitions.iter()
    }

    /// Trigger patterns of the non-hidden commands, in registry order.
    pub fn visible_patterns(&self) -> Vec<String> {
        self.definitions
            .iter()
            .filter(|d| !d.is_hidden())
            .map(|d| d.pattern().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
