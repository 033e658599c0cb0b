//! Message dispatcher - Routes command messages to handlers

use crate::domain::entities::CommandRegistry;

/// Matches inbound text against the command registry and runs the first
/// matching handler.
///
/// All state is fixed at construction; each `handle` call is independent, so
/// any number of messages can be in flight concurrently.
pub struct MessageDispatcher {
    marker: String,
    registry: CommandRegistry,
}

impl MessageDispatcher {
    pub fn new(marker: impl Into<String>, registry: CommandRegistry) -> Self {
        Self {
            marker: marker.into(),
            registry,
        }
    }

    /// The activation predicate adapters apply before calling `handle`.
    pub fn accepts(&self, raw_text: &str) -> bool {
        raw_text.starts_with(&self.marker)
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Dispatch one raw message. Returns `None` when no trigger matched, in
    /// which case the caller sends no reply.
    ///
    /// Only the first occurrence of the marker is stripped; a marker later in
    /// the body is part of the argument. After a trigger matches, the matched
    /// substring and then exactly one space are removed to form the argument.
    /// Removing a single space (not all leading whitespace) is contractual:
    /// `price aa pl` yields the argument `aa pl`.
    pub async fn handle(&self, raw_text: &str) -> Option<String> {
        let stripped = raw_text.replacen(&self.marker, "", 1);
        let lowered = stripped.to_lowercase();

        for definition in self.registry.iter() {
            let Some(found) = definition.trigger().find(&lowered) else {
                continue;
            };

            let mut argument = String::with_capacity(lowered.len());
            argument.push_str(&lowered[..found.start()]);
            argument.push_str(&lowered[found.end()..]);
            let argument = argument.replacen(' ', "", 1);

            tracing::info!(
                "Command '{}{}' with argument '{}'",
                self.marker,
                definition.pattern(),
                argument
            );

            return Some(definition.handler().run(&argument).await);
        }

        tracing::debug!("No trigger matched, ignoring message");
        None
    }
}
