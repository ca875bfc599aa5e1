//! Inbound port. The HTTP front door calls into the application.

use crate::domain::DomainError;

/// Input port: turn one prompt into one reply.
#[async_trait::async_trait]
pub trait PromptPort: Send + Sync {
    /// Classify `prompt` and produce the bot's reply.
    ///
    /// Unrecognised prompts are not errors; only catalog failures are.
    async fn reply(&self, prompt: &str) -> Result<String, DomainError>;
}
