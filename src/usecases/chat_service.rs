//! Chat service. Classifies a prompt and answers it, calling the catalog when needed.

use crate::domain::entities::{
    ABOUT_WEBSITE_REPLY, ADD_INSTRUCTIONS_REPLY, CAPABILITIES_REPLY, FALLBACK_REPLY,
    GREETING_REPLY, MISSING_ENTITY_REPLY, SEARCH_HELP_REPLY, entities_reply, features_reply,
};
use crate::domain::{DomainError, Intent, classify};
use crate::ports::{CatalogPort, PromptPort};
use std::sync::Arc;
use tracing::debug;

/// Stateless prompt -> reply service.
///
/// Every prompt is handled on its own: classify, then either return the
/// canned text or make exactly one catalog call.
pub struct ChatService {
    catalog: Arc<dyn CatalogPort>,
}

impl ChatService {
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self { catalog }
    }

    async fn answer(&self, intent: &Intent) -> Result<String, DomainError> {
        match intent {
            Intent::EntityFeatures(entity_name) => {
                let features = self.catalog.fetch_feature_names(entity_name).await?;
                Ok(features_reply(entity_name, &features))
            }
            Intent::ListEntities => {
                let entities = self.catalog.fetch_entity_names().await?;
                Ok(entities_reply(&entities))
            }
            Intent::SearchHelp => Ok(SEARCH_HELP_REPLY.to_string()),
            Intent::MissingEntity => Ok(MISSING_ENTITY_REPLY.to_string()),
            Intent::AddInstructions => Ok(ADD_INSTRUCTIONS_REPLY.to_string()),
            Intent::AboutWebsite => Ok(ABOUT_WEBSITE_REPLY.to_string()),
            Intent::Capabilities => Ok(CAPABILITIES_REPLY.to_string()),
            Intent::Greeting => Ok(GREETING_REPLY.to_string()),
            Intent::Fallback => Ok(FALLBACK_REPLY.to_string()),
        }
    }
}

#[async_trait::async_trait]
impl PromptPort for ChatService {
    async fn reply(&self, prompt: &str) -> Result<String, DomainError> {
        let prompt = prompt.to_lowercase();
        let intent = classify(&prompt);
        debug!(intent = %intent, prompt_len = prompt.len(), "prompt classified");
        self.answer(&intent).await
    }
}
