//! In-memory catalog for tests and offline runs.
//!
//! Serves fixed entities without network calls. Can be switched to fail every call.

use crate::domain::DomainError;
use crate::ports::CatalogPort;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// Fixed-data catalog.
#[derive(Default)]
pub struct InMemoryCatalog {
    /// Entity name -> feature names, in insertion order.
    entities: Vec<(String, Vec<String>)>,
    failing: bool,
    calls: AtomicUsize,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog whose every call returns `DomainError::Catalog`.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Small demo catalog used by `FEATURE_BOT_CATALOG=memory`.
    pub fn sample() -> Self {
        Self::new()
            .with_entity("customer", ["age", "income", "tenure_months"])
            .with_entity("product", ["price", "category", "rating"])
            .with_entity("transaction", ["amount", "currency", "is_fraud"])
    }

    /// Add an entity with its features.
    pub fn with_entity<I, S>(mut self, name: &str, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entities.push((
            name.to_string(),
            features.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Number of catalog calls served (including failed ones).
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(DomainError::Catalog("in-memory catalog set to fail".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogPort for InMemoryCatalog {
    async fn fetch_entity_names(&self) -> Result<Vec<String>, DomainError> {
        self.record_call()?;
        info!(count = self.entities.len(), "[MEMORY] serving catalog entities");
        Ok(self.entities.iter().map(|(name, _)| name.clone()).collect())
    }

    /// Unknown entities yield an empty list. Names compare case-insensitively.
    async fn fetch_feature_names(&self, entity_name: &str) -> Result<Vec<String>, DomainError> {
        self.record_call()?;
        let features = self
            .entities
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(entity_name))
            .map(|(_, features)| features.clone())
            .unwrap_or_default();
        info!(
            entity = entity_name,
            count = features.len(),
            "[MEMORY] serving catalog features"
        );
        Ok(features)
    }
}
