//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::DomainError;

/// Read-only access to the entity/feature catalog.
///
/// Both calls are idempotent and uncached; any failure is returned as
/// `DomainError::Catalog` and never retried here.
#[async_trait::async_trait]
pub trait CatalogPort: Send + Sync {
    /// Fetch the names of all entities in the catalog.
    async fn fetch_entity_names(&self) -> Result<Vec<String>, DomainError>;

    /// Fetch the feature names grouped under `entity_name`.
    async fn fetch_feature_names(&self, entity_name: &str) -> Result<Vec<String>, DomainError>;
}
