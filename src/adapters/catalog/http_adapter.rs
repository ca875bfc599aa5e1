//! HTTP catalog adapter. Implements CatalogPort against the feature marketplace REST API.
//!
//! Plain unauthenticated GETs: no retry, no caching, client-default timeouts.

use crate::domain::DomainError;
use crate::ports::CatalogPort;
use crate::shared::CatalogConfig;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

/// One element of `GET /api/Entity/GetAllEntities`. Other fields are ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntityDto {
    entity_name: String,
}

/// One element of `GET /api/Feature/GetFeaturesByEntityName/{entityName}`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeatureDto {
    feature_name: String,
}

/// Catalog client over HTTP.
pub struct HttpCatalogAdapter {
    client: Client,
    base_url: Url,
}

impl HttpCatalogAdapter {
    /// Create a new catalog adapter.
    ///
    /// # Errors
    /// Returns `DomainError::Config` if `config.base_url` is not an absolute http(s) URL.
    pub fn new(config: CatalogConfig) -> Result<Self, DomainError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            DomainError::Config(format!("invalid catalog URL {}: {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DomainError::Config(format!(
                "catalog URL cannot be a base: {}",
                config.base_url
            )));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Base URL with `segments` appended, each percent-encoded as a single path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, DomainError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                DomainError::Config(format!("catalog URL cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, DomainError> {
        debug!(url = %url, "catalog request");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| DomainError::Catalog(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = body_excerpt(&response.text().await.unwrap_or_default());
            warn!(status = %status, url = %url, body = %body, "catalog API returned error");
            return Err(DomainError::Catalog(format!("API error {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::Catalog(format!("Failed to parse catalog response: {}", e)))
    }
}

/// First 200 characters of an error body, for logs and error messages.
fn body_excerpt(text: &str) -> String {
    text.chars().take(200).collect()
}

#[async_trait::async_trait]
impl CatalogPort for HttpCatalogAdapter {
    async fn fetch_entity_names(&self) -> Result<Vec<String>, DomainError> {
        let url = self.endpoint(&["api", "Entity", "GetAllEntities"])?;
        let entities: Vec<EntityDto> = self.get_json(url).await?;
        info!(count = entities.len(), "fetched catalog entities");
        Ok(entities.into_iter().map(|e| e.entity_name).collect())
    }

    async fn fetch_feature_names(&self, entity_name: &str) -> Result<Vec<String>, DomainError> {
        let url = self.endpoint(&["api", "Feature", "GetFeaturesByEntityName", entity_name])?;
        let features: Vec<FeatureDto> = self.get_json(url).await?;
        info!(
            entity = entity_name,
            count = features.len(),
            "fetched catalog features"
        );
        Ok(features.into_iter().map(|f| f.feature_name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::Path,
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::get,
    };
    use serde_json::json;

    async fn features_handler(Path(name): Path<String>) -> Response {
        match name.as_str() {
            "widgets" => Json(json!([
                { "featureId": 1, "featureName": "color" },
                { "featureId": 2, "featureName": "weight" }
            ]))
            .into_response(),
            "sales orders" => Json(json!([{ "featureName": "total" }])).into_response(),
            "broken" => (StatusCode::OK, "not json").into_response(),
            "verbose" => (StatusCode::INTERNAL_SERVER_ERROR, "x".repeat(1000)).into_response(),
            _ => (StatusCode::NOT_FOUND, "no such entity").into_response(),
        }
    }

    /// Serve a stand-in catalog on an ephemeral port; returns its base URL.
    async fn spawn_catalog() -> String {
        let app = Router::new()
            .route(
                "/api/Entity/GetAllEntities",
                get(|| async {
                    Json(json!([
                        { "entityId": 1, "entityName": "widgets" },
                        { "entityId": 2, "entityName": "gadgets" }
                    ]))
                }),
            )
            .route(
                "/api/Feature/GetFeaturesByEntityName/:name",
                get(features_handler),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn adapter(base_url: String) -> HttpCatalogAdapter {
        HttpCatalogAdapter::new(CatalogConfig { base_url }).unwrap()
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let err = HttpCatalogAdapter::new(CatalogConfig {
            base_url: "not a url".into(),
        })
        .err()
        .unwrap();
        assert!(matches!(err, DomainError::Config(_)));

        let err = HttpCatalogAdapter::new(CatalogConfig {
            base_url: "mailto:someone@example.com".into(),
        })
        .err()
        .unwrap();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[test]
    fn test_endpoint_encodes_entity_segment() {
        let catalog = adapter("http://catalog.local/base/".into());
        let url = catalog
            .endpoint(&["api", "Feature", "GetFeaturesByEntityName", "a/b c"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://catalog.local/base/api/Feature/GetFeaturesByEntityName/a%2Fb%20c"
        );
    }

    #[tokio::test]
    async fn test_fetch_entity_names() {
        let catalog = adapter(spawn_catalog().await);
        let names = catalog.fetch_entity_names().await.unwrap();
        assert_eq!(names, vec!["widgets", "gadgets"]);
    }

    #[tokio::test]
    async fn test_fetch_feature_names() {
        let catalog = adapter(spawn_catalog().await);
        let names = catalog.fetch_feature_names("widgets").await.unwrap();
        assert_eq!(names, vec!["color", "weight"]);
    }

    #[tokio::test]
    async fn test_fetch_feature_names_with_space() {
        let catalog = adapter(spawn_catalog().await);
        let names = catalog.fetch_feature_names("sales orders").await.unwrap();
        assert_eq!(names, vec!["total"]);
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let catalog = adapter(spawn_catalog().await);
        let err = catalog.fetch_feature_names("unknown").await.unwrap_err();
        match err {
            DomainError::Catalog(msg) => {
                assert!(msg.contains("404"));
                assert!(msg.contains("no such entity"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_long_error_body_is_cut() {
        let catalog = adapter(spawn_catalog().await);
        let err = catalog.fetch_feature_names("verbose").await.unwrap_err();
        match err {
            DomainError::Catalog(msg) => {
                assert!(msg.starts_with("API error 500"));
                assert_eq!(msg.matches('x').count(), 200);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_body_excerpt_counts_chars() {
        assert_eq!(body_excerpt("short"), "short");
        assert_eq!(body_excerpt(&"é".repeat(300)).chars().count(), 200);
    }

    #[tokio::test]
    async fn test_malformed_body_is_error() {
        let catalog = adapter(spawn_catalog().await);
        let err = catalog.fetch_feature_names("broken").await.unwrap_err();
        assert!(matches!(err, DomainError::Catalog(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let catalog = adapter(format!("http://{}", addr));
        let err = catalog.fetch_entity_names().await.unwrap_err();
        assert!(matches!(err, DomainError::Catalog(_)));
    }
}
