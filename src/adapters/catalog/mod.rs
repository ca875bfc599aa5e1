//! Catalog adapters. Implement CatalogPort.
//!
//! HTTP adapter for the marketplace API and an in-memory catalog for tests and offline runs.

pub mod http_adapter;
pub mod memory_adapter;

pub use http_adapter::HttpCatalogAdapter;
pub use memory_adapter::InMemoryCatalog;
