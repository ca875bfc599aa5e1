//! Infrastructure adapters. Implement outbound ports and drive inbound ones.
//!
//! Catalog HTTP client, in-memory catalog, axum server. Map errors to DomainError.

pub mod catalog;
pub mod http;
