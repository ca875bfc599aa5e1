//! Core domain layer. No external I/O dependencies.
//!
//! Intents, canned replies and the prompt classifier live here.

pub mod classifier;
pub mod entities;
pub mod errors;

pub use classifier::{classify, extract_entity_name};
pub use entities::Intent;
pub use errors::DomainError;
