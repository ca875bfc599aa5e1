//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the HTTP adapter into the application
//! - Outbound: Called by the application into the catalog

pub mod inbound;
pub mod outbound;

pub use inbound::PromptPort;
pub use outbound::CatalogPort;
