//! HTTP front door. Axum router calling the inbound PromptPort.

pub mod routes;

pub use routes::{AppState, BotReply, ErrorBody, PromptRequest, app_router, cors_layer};
