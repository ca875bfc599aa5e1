//! Axum routes for the prompt endpoint.
//!
//! # Routes
//!
//! - `GET  /` - Returns `{"bot": "Hello! The API server is up and running."}`
//! - `POST /` - Accepts `{"prompt": "..."}`, returns `{"bot": "..."}` or 500 `{"error": "Internal Server Error"}`

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderValue, Method, StatusCode, header},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::DomainError;
use crate::domain::entities::SERVER_UP_REPLY;
use crate::ports::PromptPort;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Application entry point for prompts.
    pub prompts: Arc<dyn PromptPort>,
}

impl AppState {
    pub fn new(prompts: Arc<dyn PromptPort>) -> Self {
        Self { prompts }
    }
}

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BotReply {
    pub bot: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

/// Generic 500 body. Details stay in the logs.
fn internal_error() -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "Internal Server Error".to_string(),
        }),
    )
}

/// Build the axum router with all routes.
pub fn app_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(status_handler).post(prompt_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy. No origins means any origin; otherwise only the listed ones,
/// with the methods and headers the web client uses.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, DomainError> {
    if allowed_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }
    let origins = allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o)
                .map_err(|e| DomainError::Config(format!("invalid CORS origin {}: {}", o, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

/// GET / - liveness greeting.
async fn status_handler() -> Json<BotReply> {
    Json(BotReply {
        bot: SERVER_UP_REPLY.to_string(),
    })
}

/// POST / - answer one prompt.
///
/// Unreadable bodies and catalog failures are logged and collapsed into a generic 500.
async fn prompt_handler(
    State(state): State<AppState>,
    payload: Result<Json<PromptRequest>, JsonRejection>,
) -> Result<Json<BotReply>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "rejected prompt body");
        internal_error()
    })?;

    match state.prompts.reply(&request.prompt).await {
        Ok(bot) => Ok(Json(BotReply { bot })),
        Err(e) => {
            error!(error = %e, "failed to answer prompt");
            Err(internal_error())
        }
    }
}
