//! HTTP surface of the agent

mod card;
mod error;
mod handlers;

pub use error::RequestError;

use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::skill::{AllCaps, TextSkill};

/// Application state shared across HTTP handlers
///
/// The skill object is immutable; nothing else is shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// The skill executed on submitted text
    pub skill: Arc<dyn TextSkill>,
}

impl AppState {
    /// Create state around a skill
    pub fn new(skill: Arc<dyn TextSkill>) -> Self {
        Self { skill }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(AllCaps))
    }
}

/// Create the HTTP router with all endpoints
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::index).post(handlers::send_message),
        )
        .route("/.well-known/agent.json", get(handlers::agent_card))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
