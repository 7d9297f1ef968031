// src/web/mod.rs
// HTTP surface: health, lesson generation and coaching

pub mod api;
pub mod envelope;
pub mod error;
pub mod state;

pub use envelope::{COACH_KEY, LESSON_KEY, ResponseEnvelope};
pub use error::ApiError;
pub use state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the web server router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(api::health))
        .route("/generate_lesson", post(api::generate_lesson))
        .route("/coach", post(api::coach))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
