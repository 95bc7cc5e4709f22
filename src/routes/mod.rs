//! API Routes
//!
//! - `POST /extract-text` - Extract plain text from an uploaded PDF or DOCX
//! - `GET /health` - Liveness check

pub mod extract;
pub mod health;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::apply_cors;
use crate::models::AppState;

/// Create the main application router
///
/// With no upload cap configured the framework's default body limit is
/// lifted, so uploads are bounded only by the host.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let body_limit = match state.config.server.max_upload_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };

    let router = Router::new()
        .merge(extract::router())
        .merge(health::router())
        .layer(body_limit);

    apply_cors(router, &state.config.server).layer(TraceLayer::new_for_http())
}
