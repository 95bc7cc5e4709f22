use axum::{Router, routing::get, Json, response::Json as ResponseJson};
use crate::models::HealthResponse;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health_check))
}

async fn health_check() -> ResponseJson<HealthResponse> {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    Json(response)
}
