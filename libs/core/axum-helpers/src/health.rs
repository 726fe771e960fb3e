use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Liveness router mounted at `/health` by the composing application.
///
/// The service holds no external connections, so liveness is the only
/// check; there is no separate readiness probe.
pub fn health_router() -> Router {
    Router::new().route("/health", get(health))
}
