//! Route table of the service

use super::handlers::validate_cpf;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Build the CPF route and the health routes
///
/// - GET|POST {route} - Validate a CPF from `?cpf=` or the request body
/// - GET /health, /healthz - Liveness probe
pub fn build_routes(route: &str) -> Router {
    Router::new()
        .route(route, get(validate_cpf).post(validate_cpf))
        .merge(health_routes())
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "cpf-validator"
    }))
}
