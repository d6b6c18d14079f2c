//! Rutas HTTP
//!
//! Todo cuelga de `/api` detrás del middleware JWT, salvo `/health`.

pub mod dashboard_routes;
pub mod insurance_routes;
pub mod record_routes;
pub mod reminder_routes;
pub mod transaction_routes;
pub mod vehicle_routes;

use axum::{middleware, response::Json, routing::get, Router};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::{auth_middleware, cors_layer};
use crate::state::AppState;

/// Rutas protegidas, relativas a `/api`
pub fn create_api_router(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(vehicle_routes::create_vehicle_router())
        .merge(insurance_routes::create_insurance_router())
        .merge(reminder_routes::create_reminder_router())
        .merge(record_routes::create_record_router())
        .merge(transaction_routes::create_transaction_router())
        .merge(dashboard_routes::create_dashboard_router())
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", create_api_router(state.clone()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// GET /health - sin autenticación
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
