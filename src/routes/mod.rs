//! Composição do router da API

pub mod auth_routes;
pub mod client_routes;
pub mod delivery_routes;
pub mod finance_routes;
pub mod quote_routes;
pub mod report_routes;
pub mod settings_routes;
pub mod truck_routes;
pub mod user_routes;

use axum::{middleware, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Montar o router completo da aplicação com middlewares
pub fn create_app_router(state: AppState) -> Router {
    // Rotas exclusivas de administrador
    let admin_routes = Router::new()
        .nest("/api/user", user_routes::create_user_router())
        .nest("/api/settings", settings_routes::create_settings_router())
        .nest("/api/finance", finance_routes::create_finance_router())
        .route_layer(middleware::from_fn(admin_only_middleware));

    // Rotas que exigem sessão válida
    let protected_routes = Router::new()
        .nest("/api/client", client_routes::create_client_router())
        .nest("/api/truck", truck_routes::create_truck_router())
        .nest("/api/quote", quote_routes::create_quote_router())
        .nest("/api/delivery", delivery_routes::create_delivery_router())
        .nest("/api/report", report_routes::create_report_router())
        .merge(admin_routes)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/auth", auth_routes::create_auth_router(state.clone()))
        .merge(protected_routes)
        .layer(cors_middleware())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint de liveness
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "ConcreteFlow API operacional",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
