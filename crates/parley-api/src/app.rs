use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::CorsConfig,
    docs::ApiDoc,
    middleware::logging,
    routes::{auth, messages},
    state::AppState,
};

/// Build the full router. Requests with the wrong method get 405 from axum;
/// HEAD is rejected explicitly since `get` would otherwise answer it.
pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/send", post(messages::send_message))
        .route("/messages", get(messages::list_messages).head(method_not_allowed));
    
    let mut router = Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(logging::log_request));
    
    // CorsLayer answers every OPTIONS request itself, so only install it when enabled
    if let Some(cors) = build_cors_layer(&state.config.cors) {
        router = router.layer(cors);
    }
    
    router
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

fn build_cors_layer(cors: &CorsConfig) -> Option<CorsLayer> {
    if !cors.enabled {
        return None;
    }
    
    let layer = CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers(Any);
    
    let layer = if cors.origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<axum::http::HeaderValue> = cors
            .origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(origins)
    };
    
    Some(layer)
}
