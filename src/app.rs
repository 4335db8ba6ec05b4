use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::routes::{accounts, health, manager, portfolio, settings};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .merge(health::router())
        .merge(accounts::router(state.clone()))
        .merge(portfolio::router(state.clone()))
        .merge(manager::router(state.clone()))
        .merge(settings::router(state.clone()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Permissive when no origin is configured, otherwise a single allowed origin
/// with credentials.
pub fn cors_layer(origin: Option<&str>) -> CorsLayer {
    match origin.map(HeaderValue::from_str) {
        Some(Ok(value)) => CorsLayer::new()
            .allow_origin(AllowOrigin::exact(value))
            .allow_methods(tower_http::cors::AllowMethods::mirror_request())
            .allow_headers(tower_http::cors::AllowHeaders::mirror_request())
            .allow_credentials(true),
        Some(Err(_)) => {
            warn!("CORS_ORIGIN is not a valid header value, falling back to permissive CORS");
            CorsLayer::permissive()
        }
        None => CorsLayer::permissive(),
    }
}
