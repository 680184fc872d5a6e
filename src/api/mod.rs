//! HTTP surface of the gateway

use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::{routing::get, Router};
use tower_http::set_header::SetResponseHeaderLayer;

pub mod route;
pub mod system;

use crate::oracle::RoutingOracle;
use crate::route::SymbolCache;

/// Shared application state: the routing oracle and the symbol cache.
#[derive(Clone)]
pub struct AppState {
    pub oracle: Arc<dyn RoutingOracle>,
    pub symbols: SymbolCache,
}

impl AppState {
    pub fn new(oracle: Arc<dyn RoutingOracle>, symbols: SymbolCache) -> Self {
        Self { oracle, symbols }
    }
}

/// Create the gateway router with all endpoints. OPTIONS answers 204 on every
/// route, other unmatched methods 405, unmatched paths 404.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(system::index)
                .options(system::preflight)
                .fallback(system::method_not_allowed),
        )
        .route(
            "/health",
            get(system::health)
                .options(system::preflight)
                .fallback(system::method_not_allowed),
        )
        .route(
            "/route",
            get(route::get_route)
                .options(system::preflight)
                .fallback(system::method_not_allowed),
        )
        .fallback(system::fallback)
        // CORS headers are set on every response directly so the OPTIONS
        // handlers above stay in charge of the 204 preflight answer
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(state)
}
