//! Swap Route Gateway
//!
//! Read-only HTTP server that turns a token-swap intent into the best route
//! across a liquidity-pool graph plus the calldata needed to execute it,
//! delegating pathfinding and encoding to an external routing oracle.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swap_route_gateway::api::{self, AppState};
use swap_route_gateway::oracle::{HttpOracle, RoutingOracle};
use swap_route_gateway::route::SymbolCache;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let rpc_url =
        std::env::var("RPC_URL").unwrap_or_else(|_| "http://localhost:8545".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let host: IpAddr = std::env::var("HOST")
        .ok()
        .and_then(|h| h.parse().ok())
        .unwrap_or(IpAddr::from([0, 0, 0, 0]));

    let oracle = Arc::new(HttpOracle::new(&rpc_url));
    tracing::info!("Connecting to routing oracle at {}", oracle.endpoint());

    // Pool bootstrap is the startup barrier: no listener until it completes
    if let Err(e) = oracle.fetch_pools().await {
        tracing::error!("Failed to fetch pool data: {e:#}");
        std::process::exit(1);
    }
    tracing::info!("Pool data ready");

    let state = AppState::new(oracle, SymbolCache::new());
    let app = api::router(state);

    let addr = SocketAddr::new(host, port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET /health - Health check");
    tracing::info!("  GET /       - Route finder page");
    tracing::info!("  GET /route  - Find route (?from=ADDR&to=ADDR&amount=AMOUNT&sender=ADDR)");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
