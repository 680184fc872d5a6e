//! Routing oracle interface
//!
//! The gateway delegates pool-graph pathfinding, output estimation, and
//! calldata encoding to an external routing oracle. The oracle is consumed
//! behind this narrow trait so the enrichment core can be exercised against a
//! deterministic stub without any network dependency.

mod http;

pub use http::HttpOracle;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One hop of a multi-hop swap. The oracle owns the full step payload; the
/// gateway only reads the coin addresses to drive symbol enrichment, so any
/// extra fields round-trip opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteStep {
    #[serde(rename = "poolId")]
    pub pool_id: String,
    #[serde(rename = "poolAddress")]
    pub pool_address: String,
    #[serde(rename = "inputCoinAddress")]
    pub input_coin_address: String,
    #[serde(rename = "outputCoinAddress")]
    pub output_coin_address: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Best route over the pool graph plus the expected output amount.
#[derive(Debug, Clone, Deserialize)]
pub struct BestRoute {
    pub route: Vec<RouteStep>,
    pub output: String,
}

/// A populated (unsigned) contract call. The oracle may legitimately return
/// neither field when it cannot encode the call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PopulatedTx {
    pub to: Option<String>,
    pub data: Option<String>,
}

/// External routing oracle capability interface.
#[async_trait::async_trait]
pub trait RoutingOracle: Send + Sync + 'static {
    /// Pool-data bootstrap. Must complete before the gateway accepts traffic.
    async fn fetch_pools(&self) -> Result<()>;

    /// Best route and expected output for swapping `amount` of `from` into `to`.
    async fn best_route_and_output(&self, from: &str, to: &str, amount: &str)
        -> Result<BestRoute>;

    /// Symbol of the token at `address`. Failure is treated as "unknown" by
    /// the caller, never propagated to the client.
    async fn symbol_of(&self, address: &str) -> Result<String>;

    /// Encode the swap call for the current best route.
    async fn populate_swap(&self, from: &str, to: &str, amount: &str) -> Result<PopulatedTx>;

    /// Whether `owner` already granted `spender` allowance over `tokens` for
    /// at least `amounts`.
    async fn has_allowance(
        &self,
        owner: &str,
        tokens: &[&str],
        amounts: &[&str],
        spender: &str,
    ) -> Result<bool>;

    /// Encode the approval calls `sender` must issue before swapping `amount`
    /// of `token`.
    async fn populate_approve(
        &self,
        token: &str,
        amount: &str,
        sender: &str,
    ) -> Result<Vec<PopulatedTx>>;
}
