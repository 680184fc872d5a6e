//! Route enrichment orchestration
//!
//! Fans out the independent oracle lookups for one swap intent (best route,
//! endpoint symbols, swap calldata), resolves symbols for every hop of the
//! returned route, and conditionally checks allowance for the sender. Symbol
//! lookups are best-effort; route and calldata lookups are not.

use std::collections::{BTreeMap, BTreeSet};

use futures::future::join_all;
use serde::Serialize;

use crate::oracle::{RouteStep, RoutingOracle};
use crate::route::params::{is_valid_address, RouteParams};
use crate::route::symbols::SymbolCache;

/// Full `/route` response payload.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub from: String,
    pub from_symbol: String,
    pub to: String,
    pub to_symbol: String,
    pub amount: String,
    pub output: String,
    pub route: Vec<RouteStep>,
    /// Lowercased hop address -> symbol, unknown symbols omitted.
    pub route_symbols: BTreeMap<String, String>,
    pub router_address: String,
    pub calldata: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_calldata: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Failed to generate swap transaction")]
    SwapUnavailable,

    #[error(transparent)]
    Oracle(#[from] anyhow::Error),
}

/// Build the full route plan for a validated swap intent.
///
/// A missing swap target or calldata is a hard failure: a route that cannot be
/// executed is not a valid result. Approval calldata is best-effort and only
/// attached when `sender` is a valid address that lacks sufficient allowance
/// and the oracle produced a usable approve transaction.
pub async fn find_route(
    oracle: &dyn RoutingOracle,
    symbols: &SymbolCache,
    params: &RouteParams,
    sender: Option<&str>,
) -> Result<RouteResult, RouteError> {
    let RouteParams { from, to, amount } = params;

    let (best, from_symbol, to_symbol, swap_tx) = tokio::join!(
        oracle.best_route_and_output(from, to, amount),
        symbols.token_symbol(oracle, from),
        symbols.token_symbol(oracle, to),
        oracle.populate_swap(from, to, amount),
    );
    let best = best?;
    let swap_tx = swap_tx?;

    let (router_address, calldata) = match (swap_tx.to, swap_tx.data) {
        (Some(target), Some(data)) => (target, data),
        _ => return Err(RouteError::SwapUnavailable),
    };

    let route_symbols = resolve_hop_symbols(oracle, symbols, &best.route).await;

    let mut result = RouteResult {
        from: from.clone(),
        from_symbol,
        to: to.clone(),
        to_symbol,
        amount: amount.clone(),
        output: best.output,
        route: best.route,
        route_symbols,
        router_address,
        calldata,
        approval_target: None,
        approval_calldata: None,
    };

    if let Some(sender) = sender.filter(|s| is_valid_address(s)) {
        let approved = oracle
            .has_allowance(sender, &[from.as_str()], &[amount.as_str()], &result.router_address)
            .await?;
        if !approved {
            let approve_txs = oracle.populate_approve(from, amount, sender).await?;
            if let Some(tx) = approve_txs.into_iter().next() {
                if let (Some(target), Some(data)) = (tx.to, tx.data) {
                    result.approval_target = Some(target);
                    result.approval_calldata = Some(data);
                }
            }
        }
    }

    Ok(result)
}

/// Resolve symbols for every distinct coin address across the route's hops,
/// concurrently. Unknown symbols are dropped from the map.
async fn resolve_hop_symbols(
    oracle: &dyn RoutingOracle,
    symbols: &SymbolCache,
    route: &[RouteStep],
) -> BTreeMap<String, String> {
    let addresses: BTreeSet<String> = route
        .iter()
        .flat_map(|step| [&step.input_coin_address, &step.output_coin_address])
        .map(|addr| addr.to_lowercase())
        .collect();

    let lookups = addresses.iter().map(|addr| async {
        let symbol = symbols.token_symbol(oracle, addr).await;
        (addr.clone(), symbol)
    });

    join_all(lookups)
        .await
        .into_iter()
        .filter(|(_, symbol)| !symbol.is_empty())
        .collect()
}
