//! GET /route - swap route discovery endpoint

use std::time::Instant;

use axum::extract::{Query, State};
use axum::Json;

use crate::api::AppState;
use crate::route::{self, RouteQuery, RouteResult};
use crate::types::{ApiError, ApiResult};

/// Short log label for a token: its symbol when known, an address prefix
/// otherwise.
fn token_label<'a>(symbol: &'a str, address: &'a str) -> &'a str {
    if symbol.is_empty() {
        &address[..address.len().min(10)]
    } else {
        symbol
    }
}

/// GET /route?from=ADDR&to=ADDR&amount=AMOUNT&sender=ADDR
pub async fn get_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> ApiResult<Json<RouteResult>> {
    let start = Instant::now();

    let params =
        route::parse_route_params(&query).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    // An empty sender means no approval check was requested
    let sender = query.sender.as_deref().filter(|s| !s.is_empty());
    if let Some(sender) = sender {
        if !route::is_valid_address(sender) {
            return Err(ApiError::BadRequest(format!(
                "Invalid sender address: {sender}"
            )));
        }
    }

    match route::find_route(state.oracle.as_ref(), &state.symbols, &params, sender).await {
        Ok(result) => {
            tracing::info!(
                from = token_label(&result.from_symbol, &result.from),
                to = token_label(&result.to_symbol, &result.to),
                amount = %result.amount,
                output = %result.output,
                steps = result.route.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "route found"
            );
            Ok(Json(result))
        }
        Err(err) => {
            tracing::error!(
                from = token_label("", &params.from),
                to = token_label("", &params.to),
                amount = %params.amount,
                elapsed_ms = start.elapsed().as_millis() as u64,
                error = %err,
                "route lookup failed"
            );
            Err(ApiError::Route(err))
        }
    }
}
