//! Request parameter validation
//!
//! Pure input checks for the `/route` endpoint: address syntax and amount
//! sanity. Nothing here touches the network.

use serde::Deserialize;

/// Raw `/route` query parameters, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct RouteQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
    pub sender: Option<String>,
}

/// Validated swap intent. Addresses keep the caller's casing; the amount keeps
/// the caller's exact decimal string to preserve precision downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteParams {
    pub from: String,
    pub to: String,
    pub amount: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Missing required params: from, to (token addresses)")]
    MissingParams,

    #[error("Invalid 'from' address: {0}")]
    InvalidFrom(String),

    #[error("Invalid 'to' address: {0}")]
    InvalidTo(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// Syntactic check for a 20-byte hex address: `0x` + 40 hex digits, any case.
/// No checksum validation.
pub fn is_valid_address(address: &str) -> bool {
    let Some(hex) = address.strip_prefix("0x") else {
        return false;
    };
    hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Validate and default the `/route` query. First failing check wins; `amount`
/// defaults to `"1"` when absent. Total and deterministic.
pub fn parse_route_params(query: &RouteQuery) -> Result<RouteParams, ParseError> {
    // An empty value is as good as an absent one
    let from = query.from.as_deref().filter(|s| !s.is_empty());
    let to = query.to.as_deref().filter(|s| !s.is_empty());
    let (Some(from), Some(to)) = (from, to) else {
        return Err(ParseError::MissingParams);
    };

    if !is_valid_address(from) {
        return Err(ParseError::InvalidFrom(from.to_string()));
    }
    if !is_valid_address(to) {
        return Err(ParseError::InvalidTo(to.to_string()));
    }

    let amount = query.amount.as_deref().unwrap_or("1");
    match amount.parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => {}
        _ => return Err(ParseError::InvalidAmount(amount.to_string())),
    }

    Ok(RouteParams {
        from: from.to_string(),
        to: to.to_string(),
        amount: amount.to_string(),
    })
}
