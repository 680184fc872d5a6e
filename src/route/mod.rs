//! Request validation and route enrichment core

pub mod enricher;
pub mod params;
pub mod symbols;

pub use enricher::{find_route, RouteError, RouteResult};
pub use params::{is_valid_address, parse_route_params, ParseError, RouteParams, RouteQuery};
pub use symbols::SymbolCache;
