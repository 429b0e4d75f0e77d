//! Route-list parsing
//!
//! Accepts the classic `AB5, BC4, CD8` form (single-letter cities) and a long
//! form for arbitrary names, `Paris-Lyon:465`. Tokens are separated by commas
//! and/or whitespace.

use std::sync::OnceLock;

use regex::Regex;

use crate::bail_invalid;
use crate::error::{Result, TrainsError};
use crate::graph::types::Route;

static ROUTE_TOKEN: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();

fn route_token_re() -> Result<&'static Regex> {
    ROUTE_TOKEN
        .get_or_init(|| {
            Regex::new(
                r"^(?:(?P<cfrom>[A-Za-z])(?P<cto>[A-Za-z])|(?P<lfrom>[^\s,:\-]+)-(?P<lto>[^\s,:\-]+):)(?P<distance>\d+)$",
            )
        })
        .as_ref()
        .map_err(|e| TrainsError::Other(format!("failed to compile route regex: {}", e)))
}

/// Parse a single route token
pub fn parse_route(token: &str) -> Result<Route> {
    let re = route_token_re()?;
    let token = token.trim();

    let Some(caps) = re.captures(token) else {
        bail_invalid!("route", token);
    };

    let (from, to) = match (caps.name("cfrom"), caps.name("cto")) {
        (Some(from), Some(to)) => (from.as_str(), to.as_str()),
        _ => match (caps.name("lfrom"), caps.name("lto")) {
            (Some(from), Some(to)) => (from.as_str(), to.as_str()),
            _ => bail_invalid!("route", token),
        },
    };

    let distance: u32 = match caps["distance"].parse() {
        Ok(distance) => distance,
        Err(_) => bail_invalid!("route distance", token),
    };

    Ok(Route::new(from, to, distance))
}

/// Parse a full route list such as `AB5, BC4, CD8`
///
/// Empty input yields an empty list. Duplicate city pairs are kept in input
/// order; the graph applies last-write-wins when they are inserted.
pub fn parse_routes(input: &str) -> Result<Vec<Route>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_route)
        .collect()
}
