//! Implementation of the `asklane routes` command

use serde::Serialize;

use asklane_core::{AskError, NavItem, Route};

use super::Context;
use crate::render;

/// One row of the route table.
#[derive(Debug, Clone, Serialize)]
pub struct RouteInfo {
    pub pattern: &'static str,
    pub page: &'static str,
}

/// Data payload for the routes command
#[derive(Debug, Clone, Serialize)]
pub struct RoutesData {
    pub routes: Vec<RouteInfo>,
    pub navigation: Vec<NavItem>,
}

/// List the route table and the sidebar navigation.
pub fn run_routes(ctx: &Context) -> Result<(), AskError> {
    let patterns = Route::patterns();
    let navigation = Route::navigation();
    let text = render::routes(patterns, &navigation);
    let data = RoutesData {
        routes: patterns
            .iter()
            .map(|&(pattern, page)| RouteInfo { pattern, page })
            .collect(),
        navigation,
    };
    ctx.emit("routes", &data, &text)
}
