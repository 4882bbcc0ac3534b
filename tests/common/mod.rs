//! Shared helpers for integration tests.

use std::sync::Arc;

use site_routes::catalog;
use site_routes::routing::{RouteDefinition, RouteTableBuilder, Router};

/// Router over the built-in catalog, production set only.
pub fn production_router() -> Router {
    router_with(catalog::base_routes(), Vec::new())
}

/// Router over the built-in catalog with development routes appended.
#[allow(dead_code)]
pub fn development_router() -> Router {
    router_with(catalog::base_routes(), catalog::development_routes())
}

/// Router over explicit base and appended lists.
pub fn router_with(base: Vec<RouteDefinition>, extra: Vec<RouteDefinition>) -> Router {
    let table = RouteTableBuilder::with_base(base)
        .extend(extra)
        .build()
        .expect("route table should build");
    Router::new(Arc::new(table))
}
