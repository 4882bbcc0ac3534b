//! Site route table and resolver.
//!
//! Maps request paths to a page to render or a redirect to issue,
//! first match wins.

pub mod catalog;
pub mod config;
pub mod edge;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::{Environment, RoutesConfig};
pub use routing::{Resolution, RouteMatch, RouteTable, Router};
