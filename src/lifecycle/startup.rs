//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the optional route file
//! - Build the table: catalog, then development routes, then file routes
//! - Publish the table as read-only process-wide state
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The table is built completely before it is published
//! - Publishing a second table is an error, not a replace

use std::sync::{Arc, OnceLock};

use thiserror::Error;

use crate::catalog;
use crate::config::{load_route_file, ConfigError, LoadedRoutes, RoutesConfig};
use crate::routing::{RouteTable, RouteTableBuilder, Router, TableError};

static PUBLISHED: OnceLock<Arc<RouteTable>> = OnceLock::new();

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("a route table has already been published")]
    AlreadyPublished,
}

/// Build the route table for `config` without publishing it.
pub fn build_table(config: &RoutesConfig) -> Result<RouteTable, StartupError> {
    let extra = match &config.route_file {
        Some(path) => load_route_file(path)?,
        None => LoadedRoutes::default(),
    };
    let development = config.environment.is_development();

    let table = RouteTableBuilder::with_base(catalog::base_routes())
        .extend_if(development, catalog::development_routes())
        .extend(extra.routes)
        .extend_if(development, extra.development_routes)
        .build()?;

    tracing::info!(
        environment = %config.environment,
        routes = table.len(),
        "Route table ready"
    );
    Ok(table)
}

/// Publish `table` as the process-wide route table.
pub fn publish(table: RouteTable) -> Result<Arc<RouteTable>, StartupError> {
    let table = Arc::new(table);
    PUBLISHED
        .set(Arc::clone(&table))
        .map_err(|_| StartupError::AlreadyPublished)?;
    Ok(table)
}

/// The published table, if startup has completed.
pub fn published() -> Option<Arc<RouteTable>> {
    PUBLISHED.get().cloned()
}

/// Build, publish and return a router over the published table.
pub fn start(config: &RoutesConfig) -> Result<Router, StartupError> {
    let table = publish(build_table(config)?)?;
    Ok(Router::new(table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    fn config(environment: Environment) -> RoutesConfig {
        RoutesConfig {
            environment,
            ..RoutesConfig::default()
        }
    }

    #[test]
    fn test_development_routes_are_gated() {
        let production = build_table(&config(Environment::Production)).unwrap();
        assert!(production.find("components").is_none());

        let development = build_table(&config(Environment::Development)).unwrap();
        assert_eq!(development.len(), production.len() + 1);
        assert_eq!(development.position("components"), Some(production.len()));
    }

    #[test]
    fn test_missing_route_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = RoutesConfig {
            route_file: Some(dir.path().join("missing.toml")),
            ..RoutesConfig::default()
        };
        assert!(matches!(
            build_table(&config),
            Err(StartupError::Config(ConfigError::Io { .. }))
        ));
    }

    // The only unit test that publishes; the OnceLock is process-wide.
    #[test]
    fn test_publish_once() {
        let router = start(&config(Environment::Production)).unwrap();
        let table = published().unwrap();
        assert_eq!(table.len(), router.table().len());

        let again = build_table(&config(Environment::Production)).unwrap();
        assert!(matches!(publish(again), Err(StartupError::AlreadyPublished)));
    }
}
