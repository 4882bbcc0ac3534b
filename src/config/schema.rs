//! Configuration schema definitions.
//!
//! Route files carry rows in the same shape the site's route table has
//! always used: one flat record per route, page or redirect decided by
//! which fields are present. Rows are turned into typed
//! [`RouteDefinition`](crate::routing::RouteDefinition)s by
//! [`validation`](crate::config::validation).

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Root configuration for building the route table.
#[derive(Debug, Clone, Default)]
pub struct RoutesConfig {
    /// Deployment environment; gates development-only routes.
    pub environment: Environment,

    /// Optional TOML file with extra routes appended after the catalog.
    pub route_file: Option<PathBuf>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Observability configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Log level used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Development,
}

impl Environment {
    /// Read `SITE_ENV`, falling back to `NODE_ENV`.
    ///
    /// A variable that is unset, empty or unrecognised is skipped. If
    /// neither holds a known value the environment is production.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        ["SITE_ENV", "NODE_ENV"]
            .into_iter()
            .find_map(|key| lookup(key)?.parse().ok())
            .unwrap_or_default()
    }

    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown environment `{0}` (expected production or development)")]
pub struct ParseEnvironmentError(String);

impl FromStr for Environment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" => Ok(Environment::Development),
            _ => Err(ParseEnvironmentError(s.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => f.write_str("production"),
            Environment::Development => f.write_str("development"),
        }
    }
}

/// Contents of a route file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct RouteFile {
    /// Routes appended in every environment.
    pub routes: Vec<RouteConfig>,

    /// Routes appended only in development.
    pub development_routes: Vec<RouteConfig>,
}

/// One route row as written in a route file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RouteConfig {
    /// Unique route name.
    pub name: String,

    /// Pattern matched against the request path.
    pub pattern: String,

    /// Edge alias pattern, passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_alias: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intl_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport_width: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_meta_tags: Option<bool>,

    /// Redirect target. Mutually exclusive with `view`/`title`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}
