//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (page xor redirect per row)
//!     → RouteDefinition[] appended after the catalog
//!
//! Table build:
//!     catalog + extensions
//!     → validation.rs (unique names, patterns compile)
//!     → RouteTable (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Routes are fixed once built; there is no reload path
//! - Validation separates syntactic (serde) from semantic checks
//! - Environment comes from the caller, falling back to `SITE_ENV`/`NODE_ENV`

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_route_file, ConfigError, LoadedRoutes};
pub use schema::{Environment, ObservabilityConfig, RouteConfig, RouteFile, RoutesConfig};
pub use validation::ValidationError;
