//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Table Compilation (at startup):
//!     catalog RouteDefinition[] + extensions
//!     → table.rs (append in order, validate)
//!     → pattern.rs (expand :params, compile regex)
//!     → Freeze as immutable RouteTable
//!
//! Incoming Request (decoded path, optional query)
//!     → router.rs (ordered scan)
//!     → pattern.rs (match, extract captures)
//!     → Return: RouteMatch (page or redirect) or NotFound
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: same input always matches same route
//! - First match wins; list order is part of the contract, so
//!   overlapping patterns must be ordered deliberately
//! - `routeAlias` is carried but never matched here

pub mod pattern;
pub mod route;
pub mod router;
pub mod table;

pub use pattern::{Captures, RoutePattern};
pub use route::{PageRoute, RedirectRoute, RouteDefinition, RouteEntry, RouteKind};
pub use router::{is_redirect, Resolution, RouteMatch, Router};
pub use table::{RouteTable, RouteTableBuilder, TableError};
