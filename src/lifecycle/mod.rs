//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Resolve environment → Load route file → Build table → Publish
//! ```
//!
//! # Design Decisions
//! - Fail fast: any build error is fatal
//! - Publication happens once; readers only ever see the frozen table

pub mod startup;

pub use startup::{build_table, publish, published, start, StartupError};
