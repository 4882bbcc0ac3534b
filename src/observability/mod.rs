//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Table build and resolution produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (resolution counters)
//!
//! Consumers:
//!     → Log output (stderr, filtered by RUST_LOG)
//!     → Whatever metrics recorder the host process installs
//! ```
//!
//! # Design Decisions
//! - Structured fields (`route`, `path`, `count`) on every event
//! - The library never installs a subscriber or recorder itself;
//!   the binary calls `logging::init`

pub mod logging;
pub mod metrics;
