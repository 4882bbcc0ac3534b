//! Resolution metrics.
//!
//! # Metrics
//! - `site_routes_resolutions_total` (counter): matches by route, kind
//! - `site_routes_not_found_total` (counter): paths with no route
//!
//! Without an installed recorder these are no-ops.

pub const RESOLUTIONS_TOTAL: &str = "site_routes_resolutions_total";
pub const NOT_FOUND_TOTAL: &str = "site_routes_not_found_total";

/// Count a successful resolution.
pub fn record_resolution(route: &str, kind: &'static str) {
    ::metrics::counter!(RESOLUTIONS_TOTAL, "route" => route.to_string(), "kind" => kind).increment(1);
}

/// Count a path that matched nothing.
pub fn record_not_found() {
    ::metrics::counter!(NOT_FOUND_TOTAL).increment(1);
}
