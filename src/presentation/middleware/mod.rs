//! Middleware
//!
//! Tower middleware for request processing.

pub mod charset;
pub mod cors;
pub mod logging;
pub mod metrics;

pub use charset::json_charset;
pub use metrics::track_metrics;
