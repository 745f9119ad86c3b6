//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handler, backend client, HTTP layer
//!     → logging.rs (structured log events, request-id spans)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → CloudWatch (Lambda stdout) or terminal
//!     → Metrics endpoint (Prometheus scrape, local mode)
//! ```

pub mod logging;
pub mod metrics;
