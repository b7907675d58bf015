//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request logger and store produce:
//!     → logging.rs (tracing subscriber, timing lines)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;
