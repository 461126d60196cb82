//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Router / Dispatcher / HTTP host produce:
//!     → logging.rs (structured log events, stdout)
//!     → metrics.rs (per-outcome counters, dispatch latency)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line emitted under the HTTP span
//! - Metrics are cheap (atomic increments) and no-ops until a recorder is installed

pub mod logging;
pub mod metrics;

pub use logging::init_tracing;
pub use metrics::{init_metrics, record_outcome};
