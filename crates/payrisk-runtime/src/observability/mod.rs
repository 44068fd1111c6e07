//! Observability module
//!
//! Provides in-process scoring metrics. Structured logs are emitted with
//! `tracing` at the call sites.

pub mod metrics;

pub use metrics::{MetricsSnapshot, RiskMetrics};
