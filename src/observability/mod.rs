//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; level comes from config,
//!   RUST_LOG wins when set
//! - Metrics are cheap counter increments; the host application
//!   installs the recorder/exporter

pub mod logging;
pub mod metrics;
