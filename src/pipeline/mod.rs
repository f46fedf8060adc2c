//! The run driver: discovery, per-file frame building, batching and segment flushes.

/// Dry-run flush schedule.
pub mod plan;
/// Sequential pipeline execution.
pub mod run;
