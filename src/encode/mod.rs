//! Encoding sinks.
//!
//! Sinks consume frames in order and turn each flushed batch into one video segment.

/// `ffmpeg`-based sink (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
/// Batch-to-segment entry point.
pub mod segment;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
