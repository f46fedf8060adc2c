//! bytereel turns arbitrary binary files into video.
//!
//! Every three input bytes become one RGB pixel. Pixels are laid out row-major on a fixed grid,
//! the grid is upscaled with nearest-neighbor replication, and frames from a bounded number of
//! files are encoded together as one video segment:
//!
//! - Read a file into a [`ByteStream`]
//! - Map it to colors ([`colors_from_bytes`]) and frames ([`FrameLayout`])
//! - Collect frames across files in a [`BatchAccumulator`]
//! - Flush each batch through a [`FrameSink`] with [`encode_segment`]
//!
//! [`Pipeline`] drives all of the above for a list of files or a glob pattern.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Cross-file frame batching.
pub mod batch;
/// Byte-to-color mapping.
pub mod color;
/// Pipeline configuration.
pub mod config;
/// Glob-based input discovery.
pub mod discover;
/// Video encoding sinks.
pub mod encode;
/// Frame buffers, layout and upscaling.
pub mod frame;
/// Input file reading.
pub mod ingest;
/// Segment output naming.
pub mod naming;
/// The run driver.
pub mod pipeline;

pub use crate::foundation::core::{Fps, FrameSize, Rgb8};
pub use crate::foundation::error::{BytereelError, BytereelResult};

pub use crate::batch::accumulator::{BatchAccumulator, PendingSegment, flush_due, segment_number};
pub use crate::color::mapper::{
    color_count, colors_from_bytes, colors_from_hex, hex_encode, pad_hex,
};
pub use crate::config::{FailurePolicy, PipelineConfig};
pub use crate::discover::discover_files;
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::segment::{SegmentReport, encode_segment};
pub use crate::encode::sink::{FrameSink, InMemorySink, RecordedSegment, SinkConfig};
pub use crate::frame::buffer::FrameRGB;
pub use crate::frame::builder::{FrameLayout, build_frame, frame_count, frame_count_for_len};
pub use crate::frame::upscale::upscale_nearest;
pub use crate::ingest::reader::{ByteStream, read_bytes};
pub use crate::naming::segment_path;
pub use crate::pipeline::plan::{PlannedFile, PlannedSegment, RunPlan};
pub use crate::pipeline::run::{Pipeline, RunOutcome, RunState, RunSummary};
