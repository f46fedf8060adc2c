use crate::foundation::core::Fps;
use crate::foundation::error::{BytereelError, BytereelResult};
use crate::frame::buffer::FrameRGB;
use std::path::PathBuf;

/// Configuration provided to a [`FrameSink`] at the start of a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
    /// Destination of this segment.
    pub out_path: PathBuf,
}

/// Sink contract for consuming frames of one segment at a time.
///
/// A sink may be reused: every segment is one `begin`, any number of `push_frame` calls in
/// display order, then one `end`.
pub trait FrameSink {
    /// Called once before any frames of a segment are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> BytereelResult<()>;
    /// Push the next frame of the current segment.
    fn push_frame(&mut self, frame: &FrameRGB) -> BytereelResult<()>;
    /// Called once after the last frame of the segment.
    fn end(&mut self) -> BytereelResult<()>;
}

/// One segment captured by [`InMemorySink`].
#[derive(Debug, Clone)]
pub struct RecordedSegment {
    /// Configuration passed to `begin`.
    pub config: SinkConfig,
    /// Frames in push order.
    pub frames: Vec<FrameRGB>,
}

/// In-memory sink for tests and dry runs.
#[derive(Debug, Default)]
pub struct InMemorySink {
    open: Option<RecordedSegment>,
    segments: Vec<RecordedSegment>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the completed segments.
    pub fn segments(&self) -> &[RecordedSegment] {
        &self.segments
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> BytereelResult<()> {
        if self.open.is_some() {
            return Err(BytereelError::encoding("segment already in progress"));
        }
        self.open = Some(RecordedSegment {
            config: cfg,
            frames: Vec::new(),
        });
        Ok(())
    }

    fn push_frame(&mut self, frame: &FrameRGB) -> BytereelResult<()> {
        let seg = self
            .open
            .as_mut()
            .ok_or_else(|| BytereelError::encoding("in-memory sink not started"))?;
        seg.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> BytereelResult<()> {
        let seg = self
            .open
            .take()
            .ok_or_else(|| BytereelError::encoding("in-memory sink not started"))?;
        self.segments.push(seg);
        Ok(())
    }
}
