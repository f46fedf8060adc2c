use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::Fps;
use crate::foundation::error::{BytereelError, BytereelResult};
use crate::frame::buffer::FrameRGB;
use std::path::{Path, PathBuf};

/// What one call to [`encode_segment`] wrote.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SegmentReport {
    /// Destination path.
    pub out_path: PathBuf,
    /// Frames written.
    pub frames: usize,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

/// Encode `frames` as one complete segment at `out_path`.
///
/// Frame `i` is shown for `1/fps` seconds, in slice order. The slice must be non-empty and every
/// frame must share the first frame's dimensions; otherwise this fails with
/// [`BytereelError::Encoding`] before the sink is touched.
#[tracing::instrument(skip(sink, frames), fields(frames = frames.len(), out = %out_path.display()))]
pub fn encode_segment(
    sink: &mut dyn FrameSink,
    frames: &[FrameRGB],
    out_path: &Path,
    fps: Fps,
) -> BytereelResult<SegmentReport> {
    let first = frames
        .first()
        .ok_or_else(|| BytereelError::encoding("cannot encode an empty frame set"))?;
    if let Some((i, odd)) = frames
        .iter()
        .enumerate()
        .find(|(_, f)| f.width != first.width || f.height != first.height)
    {
        return Err(BytereelError::encoding(format!(
            "frame {i} is {}x{}, expected {}x{}",
            odd.width, odd.height, first.width, first.height
        )));
    }

    sink.begin(SinkConfig {
        width: first.width,
        height: first.height,
        fps,
        out_path: out_path.to_path_buf(),
    })?;
    for frame in frames {
        sink.push_frame(frame)?;
    }
    sink.end()?;

    tracing::info!(
        out = %out_path.display(),
        frames = frames.len(),
        secs = fps.frames_to_secs(frames.len() as u64),
        "wrote segment"
    );
    Ok(SegmentReport {
        out_path: out_path.to_path_buf(),
        frames: frames.len(),
        width: first.width,
        height: first.height,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/segment.rs"]
mod tests;
