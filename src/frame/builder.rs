use crate::color::mapper::{color_count, colors_from_bytes};
use crate::foundation::core::{FrameSize, Rgb8};
use crate::foundation::error::{BytereelError, BytereelResult};
use crate::frame::buffer::{FrameRGB, RGB_CHANNELS};
use crate::frame::upscale::upscale_nearest;

/// Lay `colors` out on a `size` grid in row-major order.
///
/// `colors[idx]` lands at `(idx % width, idx / width)`; cells past the end of `colors` stay black.
pub fn build_frame(colors: &[Rgb8], size: FrameSize) -> BytereelResult<FrameRGB> {
    if size.is_empty() {
        return Err(BytereelError::validation("frame width/height must be non-zero"));
    }
    if colors.len() > size.pixel_count() {
        return Err(BytereelError::validation(format!(
            "{} colors do not fit a {size} frame",
            colors.len()
        )));
    }

    let mut frame = FrameRGB::black(size);
    for (px, c) in frame.data.chunks_exact_mut(RGB_CHANNELS).zip(colors) {
        px.copy_from_slice(&c.to_array());
    }
    Ok(frame)
}

/// Number of frames needed for `colors` color units: `ceil(colors / (width * height))`.
pub fn frame_count(colors: usize, size: FrameSize) -> usize {
    match size.pixel_count() {
        0 => 0,
        cap => colors.div_ceil(cap),
    }
}

/// Number of frames a file of `byte_len` bytes contributes.
pub fn frame_count_for_len(byte_len: u64, size: FrameSize) -> u64 {
    let colors = color_count(usize::try_from(byte_len).unwrap_or(usize::MAX)) as u64;
    match size.pixel_count() as u64 {
        0 => 0,
        cap => colors.div_ceil(cap),
    }
}

/// Working grid size plus output resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameLayout {
    /// Native grid the colors are placed on.
    pub frame_size: FrameSize,
    /// Resolution of the emitted frames.
    pub upscale_size: FrameSize,
}

impl FrameLayout {
    /// Validate both sizes.
    pub fn new(frame_size: FrameSize, upscale_size: FrameSize) -> BytereelResult<Self> {
        if frame_size.is_empty() {
            return Err(BytereelError::validation("frame_size width/height must be non-zero"));
        }
        if upscale_size.is_empty() {
            return Err(BytereelError::validation("upscale_size width/height must be non-zero"));
        }
        Ok(Self {
            frame_size,
            upscale_size,
        })
    }

    /// Split `colors` into grid-sized chunks and emit one upscaled frame per chunk, in order.
    pub fn frames_for_colors(&self, colors: &[Rgb8]) -> BytereelResult<Vec<FrameRGB>> {
        let cap = self.frame_size.pixel_count();
        let mut out = Vec::with_capacity(frame_count(colors.len(), self.frame_size));
        for chunk in colors.chunks(cap) {
            let frame = build_frame(chunk, self.frame_size)?;
            out.push(upscale_nearest(&frame, self.upscale_size)?);
        }
        Ok(out)
    }

    /// Map `bytes` to colors and lay them out; see [`FrameLayout::frames_for_colors`].
    pub fn frames_for_bytes(&self, bytes: &[u8]) -> BytereelResult<Vec<FrameRGB>> {
        self.frames_for_colors(&colors_from_bytes(bytes))
    }

    /// Frames a file of `byte_len` bytes contributes under this layout.
    pub fn frame_count_for_len(&self, byte_len: u64) -> u64 {
        frame_count_for_len(byte_len, self.frame_size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/builder.rs"]
mod tests;
