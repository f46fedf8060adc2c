use crate::foundation::core::FrameSize;
use crate::foundation::error::{BytereelError, BytereelResult};
use crate::frame::buffer::{FrameRGB, RGB_CHANNELS};

/// Resize `src` to `out` by nearest-neighbor replication.
///
/// Output pixel `x` samples source column `floor((x + 0.5) * src_w / out_w)` (pixel-center
/// mapping), likewise for rows. Every output pixel is a copy of exactly one source pixel.
pub fn upscale_nearest(src: &FrameRGB, out: FrameSize) -> BytereelResult<FrameRGB> {
    if out.is_empty() {
        return Err(BytereelError::validation("upscale width/height must be non-zero"));
    }
    let src_size = src.size();
    if src_size.is_empty() || src.data.len() != src_size.pixel_count() * RGB_CHANNELS {
        return Err(BytereelError::validation("source frame data does not match its dimensions"));
    }
    if src_size == out {
        return Ok(src.clone());
    }

    let xs = nearest_indices(src.width, out.width);
    let src_stride = src.width as usize * RGB_CHANNELS;
    let dst_stride = out.width as usize * RGB_CHANNELS;

    let mut dst = FrameRGB::black(out);
    for (y, row) in dst.data.chunks_exact_mut(dst_stride).enumerate() {
        let sy = nearest_index(y, src.height, out.height);
        let src_row = &src.data[sy * src_stride..(sy + 1) * src_stride];
        for (px, &sx) in row.chunks_exact_mut(RGB_CHANNELS).zip(&xs) {
            let o = sx * RGB_CHANNELS;
            px.copy_from_slice(&src_row[o..o + RGB_CHANNELS]);
        }
    }
    Ok(dst)
}

fn nearest_indices(src_len: u32, out_len: u32) -> Vec<usize> {
    (0..out_len as usize)
        .map(|i| nearest_index(i, src_len, out_len))
        .collect()
}

fn nearest_index(i: usize, src_len: u32, out_len: u32) -> usize {
    let src_len = src_len as usize;
    let out_len = out_len as usize;
    (((2 * i + 1) * src_len) / (2 * out_len)).min(src_len - 1)
}

#[cfg(test)]
#[path = "../../tests/unit/frame/upscale.rs"]
mod tests;
