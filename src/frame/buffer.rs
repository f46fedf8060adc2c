use crate::foundation::core::{FrameSize, Rgb8};
use crate::foundation::error::{BytereelError, BytereelResult};
use std::path::Path;

/// Bytes per pixel in a [`FrameRGB`].
pub const RGB_CHANNELS: usize = 3;

/// A frame as opaque RGB8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGB {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGB8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGB {
    /// Allocate an all-black frame.
    pub fn black(size: FrameSize) -> Self {
        Self {
            width: size.width,
            height: size.height,
            data: vec![0u8; size.pixel_count() * RGB_CHANNELS],
        }
    }

    /// Frame dimensions.
    pub fn size(&self) -> FrameSize {
        FrameSize::new(self.width, self.height)
    }

    /// Color at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb8 {
        let i = self.offset(x, y);
        Rgb8::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Overwrite the color at `(x, y)`. Panics when out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, c: Rgb8) {
        let i = self.offset(x, y);
        self.data[i..i + RGB_CHANNELS].copy_from_slice(&c.to_array());
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb8> + '_ {
        self.data
            .chunks_exact(RGB_CHANNELS)
            .map(|p| Rgb8::new(p[0], p[1], p[2]))
    }

    /// Copy into an [`image::RgbImage`].
    pub fn to_image(&self) -> BytereelResult<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            BytereelError::validation("frame.data size mismatch with width*height*3")
        })
    }

    /// Write the frame as a PNG file.
    pub fn save_png(&self, path: &Path) -> BytereelResult<()> {
        use anyhow::Context as _;
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} frame",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * RGB_CHANNELS
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/buffer.rs"]
mod tests;
