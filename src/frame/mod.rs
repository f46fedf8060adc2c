//! Pixel grids: the packed frame buffer, grid layout and nearest-neighbor upscaling.

/// Packed RGB8 frame buffer.
pub mod buffer;
/// Color-to-grid layout.
pub mod builder;
/// Nearest-neighbor resizing.
pub mod upscale;
