//! Collects upscaled frames across input files and decides when a segment is due.
//!
//! The accumulator is the only place where frames outlive the file that produced them, so it is
//! also the only memory bound in the pipeline: a flush hands the frames out by value and leaves
//! an empty, unallocated buffer behind.

use crate::foundation::error::{BytereelError, BytereelResult};
use crate::frame::buffer::FrameRGB;

/// Return `true` when a segment must be written after finishing file `file_index` (0-based).
///
/// Fires when `(file_index + 1)` is a multiple of `batch_size` and on the last file. `batch_size`
/// of zero never fires on its own; callers validate it up front.
pub fn flush_due(file_index: usize, batch_size: usize, total_files: usize) -> bool {
    let at_threshold = batch_size != 0 && (file_index + 1).is_multiple_of(batch_size);
    let at_end = total_files != 0 && file_index == total_files - 1;
    at_threshold || at_end
}

/// 1-based segment number that file `file_index` belongs to.
pub fn segment_number(file_index: usize, batch_size: usize) -> u32 {
    (file_index / batch_size.max(1)) as u32 + 1
}

/// Frames released by a flush, ready for the encoder.
#[derive(Debug)]
pub struct PendingSegment {
    /// 1-based segment number.
    pub number: u32,
    /// Index of the first file that contributed to this segment.
    pub first_file: usize,
    /// Index of the last file that contributed to this segment.
    pub last_file: usize,
    /// Frames in file order, then frame order within each file.
    pub frames: Vec<FrameRGB>,
}

/// Owns the in-flight frame batch for one pipeline run.
#[derive(Debug)]
pub struct BatchAccumulator {
    batch_size: usize,
    total_files: usize,
    frames: Vec<FrameRGB>,
    batch_start: usize,
}

impl BatchAccumulator {
    /// Create an accumulator for a run over `total_files` files.
    pub fn new(batch_size: usize, total_files: usize) -> BytereelResult<Self> {
        if batch_size == 0 {
            return Err(BytereelError::validation("batch_size must be >= 1"));
        }
        Ok(Self {
            batch_size,
            total_files,
            frames: Vec::new(),
            batch_start: 0,
        })
    }

    /// Files per segment.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Frames currently held.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Return `true` when no frames are held.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Allocated frame slots; zero right after a flush.
    pub fn capacity(&self) -> usize {
        self.frames.capacity()
    }

    /// Append the frames produced by the current file.
    pub fn push_frames(&mut self, frames: impl IntoIterator<Item = FrameRGB>) {
        self.frames.extend(frames);
    }

    /// Mark file `file_index` as finished and release the batch if a flush is due.
    pub fn finish_file(&mut self, file_index: usize) -> Option<PendingSegment> {
        if !flush_due(file_index, self.batch_size, self.total_files) {
            return None;
        }
        let segment = PendingSegment {
            number: segment_number(file_index, self.batch_size),
            first_file: self.batch_start,
            last_file: file_index,
            frames: std::mem::take(&mut self.frames),
        };
        self.batch_start = file_index + 1;
        Some(segment)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/accumulator.rs"]
mod tests;
