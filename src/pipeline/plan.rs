use crate::batch::accumulator::{flush_due, segment_number};
use crate::foundation::error::{BytereelError, BytereelResult};
use crate::naming::segment_path;
use crate::pipeline::run::Pipeline;
use std::path::{Path, PathBuf};

/// One input file in a [`RunPlan`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PlannedFile {
    /// Input path.
    pub path: PathBuf,
    /// Size on disk.
    pub bytes: u64,
    /// Frames the file will contribute.
    pub frames: u64,
}

/// One segment in a [`RunPlan`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlannedSegment {
    /// 1-based segment number.
    pub number: u32,
    /// Output path.
    pub out_path: PathBuf,
    /// Files in this segment, in processing order.
    pub files: Vec<PlannedFile>,
    /// Total frames in this segment.
    pub frames: u64,
    /// Playback length at the configured frame rate.
    pub duration_secs: f64,
}

/// Flush schedule of a run, computed from file sizes without reading contents.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RunPlan {
    /// Segments in output order.
    pub segments: Vec<PlannedSegment>,
    /// Frames across all segments.
    pub frames_total: u64,
    /// Largest number of frames held in memory at once.
    pub peak_batch_frames: u64,
    /// Memory bound a full batch of the largest input file would reach.
    pub max_batch_frames: u64,
}

impl Pipeline {
    /// Compute which files land in which segment and how many frames each contributes.
    pub fn plan(&self, paths: &[PathBuf], output_base: &Path) -> BytereelResult<RunPlan> {
        let batch_size = self.config().batch_size;
        let fps = self.config().fps;
        let mut plan = RunPlan {
            segments: Vec::new(),
            frames_total: 0,
            peak_batch_frames: 0,
            max_batch_frames: 0,
        };
        let mut largest_file = 0;
        let mut pending = Vec::new();

        for (i, path) in paths.iter().enumerate() {
            let bytes = std::fs::metadata(path)
                .map_err(|e| BytereelError::read(path, e))?
                .len();
            largest_file = largest_file.max(bytes);
            pending.push(PlannedFile {
                path: path.clone(),
                bytes,
                frames: self.layout().frame_count_for_len(bytes),
            });

            if flush_due(i, batch_size, paths.len()) {
                let number = segment_number(i, batch_size);
                let files = std::mem::take(&mut pending);
                let frames = files.iter().map(|f| f.frames).sum::<u64>();
                plan.frames_total += frames;
                plan.peak_batch_frames = plan.peak_batch_frames.max(frames);
                plan.segments.push(PlannedSegment {
                    number,
                    out_path: segment_path(output_base, number),
                    files,
                    frames,
                    duration_secs: fps.frames_to_secs(frames),
                });
            }
        }
        plan.max_batch_frames = self.config().max_batch_frames(largest_file);
        Ok(plan)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/plan.rs"]
mod tests;
