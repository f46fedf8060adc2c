use crate::foundation::core::{Fps, FrameSize};
use crate::foundation::error::{BytereelError, BytereelResult};
use crate::frame::builder::FrameLayout;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// What to do when an input file cannot be read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop the run; frames not yet flushed are discarded.
    #[default]
    Abort,
    /// Log the failure and continue with the next file.
    Skip,
}

/// Options recognized by [`crate::Pipeline`].
///
/// Every field is optional in JSON; missing fields take the defaults below.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Grid the colors are placed on. Default 80x80.
    pub frame_size: FrameSize,
    /// Resolution of the encoded frames. Default 160x160.
    pub upscale_size: FrameSize,
    /// Output frame rate. Default 30/1.
    pub fps: Fps,
    /// Input files per video segment. Default 10.
    pub batch_size: usize,
    /// Read failure handling. Default abort.
    pub failure_policy: FailurePolicy,
    /// Sort discovered paths before processing. Default on.
    pub sort_paths: bool,
    /// Replace existing segment files. Default on.
    pub overwrite: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            frame_size: FrameSize::new(80, 80),
            upscale_size: FrameSize::new(160, 160),
            fps: Fps::default(),
            batch_size: 10,
            failure_policy: FailurePolicy::Abort,
            sort_paths: true,
            overwrite: true,
        }
    }
}

impl PipelineConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> BytereelResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| BytereelError::validation(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BytereelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| BytereelError::read(path, e))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> BytereelResult<()> {
        self.layout()?;
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(BytereelError::validation("fps must be non-zero"));
        }
        if self.batch_size == 0 {
            return Err(BytereelError::validation("batch_size must be >= 1"));
        }
        Ok(())
    }

    /// Frame geometry derived from this config.
    pub fn layout(&self) -> BytereelResult<FrameLayout> {
        FrameLayout::new(self.frame_size, self.upscale_size)
    }

    /// Upper bound on frames held in memory for files of at most `max_file_len` bytes.
    pub fn max_batch_frames(&self, max_file_len: u64) -> u64 {
        crate::frame::builder::frame_count_for_len(max_file_len, self.frame_size)
            .saturating_mul(self.batch_size as u64)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
