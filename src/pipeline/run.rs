use crate::batch::accumulator::{BatchAccumulator, PendingSegment};
use crate::config::{FailurePolicy, PipelineConfig};
use crate::discover::discover_files;
use crate::encode::segment::{SegmentReport, encode_segment};
use crate::encode::sink::FrameSink;
use crate::foundation::error::{BytereelError, BytereelResult};
use crate::frame::buffer::FrameRGB;
use crate::frame::builder::FrameLayout;
use crate::ingest::reader::read_bytes;
use crate::naming::segment_path;
use std::path::{Path, PathBuf};

/// Where a run currently is.
///
/// `Done` and `Aborted` are terminal; there is no retry from `Aborted`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Nothing started yet.
    Idle,
    /// Expanding the input pattern.
    Discovering,
    /// Reading and framing file `i` (0-based).
    ProcessingFile(usize),
    /// Writing segment `n` (1-based).
    Encoding(u32),
    /// All files processed and all segments written.
    Done,
    /// Stopped by an unrecovered read or encode failure.
    Aborted,
}

/// Counters and artifacts of a completed run.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RunSummary {
    /// Files handed to the run.
    pub files_total: usize,
    /// Files read and framed successfully.
    pub files_processed: usize,
    /// Files skipped under [`FailurePolicy::Skip`].
    pub files_skipped: Vec<PathBuf>,
    /// Frames produced across all files.
    pub frames_total: u64,
    /// Segments written, in order.
    pub segments: Vec<SegmentReport>,
}

/// Result of [`Pipeline::run_pattern`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The pattern matched no files; nothing was written.
    NoMatch {
        /// Pattern that was expanded.
        pattern: String,
    },
    /// The run went through all matched files.
    Completed(RunSummary),
}

/// Converts input files into video segments.
///
/// Strictly sequential: files are processed one at a time in the given order, and every frame a
/// file produces is appended to the current batch before the next file is read.
#[derive(Clone, Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    layout: FrameLayout,
}

impl Pipeline {
    /// Validate `config` and build a pipeline.
    pub fn new(config: PipelineConfig) -> BytereelResult<Self> {
        config.validate()?;
        let layout = config.layout()?;
        Ok(Self { config, layout })
    }

    /// Configuration in effect.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Frame geometry in effect.
    pub fn layout(&self) -> FrameLayout {
        self.layout
    }

    /// Read `path` and build its upscaled frames.
    pub fn frames_for_file(&self, path: &Path) -> BytereelResult<Vec<FrameRGB>> {
        let stream = read_bytes(path)?;
        self.layout.frames_for_bytes(stream.as_bytes())
    }

    /// Discover files matching `pattern`, then [`Pipeline::run`] over them.
    pub fn run_pattern(
        &self,
        pattern: &str,
        output_base: &Path,
        sink: &mut dyn FrameSink,
    ) -> BytereelResult<RunOutcome> {
        tracing::debug!(state = ?RunState::Discovering, pattern, "run state");
        let paths = discover_files(pattern, self.config.sort_paths)?;
        if paths.is_empty() {
            tracing::info!(pattern, "no files found matching the pattern");
            return Ok(RunOutcome::NoMatch {
                pattern: pattern.to_string(),
            });
        }
        tracing::info!(files = paths.len(), "found files, creating video");
        self.run(&paths, output_base, sink).map(RunOutcome::Completed)
    }

    /// Process `paths` in order, writing one segment per batch to `sink`.
    ///
    /// Segment `n` goes to [`segment_path`]`(output_base, n)`. An empty `paths` writes nothing.
    pub fn run(
        &self,
        paths: &[PathBuf],
        output_base: &Path,
        sink: &mut dyn FrameSink,
    ) -> BytereelResult<RunSummary> {
        let mut run = Run {
            pipeline: self,
            sink,
            output_base,
            acc: BatchAccumulator::new(self.config.batch_size, paths.len())?,
            summary: RunSummary {
                files_total: paths.len(),
                ..RunSummary::default()
            },
            state: RunState::Idle,
        };

        let result = run.process_all(paths);
        match &result {
            Ok(()) => run.enter(RunState::Done),
            Err(e) => {
                run.enter(RunState::Aborted);
                tracing::debug!(buffered_frames = run.acc.len(), "run aborted: {e}");
            }
        }
        result.map(|()| run.summary)
    }
}

struct Run<'a> {
    pipeline: &'a Pipeline,
    sink: &'a mut dyn FrameSink,
    output_base: &'a Path,
    acc: BatchAccumulator,
    summary: RunSummary,
    state: RunState,
}

impl Run<'_> {
    fn enter(&mut self, next: RunState) {
        tracing::debug!(from = ?self.state, to = ?next, "run state");
        self.state = next;
    }

    fn process_all(&mut self, paths: &[PathBuf]) -> BytereelResult<()> {
        for (i, path) in paths.iter().enumerate() {
            self.enter(RunState::ProcessingFile(i));
            self.process_file(path)?;
            if let Some(segment) = self.acc.finish_file(i) {
                self.flush(segment)?;
            }
        }
        Ok(())
    }

    fn process_file(&mut self, path: &Path) -> BytereelResult<()> {
        match self.pipeline.frames_for_file(path) {
            Ok(frames) => {
                tracing::debug!(path = %path.display(), frames = frames.len(), "framed file");
                self.summary.files_processed += 1;
                self.summary.frames_total += frames.len() as u64;
                self.acc.push_frames(frames);
                Ok(())
            }
            Err(e)
                if e.is_read_failure()
                    && self.pipeline.config.failure_policy == FailurePolicy::Skip =>
            {
                tracing::warn!(path = %path.display(), "skipping unreadable file: {e}");
                self.summary.files_skipped.push(path.to_path_buf());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn flush(&mut self, segment: PendingSegment) -> BytereelResult<()> {
        self.enter(RunState::Encoding(segment.number));
        let out_path = segment_path(self.output_base, segment.number);

        if segment.frames.is_empty()
            && self.pipeline.config.failure_policy == FailurePolicy::Skip
        {
            tracing::warn!(
                segment = segment.number,
                first_file = segment.first_file,
                last_file = segment.last_file,
                "no frames in batch, segment not written"
            );
            return Ok(());
        }

        tracing::info!(
            segment = segment.number,
            files = segment.last_file + 1 - segment.first_file,
            frames = segment.frames.len(),
            "flushing batch"
        );
        let report = encode_segment(
            &mut *self.sink,
            &segment.frames,
            &out_path,
            self.pipeline.config.fps,
        )
        .map_err(|e| match e {
            BytereelError::Encoding(msg) => {
                BytereelError::encoding(format!("segment {}: {msg}", segment.number))
            }
            other => other,
        })?;
        self.summary.segments.push(report);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/run.rs"]
mod tests;
