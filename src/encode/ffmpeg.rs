use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::Fps;
use crate::foundation::error::{BytereelError, BytereelResult};
use crate::frame::buffer::{FrameRGB, RGB_CHANNELS};
use std::io::Read;
use std::path::Path;
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};

/// Options for [`FfmpegSink`] output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FfmpegSinkOpts {
    /// Overwrite output files that already exist.
    pub overwrite: bool,
    /// Video codec passed to `-c:v`.
    pub codec: String,
    /// Output pixel format passed to `-pix_fmt`.
    pub pix_fmt: String,
    /// Optional constant rate factor (`-crf`).
    pub crf: Option<u8>,
}

impl Default for FfmpegSinkOpts {
    fn default() -> Self {
        Self {
            overwrite: true,
            codec: "libx264".to_string(),
            pix_fmt: "yuv420p".to_string(),
            crf: None,
        }
    }
}

/// Sink that spawns the system `ffmpeg` once per segment and streams raw RGB frames to stdin.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,

    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,

    cfg: Option<SinkConfig>,
}

impl FfmpegSink {
    /// Create a new sink that streams into `ffmpeg`.
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            child: None,
            stdin: None,
            stderr_drain: None,
            cfg: None,
        }
    }

    fn command(&self, cfg: &SinkConfig) -> Command {
        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        if self.opts.overwrite {
            cmd.arg("-y");
        } else {
            cmd.arg("-n");
        }

        cmd.args([
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgb24",
            "-s",
            &format!("{}x{}", cfg.width, cfg.height),
        ]);
        push_input_fps(&mut cmd, cfg.fps);
        cmd.args(["-i", "pipe:0", "-an", "-c:v", &self.opts.codec]);
        if let Some(crf) = self.opts.crf {
            cmd.args(["-crf", &crf.to_string()]);
        }
        cmd.args(["-pix_fmt", &self.opts.pix_fmt, "-movflags", "+faststart"]);
        cmd.arg(&cfg.out_path);
        cmd
    }

    fn attach(&mut self, mut cmd: Command) -> BytereelResult<()> {
        let mut child = cmd.spawn().map_err(|e| {
            BytereelError::encoding(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| BytereelError::encoding("failed to open ffmpeg stdin (unexpected)"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| BytereelError::encoding("failed to open ffmpeg stderr (unexpected)"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut stderr_bytes = Vec::new();
            stderr.read_to_end(&mut stderr_bytes)?;
            Ok(stderr_bytes)
        });

        self.child = Some(child);
        self.stdin = Some(stdin);
        self.stderr_drain = Some(stderr_drain);
        Ok(())
    }

    /// Close stdin, wait for the child and collect what it wrote to stderr.
    fn reap(&mut self) -> BytereelResult<(ExitStatus, String)> {
        drop(self.stdin.take());
        self.cfg = None;
        let mut child = self
            .child
            .take()
            .ok_or_else(|| BytereelError::encoding("ffmpeg sink not started"))?;

        let status = child.wait().map_err(|e| {
            BytereelError::encoding(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;
        let stderr_bytes = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| BytereelError::encoding("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| BytereelError::encoding(format!("ffmpeg stderr read failed: {e}")))?,
            None => Vec::new(),
        };
        let stderr = String::from_utf8_lossy(&stderr_bytes).trim().to_string();
        Ok((status, stderr))
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> BytereelResult<()> {
        if self.child.is_some() {
            return Err(BytereelError::encoding("ffmpeg sink already has an open segment"));
        }
        if cfg.fps.num == 0 || cfg.fps.den == 0 {
            return Err(BytereelError::validation("fps must be non-zero"));
        }
        if cfg.width == 0 || cfg.height == 0 {
            return Err(BytereelError::validation("ffmpeg sink width/height must be non-zero"));
        }
        if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
            return Err(BytereelError::validation(
                "ffmpeg sink width/height must be even (required for yuv420p mp4 output)",
            ));
        }

        ensure_parent_dir(&cfg.out_path)?;
        if !self.opts.overwrite && cfg.out_path.exists() {
            return Err(BytereelError::validation(format!(
                "output file '{}' already exists",
                cfg.out_path.display()
            )));
        }

        if !is_ffmpeg_on_path() {
            return Err(BytereelError::encoding(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        let cmd = self.command(&cfg);
        self.attach(cmd)?;
        tracing::debug!(
            out = %cfg.out_path.display(),
            width = cfg.width,
            height = cfg.height,
            fps = %cfg.fps,
            "spawned ffmpeg"
        );

        self.cfg = Some(cfg);
        Ok(())
    }

    fn push_frame(&mut self, frame: &FrameRGB) -> BytereelResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| BytereelError::encoding("ffmpeg sink not started"))?;

        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(BytereelError::encoding(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        if frame.data.len() != (cfg.width * cfg.height) as usize * RGB_CHANNELS {
            return Err(BytereelError::encoding("frame.data size mismatch with width*height*3"));
        }

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(BytereelError::encoding("ffmpeg sink is already finalized"));
        };

        use std::io::Write as _;
        if let Err(e) = stdin.write_all(&frame.data) {
            // ffmpeg closed its input early; its stderr says why.
            let detail = match self.reap() {
                Ok((status, stderr)) => format!("ffmpeg exited with status {status}: {stderr}"),
                Err(reap_err) => reap_err.to_string(),
            };
            return Err(BytereelError::encoding(format!(
                "failed to write frame to ffmpeg stdin: {e} ({detail})"
            )));
        }
        Ok(())
    }

    fn end(&mut self) -> BytereelResult<()> {
        let (status, stderr) = self.reap()?;
        if !status.success() {
            return Err(BytereelError::encoding(format!(
                "ffmpeg exited with status {status}: {stderr}"
            )));
        }
        Ok(())
    }
}

impl Drop for FfmpegSink {
    fn drop(&mut self) {
        // An aborted segment leaves a child behind; close its input and reap it.
        drop(self.stdin.take());
        if let Some(mut child) = self.child.take() {
            let _ = child.wait();
        }
    }
}

fn push_input_fps(cmd: &mut Command, fps: Fps) {
    // For rawvideo input, `-r` before `-i` sets the input framerate.
    cmd.args(["-r", &format!("{}/{}", fps.num, fps.den)]);
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> BytereelResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
