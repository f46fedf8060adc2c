use std::path::{Path, PathBuf};

use anyhow::Context as _;
use bytereel::{
    FailurePolicy, FfmpegSink, FfmpegSinkOpts, Fps, FrameSize, Pipeline, PipelineConfig,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "bytereel",
    version,
    about = "Turn binary files into color-mapped video segments (requires `ffmpeg` on PATH)"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert every file matching a pattern into MP4 segments.
    Render(RenderArgs),
    /// Write one frame of one file as a PNG.
    Frame(FrameArgs),
    /// Print the segment schedule for a pattern as JSON without encoding anything.
    Plan(PlanArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Color grid per frame, WIDTHxHEIGHT.
    #[arg(long)]
    frame_size: Option<FrameSize>,

    /// Encoded resolution, WIDTHxHEIGHT.
    #[arg(long)]
    upscale: Option<FrameSize>,

    /// Frame rate, e.g. `30` or `30000/1001`.
    #[arg(long)]
    fps: Option<Fps>,

    /// Input files per video segment.
    #[arg(long)]
    batch_size: Option<usize>,

    /// What to do with unreadable input files.
    #[arg(long, value_enum)]
    on_error: Option<OnError>,

    /// Keep the filesystem's discovery order instead of sorting paths.
    #[arg(long)]
    no_sort: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OnError {
    Abort,
    Skip,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Input file pattern, e.g. `data/*.bin`.
    #[arg(long)]
    pattern: String,

    /// Output video base name; segments are written as `<stem>_partN.<ext>`.
    #[arg(long)]
    out: PathBuf,

    /// Fail instead of replacing existing segment files.
    #[arg(long)]
    no_overwrite: bool,

    /// x264 constant rate factor (0 is lossless).
    #[arg(long)]
    crf: Option<u8>,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Input file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index within the file (0-based).
    #[arg(long, default_value_t = 0)]
    frame: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Write the color grid without upscaling.
    #[arg(long)]
    native: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// Input file pattern, e.g. `data/*.bin`.
    #[arg(long)]
    pattern: String,

    /// Output video base name.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn load_config(args: &ConfigArgs) -> anyhow::Result<PipelineConfig> {
    let mut cfg = match &args.config {
        Some(path) => PipelineConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => PipelineConfig::default(),
    };
    if let Some(v) = args.frame_size {
        cfg.frame_size = v;
    }
    if let Some(v) = args.upscale {
        cfg.upscale_size = v;
    }
    if let Some(v) = args.fps {
        cfg.fps = v;
    }
    if let Some(v) = args.batch_size {
        cfg.batch_size = v;
    }
    if let Some(v) = args.on_error {
        cfg.failure_policy = match v {
            OnError::Abort => FailurePolicy::Abort,
            OnError::Skip => FailurePolicy::Skip,
        };
    }
    if args.no_sort {
        cfg.sort_paths = false;
    }
    cfg.validate().context("invalid configuration")?;
    Ok(cfg)
}

fn discover(pattern: &str, cfg: &PipelineConfig) -> anyhow::Result<Option<Vec<PathBuf>>> {
    anyhow::ensure!(!pattern.trim().is_empty(), "--pattern must not be empty");
    let paths = bytereel::discover_files(pattern, cfg.sort_paths)?;
    if paths.is_empty() {
        println!("No files found matching the pattern.");
        return Ok(None);
    }
    Ok(Some(paths))
}

fn ensure_out(out: &Path) -> anyhow::Result<()> {
    anyhow::ensure!(!out.as_os_str().is_empty(), "--out must not be empty");
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    ensure_out(&args.out)?;
    let mut cfg = load_config(&args.config)?;
    if args.no_overwrite {
        cfg.overwrite = false;
    }

    let Some(paths) = discover(&args.pattern, &cfg)? else {
        return Ok(());
    };
    anyhow::ensure!(
        bytereel::is_ffmpeg_on_path(),
        "ffmpeg is required for MP4 encoding, but was not found on PATH"
    );
    println!("Found {} files. Creating video...", paths.len());

    let mut sink = FfmpegSink::new(FfmpegSinkOpts {
        overwrite: cfg.overwrite,
        crf: args.crf,
        ..FfmpegSinkOpts::default()
    });
    let pipeline = Pipeline::new(cfg)?;
    let summary = pipeline.run(&paths, &args.out, &mut sink)?;

    for seg in &summary.segments {
        eprintln!("wrote {} ({} frames)", seg.out_path.display(), seg.frames);
    }
    for skipped in &summary.files_skipped {
        eprintln!("  skipped: {}", skipped.display());
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let pipeline = Pipeline::new(cfg)?;
    let layout = pipeline.layout();

    let stream = bytereel::read_bytes(&args.in_path)?;
    let colors = bytereel::colors_from_bytes(stream.as_bytes());
    let chunk = colors
        .chunks(layout.frame_size.pixel_count())
        .nth(args.frame)
        .with_context(|| {
            format!(
                "'{}' has {} frame(s); frame {} is out of range",
                args.in_path.display(),
                bytereel::frame_count(colors.len(), layout.frame_size),
                args.frame
            )
        })?;

    let mut frame = bytereel::build_frame(chunk, layout.frame_size)?;
    if !args.native {
        frame = bytereel::upscale_nearest(&frame, layout.upscale_size)?;
    }

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    frame.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    ensure_out(&args.out)?;
    let cfg = load_config(&args.config)?;
    let Some(paths) = discover(&args.pattern, &cfg)? else {
        return Ok(());
    };
    let plan = Pipeline::new(cfg)?.plan(&paths, &args.out)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&plan).context("serialize plan")?
    );
    Ok(())
}
