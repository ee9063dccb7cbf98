use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use explainer::{
    Composition, FrameIndex, FrameRange, RenderThreading, Theme, Timeline, builtin_registry,
    fingerprint_frame,
};

#[derive(Parser, Debug)]
#[command(name = "explainer", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List built-in compositions.
    List,
    /// Print section and scene placement.
    Timeline(TimelineArgs),
    /// Render one frame's display list as JSON.
    Frame(FrameArgs),
    /// Print a fingerprint per frame.
    Fingerprint(FingerprintArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct SourceArgs {
    /// Built-in composition id.
    #[arg(long)]
    preset: Option<String>,

    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct TimelineArgs {
    #[command(flatten)]
    source: SourceArgs,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Frame index (0-based); frames past the end clamp to the last one.
    #[arg(long)]
    frame: u64,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Theme JSON; the default dark theme when omitted.
    #[arg(long)]
    theme: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FingerprintArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// End frame (exclusive); the composition length when omitted.
    #[arg(long)]
    end: Option<u64>,

    /// Theme JSON; the default dark theme when omitted.
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Render frames on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Thread pool size (requires --parallel).
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,

    /// Frames per parallel batch.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Fingerprint(args) => cmd_fingerprint(args),
    }
}

fn load_composition(source: &SourceArgs) -> anyhow::Result<Composition> {
    if let Some(path) = &source.in_path {
        return Composition::from_path(path)
            .with_context(|| format!("load composition '{}'", path.display()));
    }
    let id = source.preset.as_deref().unwrap_or_default();
    let registry = builtin_registry().context("build preset registry")?;
    registry
        .get(id)
        .cloned()
        .with_context(|| format!("unknown preset '{id}' (try `explainer list`)"))
}

fn load_theme(path: Option<&Path>) -> anyhow::Result<Theme> {
    match path {
        Some(p) => Theme::from_path(p).with_context(|| format!("load theme '{}'", p.display())),
        None => Ok(Theme::default()),
    }
}

fn cmd_list() -> anyhow::Result<()> {
    let registry = builtin_registry().context("build preset registry")?;
    for id in registry.ids() {
        let info = registry.info(id)?;
        println!(
            "{}\t{} frames\t{}/{} fps\t{}x{}",
            info.id, info.total_frames, info.fps.num, info.fps.den, info.width, info.height
        );
    }
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let comp = load_composition(&args.source)?;
    let timeline = Timeline::new(&comp)?;
    let fps = timeline.fps();

    println!(
        "{}: {} frames ({:.2}s) at {}/{} fps",
        comp.id,
        timeline.total_frames(),
        fps.frames_to_secs(timeline.total_frames()),
        fps.num,
        fps.den
    );
    for (i, section) in comp.sections.iter().enumerate() {
        let (Some(span), Some(layout)) =
            (timeline.section_layout().scene_range(i), timeline.layout(i))
        else {
            continue;
        };
        println!(
            "section {} '{}': frames {}..{} ({} frames)",
            i + 1,
            section.title,
            span.start,
            span.end,
            layout.total
        );
        for (j, scene) in section.sequence.scenes.iter().enumerate() {
            let Some(range) = layout.scene_range(j) else {
                continue;
            };
            println!(
                "  {:>2} {:<16} {}..{}",
                j,
                scene.content.name(),
                range.start,
                range.end
            );
        }
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = load_composition(&args.source)?;
    let theme = load_theme(args.theme.as_deref())?;
    let timeline = Timeline::new(&comp)?;

    let frame = timeline.render_frame(&theme, FrameIndex(args.frame));
    let json = serde_json::to_string_pretty(&frame).context("serialize frame JSON")?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_fingerprint(args: FingerprintArgs) -> anyhow::Result<()> {
    let comp = load_composition(&args.source)?;
    let theme = load_theme(args.theme.as_deref())?;
    let timeline = Timeline::new(&comp)?;

    let end = args.end.unwrap_or(timeline.total_frames());
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;
    let threading = RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };

    let frames = timeline.render_range(&theme, range, &threading)?;
    for (offset, frame) in frames.iter().enumerate() {
        println!("{}\t{}", args.start + offset as u64, fingerprint_frame(frame));
    }
    Ok(())
}
