use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "racetrack", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a racetrack image into a track file for the simulator.
    Discretize(DiscretizeArgs),
    /// Render a recorded episode over a track, one image per position.
    RenderEpisode(RenderEpisodeArgs),
    /// Print a JSON summary of a track file.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct DiscretizeArgs {
    /// The path to the image.
    #[arg(long, default_value = "./racetrack.png")]
    path: PathBuf,

    /// Path to the debug render.
    #[arg(long, default_value = "debug.png")]
    debug: PathBuf,

    /// Skip writing the debug render.
    #[arg(long)]
    no_debug: bool,

    /// Path to the track file.
    #[arg(long, default_value = "racetrack.values")]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderEpisodeArgs {
    /// Path to the track file.
    #[arg(long, default_value = "racetrack.values")]
    track: PathBuf,

    /// Path to the episode file.
    #[arg(long, default_value = "episode.values")]
    episode: PathBuf,

    /// Directory for the rendered frames.
    #[arg(long, alias = "output_dir", default_value = "racetrack-frames")]
    output_dir: PathBuf,

    /// Show only the current position in each frame instead of the accumulated trail.
    #[arg(long)]
    single_marker: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Path to the track file.
    #[arg(long, default_value = "racetrack.values")]
    track: PathBuf,
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
        Command::Discretize(args) => cmd_discretize(args),
        Command::RenderEpisode(args) => cmd_render_episode(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn cmd_discretize(args: DiscretizeArgs) -> anyhow::Result<()> {
    let opts = racetrack::DiscretizeOpts {
        image: args.path,
        debug: (!args.no_debug).then_some(args.debug),
        out: args.out,
        layout: racetrack::TrackLayout::STANDARD,
    };
    racetrack::discretize_track_file(&opts)
        .with_context(|| format!("discretize '{}'", opts.image.display()))?;

    eprintln!("wrote {}", opts.out.display());
    Ok(())
}

fn cmd_render_episode(args: RenderEpisodeArgs) -> anyhow::Result<()> {
    let overlay = if args.single_marker {
        racetrack::OverlayMode::SingleMarker
    } else {
        racetrack::OverlayMode::Cumulative
    };
    let opts = racetrack::RenderEpisodeOpts {
        track: args.track,
        episode: args.episode,
        output_dir: args.output_dir,
        render: racetrack::RenderOpts {
            overlay,
            ..racetrack::RenderOpts::default()
        },
    };
    let report = racetrack::render_episode_files(&opts)
        .with_context(|| format!("render episode '{}'", opts.episode.display()))?;

    eprintln!(
        "wrote {} frames to {}",
        report.frames.len(),
        opts.output_dir.display()
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let grid = racetrack::load_track(&args.track)?;
    let summary = racetrack::summarize_track(&grid);
    let out = serde_json::to_string_pretty(&summary).context("serialize track summary")?;
    println!("{out}");
    Ok(())
}
