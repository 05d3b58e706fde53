use std::{
    io::BufRead as _,
    path::{Path, PathBuf},
    sync::mpsc,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use linecircle::{
    CpuSurface, Event, FrameRGBA, ManualClock, Outcome, RenderSettings, SequenceController,
    StageConfig, ThreadClock, drive_to_rest, render_frame, ticks_per_sweep,
};

#[derive(Parser, Debug)]
#[command(name = "linecircle", version)]
struct Cli {
    /// Log sequencing decisions to stderr (repeat for per-tick detail).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply N tap cycles and write the resting frame as a PNG.
    Frame(FrameArgs),
    /// Apply N tap cycles and write one PNG per redraw request and per tick.
    Frames(FramesArgs),
    /// Run in real time: every line on stdin is a tap, `q` quits.
    Live(LiveArgs),
    /// Print the stock stage config as JSON.
    Config,
}

#[derive(Args, Debug)]
struct StageArgs {
    /// Stage config JSON; stock constants when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    stage: StageArgs,

    /// Number of tap-and-settle cycles before the frame is taken.
    #[arg(long, default_value_t = 0)]
    taps: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    stage: StageArgs,

    /// Number of tap-and-settle cycles.
    #[arg(long)]
    taps: u32,

    /// Directory receiving `frame_NNNNN.png`.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct LiveArgs {
    #[command(flatten)]
    stage: StageArgs,

    /// PNG rewritten on every redraw request.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Live(args) => cmd_live(args),
        Command::Config => {
            println!("{}", StageConfig::default().to_json_pretty()?);
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &StageArgs) -> anyhow::Result<StageConfig> {
    match &args.config {
        Some(path) => StageConfig::load(path)
            .with_context(|| format!("load stage config '{}'", path.display())),
        None => Ok(StageConfig::default()),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.stage)?;
    let settings = RenderSettings::from_config(&cfg);
    let mut ctrl = SequenceController::from_config(&cfg, ManualClock::new())?;
    let budget = ticks_per_sweep(cfg.step);

    for _ in 0..args.taps {
        ctrl.handle(Event::Tap)?;
        drive_to_rest(&mut ctrl, budget, |_, _| Ok(()))?;
    }

    let mut surface = CpuSurface::new(cfg.canvas)?;
    render_frame(&ctrl, &mut surface, &settings);
    write_png(&args.out, &surface.readback())?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.stage)?;
    let settings = RenderSettings::from_config(&cfg);
    let mut ctrl = SequenceController::from_config(&cfg, ManualClock::new())?;
    let budget = ticks_per_sweep(cfg.step);
    let mut surface = CpuSurface::new(cfg.canvas)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut index = 0u32;
    let mut emit = |ctrl: &SequenceController<ManualClock>| -> anyhow::Result<()> {
        render_frame(ctrl, &mut surface, &settings);
        let path = args.out_dir.join(format!("frame_{index:05}.png"));
        write_png(&path, &surface.readback())?;
        index += 1;
        Ok(())
    };

    emit(&ctrl)?;
    for _ in 0..args.taps {
        if ctrl.handle(Event::Tap)?.needs_redraw() {
            emit(&ctrl)?;
        }
        drive_to_rest(&mut ctrl, budget, |c, _| {
            emit(c).map_err(linecircle::LineCircleError::Other)
        })?;
    }

    eprintln!("wrote {} frames to {}", index, args.out_dir.display());
    Ok(())
}

fn cmd_live(args: LiveArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.stage)?;
    let settings = RenderSettings::from_config(&cfg);
    let (tx, rx) = mpsc::channel::<Option<Event>>();

    let clock = ThreadClock::new(tx.clone(), Some(Event::Tick));
    let mut ctrl = SequenceController::from_config(&cfg, clock)?;
    let mut surface = CpuSurface::new(cfg.canvas)?;

    std::thread::Builder::new()
        .name("linecircle-input".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                let msg = if line.trim() == "q" {
                    None
                } else {
                    Some(Event::Tap)
                };
                let quit = msg.is_none();
                if tx.send(msg).is_err() || quit {
                    return;
                }
            }
            let _ = tx.send(None);
        })
        .context("spawn input thread")?;

    render_frame(&ctrl, &mut surface, &settings);
    write_png(&args.out, &surface.readback())?;
    eprintln!("press Enter to tap, q to quit; frames go to {}", args.out.display());

    while let Ok(Some(event)) = rx.recv() {
        let outcome = ctrl.handle(event)?;
        if outcome.needs_redraw() {
            render_frame(&ctrl, &mut surface, &settings);
            write_png(&args.out, &surface.readback())?;
        }
        if let Outcome::Completed { cursor, exhausted } = outcome {
            eprintln!(
                "node settled; cursor {cursor}{}",
                if exhausted { " (direction flipped)" } else { "" }
            );
        }
    }

    Ok(())
}

fn write_png(path: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
