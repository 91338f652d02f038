use std::{
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fieldfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a lifecycle and print one JSON line of frame modifiers per tick.
    Simulate(SimulateArgs),
    /// Print an easing curve as `t value` lines.
    Ease(EaseArgs),
    /// Load and validate a lifecycle document.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input lifecycle JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of ticks to run.
    #[arg(long, default_value_t = 100)]
    ticks: u64,

    /// Call `trigger_transition` before the given tick. Repeatable.
    #[arg(long = "trigger", value_name = "TICK", value_parser = parse_tick)]
    triggers: Vec<u64>,

    /// Fire a named event before the given tick, as `NAME@TICK`. Repeatable.
    #[arg(long = "event", value_name = "NAME@TICK", value_parser = parse_event)]
    events: Vec<(String, u64)>,

    /// Fraction of a tick added to the sampling time, for render interpolation.
    #[arg(long, default_value_t = 0.0)]
    partial: f32,
}

#[derive(Parser, Debug)]
struct EaseArgs {
    /// Easing function name, e.g. `out_back`.
    #[arg(long)]
    name: String,

    /// Number of samples between 0 and 1 inclusive.
    #[arg(long, default_value_t = 11)]
    samples: u32,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input lifecycle JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(serde::Serialize)]
struct TickLine<'a> {
    tick: u64,
    #[serde(flatten)]
    frame: &'a fieldfx::FrameModifiers,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Ease(args) => cmd_ease(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn parse_event(raw: &str) -> Result<(String, u64), String> {
    let (name, tick) = raw
        .rsplit_once('@')
        .ok_or_else(|| format!("expected NAME@TICK, got '{raw}'"))?;
    if name.is_empty() {
        return Err(format!("empty event name in '{raw}'"));
    }
    let tick = parse_tick(tick).map_err(|e| format!("{e} in '{raw}'"))?;
    Ok((name.to_owned(), tick))
}

fn parse_tick(raw: &str) -> Result<u64, String> {
    match raw.parse::<u64>() {
        Ok(0) => Err("ticks are numbered from 1".to_owned()),
        Ok(tick) => Ok(tick),
        Err(e) => Err(format!("bad tick '{raw}': {e}")),
    }
}

fn read_config(path: &Path) -> anyhow::Result<fieldfx::LifecycleConfig> {
    let cfg = fieldfx::LifecycleConfig::from_path(path)
        .with_context(|| format!("load lifecycle '{}'", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate lifecycle '{}'", path.display()))?;
    Ok(cfg)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.in_path)?;
    let (mut animator, base) = cfg.into_animator();
    animator.start();

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for tick in 1..=args.ticks {
        for _ in args.triggers.iter().filter(|&&t| t == tick) {
            animator.trigger_transition();
        }
        for (name, _) in args.events.iter().filter(|(_, t)| *t == tick) {
            animator.fire_event(name);
        }
        animator.tick();

        let time = fieldfx::world_time(tick, args.partial);
        let frame = fieldfx::FrameModifiers::sample(&animator, &base, time);
        serde_json::to_writer(&mut out, &TickLine { tick, frame: &frame })
            .context("write frame JSON")?;
        writeln!(out).context("write frame JSON")?;

        if animator.is_complete() {
            break;
        }
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

fn cmd_ease(args: EaseArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.samples >= 2, "--samples must be at least 2");
    let ease = fieldfx::Ease::from_name(&args.name);
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "# {}", ease.name())?;
    let last = args.samples - 1;
    for i in 0..=last {
        let t = i as f32 / last as f32;
        writeln!(out, "{t:.4} {:.6}", ease.apply(t))?;
    }
    out.flush()?;
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.in_path)?;
    eprintln!(
        "ok: '{}' with {} stage(s){}",
        cfg.id,
        cfg.stages.len(),
        if cfg.looping { ", looping" } else { "" }
    );
    Ok(())
}
