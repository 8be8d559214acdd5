//! ╔═══════════════════════════════════════════════════════════════════════════╗
//! ║                        SPELLPAD - REPLAY DRIVER                           ║
//! ╚═══════════════════════════════════════════════════════════════════════════╝
//!
//! Drives a casting session from a script of timed key and pointer events
//! and prints every outcome. `--verbose` (or `RUST_LOG`) shows the session's log.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use spellpad::gesture::FlatSurface;
use spellpad::{CastOutcome, CastingSession, ComboLibrary, PadConfig, Point2, SlotBoard, SlotCommand};

mod replay;

use replay::{Command, ConsoleHost};

#[derive(Parser, Debug)]
#[command(name = "spellpad-replay", version, about = "Replay pointer scripts through a spell pad")]
struct Cli {
    /// Script file (one `<ms> <command> [args]` step per line)
    script: PathBuf,

    /// Gesture expiry window in milliseconds
    #[arg(long, default_value_t = spellpad::config::DEFAULT_SEQUENCE_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Keep the pad open after a successful cast
    #[arg(long)]
    no_auto_hide: bool,

    /// Screen pixels per local pad unit (pad is centered at 400,300)
    #[arg(long, default_value_t = 200.0)]
    pixels_per_unit: f32,

    /// Open the pad at start with no whitelist, without pressing a slot key
    #[arg(long)]
    open: bool,

    /// Log every stroke classification
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
    let text = fs::read_to_string(&cli.script)
        .with_context(|| format!("reading {}", cli.script.display()))?;
    let steps = replay::parse_script(&text)
        .with_context(|| format!("parsing {}", cli.script.display()))?;

    let config = PadConfig::new()
        .with_sequence_timeout(cli.timeout_ms)
        .with_auto_hide(!cli.no_auto_hide);
    let host = ConsoleHost::new(FlatSurface::new(Point2::new(400.0, 300.0), cli.pixels_per_unit));
    let mut session = CastingSession::new(host, Arc::new(ComboLibrary::with_defaults()), config);
    let mut board = SlotBoard::with_defaults();

    if cli.open {
        session.activate(None);
    }

    for step in steps {
        match step.command {
            Command::Key(key) => {
                let command = board.press(key);
                board.apply(command, &mut session);
                match command {
                    SlotCommand::Open(index) => {
                        let name = board.slot(index).map(|s| s.name.as_str()).unwrap_or("?");
                        println!("{:>6} ms  slot {} open", step.at, name);
                    }
                    SlotCommand::Close => println!("{:>6} ms  pad closed", step.at),
                    SlotCommand::Ignored => {}
                }
            }
            Command::Pointer(event) => {
                if let Some(outcome) = session.handle(event, step.at) {
                    println!("{:>6} ms  {}", step.at, describe(&outcome));
                    board.sync(session.is_active());
                }
            }
            Command::Tick => {}
        }
        session.tick(step.at);
    }

    let stats = session.stats();
    println!(
        "strokes={} unrecognized={} casts={} unauthorized={} expired={} effects={}",
        stats.strokes_processed,
        stats.unrecognized,
        stats.casts,
        stats.unauthorized,
        stats.pruned,
        session.host().effects.len()
    );
    Ok(())
}

fn describe(outcome: &CastOutcome) -> String {
    match outcome {
        CastOutcome::Unrecognized => "stroke not recognized".to_string(),
        CastOutcome::Buffered(gesture) => format!("{} buffered", gesture),
        CastOutcome::Unauthorized { gesture, combo_id } => {
            format!("{} completes {}, not allowed in this slot", gesture, combo_id)
        }
        CastOutcome::Cast {
            gesture,
            combo_id,
            consumed,
            ..
        } => format!("{} casts {} ({} gestures)", gesture, combo_id, consumed),
    }
}
