//! ledhold host simulation.
//!
//! Builds the two-channel reference board on simulated pins and replays a
//! scripted switch sequence against a simulated 1 ms tick, logging every
//! pin edge and state change.
//!
//! ```text
//! ledhold [--log-level debug] [board.json]
//! ```
//!
//! A rejected configuration is fatal: the process exits before any event
//! is dispatched.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;
use tracing_subscriber::filter::LevelFilter;

use ledhold::adapters::log_sink::LogEventSink;
use ledhold::adapters::sim_pin::SimOutputPin;
use ledhold::app::events::LedEvent;
use ledhold::board::LedBoard;
use ledhold::config::BoardConfig;
use ledhold::drivers::led_pin::Polarity;
use ledhold::events::{self, ChannelEvent, EventProducer, EventQueue};

#[derive(Parser, Debug)]
#[command(author, version, about = "Press-and-hold LED board simulation", long_about = None)]
struct Cli {
    /// Board configuration (JSON). Defaults to the two-LED reference board.
    config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(short, long, env = "LEDHOLD_LOG", default_value = "info")]
    log_level: LevelFilter,

    /// Simulated run length in milliseconds.
    #[arg(long, default_value_t = 7000)]
    run_ms: u32,
}

// ── Script ────────────────────────────────────────────────────

/// (time in ms, event). Channel 0 is held into blinking, channel 1 gets a
/// short tap.
const SCRIPT: &[(u32, ChannelEvent)] = &[
    (0, ChannelEvent::new(0, LedEvent::SwitchPressed)),
    (1000, ChannelEvent::new(1, LedEvent::SwitchPressed)),
    (1500, ChannelEvent::new(1, LedEvent::SwitchReleased)),
    (5500, ChannelEvent::new(0, LedEvent::SwitchReleased)),
];

fn load_config(path: Option<&Path>) -> Result<BoardConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading board config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing board config {}", path.display()))
        }
        None => Ok(BoardConfig::default()),
    }
}

/// Queue a script event. A dropped switch edge would leave the run out of
/// step with the script, so a full queue is an error.
fn enqueue<const N: usize>(
    tx: &mut EventProducer<'_, N>,
    now_ms: u32,
    event: ChannelEvent,
) -> Result<()> {
    if !tx.push(event) {
        bail!("event queue full at t={now_ms}ms, script event {:?} lost", event);
    }
    Ok(())
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    // `log` records from the library reach the subscriber through tracing-log.
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("logger init failed")?;
    info!("ledhold simulation v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(cli.config.as_deref())?;
    let mut sink = LogEventSink::new();
    let mut board = LedBoard::new(
        &config,
        [SimOutputPin::new("LED0"), SimOutputPin::new("LED1")],
        Polarity::ActiveHigh,
        &mut sink,
    )
    .context("board construction failed")?;

    let mut queue: EventQueue = EventQueue::new();
    let (mut tx, mut rx) = events::split(&mut queue);
    let tick_ms = board.tick_ms();

    let mut script = SCRIPT.iter().peekable();
    let mut now_ms = 0;
    while now_ms <= cli.run_ms {
        while let Some((_, event)) = script.next_if(|(at, _)| *at <= now_ms) {
            info!("t={now_ms:>5}ms | ch{} {:?}", event.channel, event.event);
            enqueue(&mut tx, now_ms, *event)?;
        }
        board.run(tick_ms, &mut rx, &mut sink);
        now_ms += tick_ms;
    }

    for (idx, led) in board.channels().enumerate() {
        info!(
            "END   | ch{} state={:?} output={:?} pin_edges={}",
            idx,
            led.state(),
            led.output_level(),
            led.driver().led().pin().edges()
        );
    }
    Ok(())
}
