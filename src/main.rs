//! Broodmind driver.
//!
//! Reads one JSON snapshot per line from stdin, evaluates the policies
//! against a replay host built from that snapshot, and writes one JSON frame
//! log per line to stdout. A line reading `newgame` resets the counters.
//! Diagnostics go to stderr; set `RUST_LOG` to adjust their verbosity.

use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use broodmind::agent::Agent;
use broodmind::evaluator::Outcome;
use broodmind::game::Snapshot;
use broodmind::host::ReplayHost;
use broodmind::policy::{PolicyConfig, PolicyCounters, QueenRetry};

#[derive(Debug, Parser)]
#[command(name = "broodmind", version, about = "Replay snapshots through the Zerg policy")]
struct Args {
    /// JSON policy configuration; missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed, 0 for entropy. Overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Count accepted queens toward the one-per-hatchery cap.
    #[arg(long)]
    strict_queens: bool,

    /// Minimum distance the replay host keeps between structures.
    #[arg(long, default_value_t = broodmind::host::replay::DEFAULT_CLEARANCE)]
    clearance: f32,
}

/// One line of output.
#[derive(Serialize)]
struct FrameLog<'a> {
    frame: u64,
    counters: PolicyCounters,
    outcomes: &'a [Outcome],
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => match PolicyConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => PolicyConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.strict_queens {
        config.queen_retry = QueenRetry::StrictOnce;
    }

    info!(?config, "broodmind starting");
    let mut agent = Agent::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for (number, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("failed to read stdin: {}", e);
                break;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "newgame" {
            agent.new_game();
            continue;
        }

        let snapshot: Snapshot = match serde_json::from_str(trimmed) {
            Ok(s) => s,
            Err(e) => {
                warn!(line = number + 1, "skipping malformed snapshot: {}", e);
                continue;
            }
        };

        let mut host = ReplayHost::new(&snapshot).with_clearance(args.clearance);
        let report = agent.on_step(&snapshot, &mut host);
        let log = FrameLog {
            frame: snapshot.frame,
            counters: report.counters,
            outcomes: &report.outcomes,
        };
        let written = serde_json::to_writer(&mut out, &log)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(out))
            .and_then(|()| out.flush());
        if let Err(e) = written {
            error!("failed to write frame log: {}", e);
            return ExitCode::FAILURE;
        }
    }

    info!(frames = agent.frames(), "input exhausted");
    ExitCode::SUCCESS
}
