//! spm-monitor CLI
//!
//! Usage:
//!   spm-monitor --input observations.jsonl          # Plain text signals + alerts
//!   spm-monitor --json < observations.jsonl         # Canonical signals as JSON lines
//!   spm-monitor --config monitor.json --alerts-only # Only print alerts
//!
//! Each input line is one JSON observation:
//!   {"concept": "...", "embedding": [..], "logos": .., "pathos": .., "ethos_force": ..,
//!    "source": "...", "source_reliability": .., "source_bias": .., "centrality": ..}

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::{error, info, warn, Level};

use spm_defense::core::MonitorAgent;
use spm_defense::types::{MonitorConfig, Observation, SpmResult, SpmSignal};
use spm_defense::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "spm-monitor",
    version = VERSION,
    about = "Semantic Physics Model - track concept drift and filter low-ethos force",
    long_about = "Streams pre-scored observations through a monitor agent.\n\n\
                  For every observation the concept's mass is re-estimated from its\n\
                  trajectory, the source's ethos passes the circuit breaker, and the\n\
                  resulting semantic acceleration is checked against alert thresholds."
)]
struct Args {
    /// JSON-lines observation file (default: stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON monitor configuration (alpha, beta, thresholds)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output canonical signals as JSON lines
    #[arg(long)]
    json: bool,

    /// Only print alerts
    #[arg(long)]
    alerts_only: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout stays clean for JSON output
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> SpmResult<()> {
    let config = match &args.config {
        Some(path) => MonitorConfig::from_file(path)?,
        None => MonitorConfig::default(),
    };
    let mut agent = MonitorAgent::with_config(config)?;

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut processed = 0usize;
    let mut alerts = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_no = index + 1;

        let obs: Observation = match serde_json::from_str(line) {
            Ok(obs) => obs,
            Err(e) => {
                warn!(line = line_no, "skipping malformed observation: {e}");
                continue;
            }
        };

        let signal = match agent.process_observation(&obs) {
            Ok(signal) => signal,
            Err(e) => {
                warn!(line = line_no, concept = %obs.concept, "observation rejected: {e}");
                continue;
            }
        };
        processed += 1;

        let alert = agent.evaluate_alert(&signal);

        if !args.alerts_only {
            print_signal(&mut out, &signal, args.json)?;
        }
        if let Some(alert) = alert {
            alerts += 1;
            if args.json {
                writeln!(out, "{}", serde_json::to_string(&alert)?)?;
            } else {
                writeln!(out, "{}", alert.to_string().red().bold())?;
            }
        }
    }

    info!(processed, alerts, concepts = agent.len(), "stream finished");
    Ok(())
}

fn print_signal(out: &mut impl Write, signal: &SpmSignal, json: bool) -> SpmResult<()> {
    if json {
        writeln!(out, "{}", signal.to_json()?)?;
        return Ok(());
    }

    let line = signal.to_parseable_string();
    if signal.ethos == 0.0 {
        // circuit breaker engaged
        writeln!(out, "{}", line.bright_black())?;
    } else {
        writeln!(out, "{}", line.green())?;
    }
    Ok(())
}
