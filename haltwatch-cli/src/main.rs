//! HaltWatch CLI — NYSE trade-halt monitor.
//!
//! Commands:
//! - `fetch` — print the current halts table once and exit
//! - `watch` — poll the feed on an interval, redraw the screen, and ring
//!   the terminal bell when a halt appears or a resume time changes

use anyhow::Result;
use clap::{Parser, Subcommand};
use haltwatch_core::feed::{FeedConfig, HttpFeed};
use haltwatch_core::watch::{run_fetch, run_watch};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "haltwatch", about = "HaltWatch — NYSE trade-halt monitor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch current NYSE trade halts and print them once.
    Fetch,
    /// Watch for new NYSE trade halts and ring the bell on changes.
    Watch {
        /// Polling interval (e.g. 5s, 1m, 250ms).
        #[arg(long, default_value = "5s", value_parser = parse_interval)]
        interval: Duration,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let feed = HttpFeed::new(FeedConfig::default());
    let mut stdout = std::io::stdout();

    match cli.command {
        Commands::Fetch => run_fetch(&feed, &mut stdout),
        Commands::Watch { interval } => run_watch(&feed, interval, &mut stdout),
    }
}

/// Parse a human-friendly duration: `250ms`, `5s`, `1m`, `2h`, or bare
/// seconds.
fn parse_interval(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let split = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    let (digits, unit) = s.split_at(split);
    let value: u64 = digits
        .parse()
        .map_err(|_| format!("invalid duration '{s}'"))?;
    if value == 0 {
        return Err(format!("interval must be positive, got '{s}'"));
    }

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        "" | "s" => Ok(Duration::from_secs(value)),
        "m" => Ok(Duration::from_secs(value * 60)),
        "h" => Ok(Duration::from_secs(value * 3600)),
        _ => Err(format!("invalid duration unit '{unit}' in '{s}'")),
    }
}
