//! Poll loop — fetch, diff, render, once or on an interval.
//!
//! Both loops are single-threaded and blocking. Any [`FeedError`] is fatal
//! and propagates to the caller, which decides exit policy; there is no
//! retry or backoff. The operator restarts on persistent failure.

use crate::diff::SnapshotDiffer;
use crate::feed::HaltFeed;
use crate::render;
use anyhow::Result;
use chrono::Local;
use std::io::Write;
use std::time::Duration;

/// Outcome of one watch cycle.
#[derive(Debug, Clone, Copy)]
pub struct CycleReport {
    pub alert: bool,
    pub halt_count: usize,
}

/// One `fetch` invocation: a single fetch and table, no retained state.
///
/// On failure nothing is rendered — the error propagates for a non-zero
/// exit.
pub fn run_fetch(feed: &dyn HaltFeed, out: &mut impl Write) -> Result<()> {
    let fetch = feed.fetch()?;
    for warning in &fetch.warnings {
        eprintln!("warning: {warning}");
    }
    render::render_table(&fetch.halts, out)?;
    out.flush()?;
    Ok(())
}

/// One watch cycle: fetch, diff against the retained snapshot, redraw.
///
/// The bell, when due, is written before the redraw. Exposed separately
/// from [`run_watch`] so cycles can be driven one at a time.
pub fn run_cycle(
    feed: &dyn HaltFeed,
    differ: &mut SnapshotDiffer,
    out: &mut impl Write,
) -> Result<CycleReport> {
    let fetch = feed.fetch()?;

    let alert = differ.observe(&fetch.halts);
    if alert {
        write!(out, "{}", render::BELL)?;
    }

    write!(out, "{}", render::CLEAR_SCREEN)?;
    render::render_table(&fetch.halts, out)?;
    render::render_status(Local::now(), fetch.last_modified, out)?;
    out.flush()?;

    for warning in &fetch.warnings {
        eprintln!("warning: {warning}");
    }

    Ok(CycleReport {
        alert,
        halt_count: fetch.halts.len(),
    })
}

/// Watch forever: cycle, sleep, repeat.
///
/// The first cycle runs immediately. The sleep starts only after a cycle
/// completes, so a slow fetch delays the next tick rather than queueing
/// missed ones. Returns only on error.
pub fn run_watch(feed: &dyn HaltFeed, interval: Duration, out: &mut impl Write) -> Result<()> {
    let mut differ = SnapshotDiffer::new();

    loop {
        run_cycle(feed, &mut differ, out)?;
        std::thread::sleep(interval);
    }
}
