//! End-to-end poll cycles against a scripted feed.

use chrono::{DateTime, TimeZone, Utc};
use haltwatch_core::diff::SnapshotDiffer;
use haltwatch_core::domain::TradeHalt;
use haltwatch_core::feed::{FeedError, FeedFetch, HaltFeed};
use haltwatch_core::render::{BELL, CLEAR_SCREEN};
use haltwatch_core::watch::{run_cycle, run_fetch};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Replays a scripted sequence of fetch results, one per cycle.
struct ScriptedFeed {
    cycles: RefCell<VecDeque<Result<FeedFetch, FeedError>>>,
}

impl ScriptedFeed {
    fn new(cycles: Vec<Result<FeedFetch, FeedError>>) -> Self {
        Self {
            cycles: RefCell::new(cycles.into()),
        }
    }
}

impl HaltFeed for ScriptedFeed {
    fn fetch(&self) -> Result<FeedFetch, FeedError> {
        self.cycles
            .borrow_mut()
            .pop_front()
            .expect("scripted feed exhausted")
    }
}

fn fetch_of(halts: Vec<TradeHalt>) -> FeedFetch {
    FeedFetch {
        halts,
        last_modified: None,
        warnings: Vec::new(),
    }
}

fn halt(symbol: &str, resume_time: Option<DateTime<Utc>>) -> TradeHalt {
    TradeHalt {
        symbol: symbol.into(),
        name: format!("{symbol} Inc."),
        exchange: "NYSE".into(),
        reason: "LUDP".into(),
        halt_time: Some(Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap()),
        resume_time,
    }
}

#[test]
fn resume_fill_in_plus_new_symbol_alerts_in_second_cycle() {
    let resume = Some(Utc.with_ymd_and_hms(2024, 1, 15, 14, 40, 0).unwrap());
    let feed = ScriptedFeed::new(vec![
        Ok(fetch_of(vec![halt("AAPL", None)])),
        Ok(fetch_of(vec![halt("AAPL", resume), halt("TSLA", None)])),
    ]);
    let mut differ = SnapshotDiffer::new();

    let mut out1 = Vec::new();
    let report1 = run_cycle(&feed, &mut differ, &mut out1).unwrap();
    assert!(report1.alert);
    assert_eq!(report1.halt_count, 1);

    let mut out2 = Vec::new();
    let report2 = run_cycle(&feed, &mut differ, &mut out2).unwrap();
    assert!(report2.alert);
    assert_eq!(report2.halt_count, 2);

    // Stored state for AAPL now carries the resume time.
    assert_eq!(differ.prior()["AAPL"].resume_time, resume);
    assert_eq!(differ.prior().len(), 2);

    // One bell, one redraw, two data rows.
    let screen = String::from_utf8(out2).unwrap();
    assert_eq!(screen.matches(BELL).count(), 1);
    assert_eq!(screen.matches(CLEAR_SCREEN).count(), 1);
    assert!(screen.contains("AAPL"));
    assert!(screen.contains("TSLA"));
}

#[test]
fn quiet_cycle_redraws_without_bell() {
    let feed = ScriptedFeed::new(vec![
        Ok(fetch_of(vec![halt("AAPL", None)])),
        Ok(fetch_of(vec![halt("AAPL", None)])),
    ]);
    let mut differ = SnapshotDiffer::new();

    let mut out = Vec::new();
    run_cycle(&feed, &mut differ, &mut out).unwrap();

    let mut out = Vec::new();
    let report = run_cycle(&feed, &mut differ, &mut out).unwrap();
    assert!(!report.alert);

    let screen = String::from_utf8(out).unwrap();
    assert!(!screen.contains(BELL));
    assert!(screen.contains(CLEAR_SCREEN));
    assert!(screen.contains("AAPL"));
}

#[test]
fn missing_last_modified_degrades_footer() {
    let feed = ScriptedFeed::new(vec![Ok(fetch_of(vec![halt("AAPL", None)]))]);
    let mut differ = SnapshotDiffer::new();

    let mut out = Vec::new();
    run_cycle(&feed, &mut differ, &mut out).unwrap();

    let screen = String::from_utf8(out).unwrap();
    assert!(screen.contains("Last fetch"));
    assert!(screen.contains("Last updated  @ (unknown)"));
}

#[test]
fn present_last_modified_shows_in_footer() {
    let mut fetch = fetch_of(vec![halt("AAPL", None)]);
    fetch.last_modified = Some(Utc.with_ymd_and_hms(2024, 1, 15, 14, 0, 0).unwrap());
    let feed = ScriptedFeed::new(vec![Ok(fetch)]);
    let mut differ = SnapshotDiffer::new();

    let mut out = Vec::new();
    run_cycle(&feed, &mut differ, &mut out).unwrap();

    let screen = String::from_utf8(out).unwrap();
    assert!(!screen.contains("(unknown)"));
}

#[test]
fn transport_error_propagates_from_cycle() {
    let feed = ScriptedFeed::new(vec![Err(FeedError::Transport("connection refused".into()))]);
    let mut differ = SnapshotDiffer::new();

    let mut out = Vec::new();
    let err = run_cycle(&feed, &mut differ, &mut out).unwrap_err();
    assert!(err.to_string().contains("transport error"));
    assert!(out.is_empty());
}

#[test]
fn fetch_command_renders_nothing_on_malformed_feed() {
    let feed = ScriptedFeed::new(vec![Err(FeedError::MalformedRow {
        row: 1,
        found: 7,
        expected: 8,
    })]);

    let mut out = Vec::new();
    let err = run_fetch(&feed, &mut out).unwrap_err();
    assert!(err.to_string().contains("malformed feed"));
    assert!(out.is_empty());
}

#[test]
fn fetch_command_prints_plain_table() {
    let feed = ScriptedFeed::new(vec![Ok(fetch_of(vec![halt("AAPL", None)]))]);

    let mut out = Vec::new();
    run_fetch(&feed, &mut out).unwrap();

    let screen = String::from_utf8(out).unwrap();
    // No screen control in one-shot mode.
    assert!(!screen.contains(CLEAR_SCREEN));
    assert!(!screen.contains(BELL));
    assert!(screen.starts_with("SYMBOL"));
    assert!(screen.contains("AAPL"));
}
