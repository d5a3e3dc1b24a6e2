//! TradeHalt — the fundamental feed record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single trading halt as reported by the exchange feed.
///
/// Timestamps are normalized to UTC; the parser interprets the feed's
/// wall-clock date/time columns in the exchange's zone first. `resume_time`
/// stays `None` until the exchange publishes a resume date and time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeHalt {
    pub symbol: String,
    pub name: String,
    pub exchange: String,
    pub reason: String,
    pub halt_time: Option<DateTime<Utc>>,
    pub resume_time: Option<DateTime<Utc>>,
}

/// The halts known as of one fetch cycle, keyed by symbol.
pub type Snapshot = HashMap<String, TradeHalt>;

/// Build the per-cycle snapshot from feed order.
///
/// Duplicate symbols within one fetch resolve last-wins, matching map
/// insertion semantics.
pub fn snapshot_of(halts: &[TradeHalt]) -> Snapshot {
    halts
        .iter()
        .map(|halt| (halt.symbol.clone(), halt.clone()))
        .collect()
}
