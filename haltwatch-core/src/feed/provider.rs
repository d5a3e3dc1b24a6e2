//! Halt feed trait and structured error types.
//!
//! The `HaltFeed` trait abstracts over the feed source so the poll loop can
//! be exercised against scripted in-memory feeds in tests. `HttpFeed` is the
//! production implementation.

use crate::domain::TradeHalt;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Fatal feed failures.
///
/// Transport and malformed-feed conditions both terminate the current
/// command; timestamp glitches are the one recoverable case and travel as
/// warnings on [`FeedFetch`] instead.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected HTTP status: {0}")]
    BadStatus(reqwest::StatusCode),

    #[error("malformed feed: row {row} has {found} fields, expected {expected}")]
    MalformedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("malformed feed: {0}")]
    Malformed(String),
}

/// Result of one successful feed fetch.
#[derive(Debug, Clone)]
pub struct FeedFetch {
    pub halts: Vec<TradeHalt>,
    /// The feed's self-reported modification time, when the server sends a
    /// parsable `Last-Modified` header.
    pub last_modified: Option<DateTime<Utc>>,
    /// Non-fatal parse diagnostics, one line per affected record.
    pub warnings: Vec<String>,
}

/// A source of trade-halt snapshots.
pub trait HaltFeed {
    /// Retrieve the current set of halts. One call per poll cycle.
    fn fetch(&self) -> Result<FeedFetch, FeedError>;
}
