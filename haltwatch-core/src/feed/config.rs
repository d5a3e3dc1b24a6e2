//! Feed endpoint configuration.
//!
//! An explicit value handed to the parser and HTTP provider. There is no
//! process-global zone handle and no hidden initialization order to get
//! wrong.

use chrono_tz::Tz;

/// The NYSE trade-halt download endpoint.
pub const NYSE_HALT_URL: &str = "https://www.nyse.com/api/trade-halts/current/download";

/// Column positions within a feed row.
///
/// The feed's shape has changed between revisions, so the mapping is data
/// rather than a hard-coded assumption. A row whose field count differs
/// from `expected_fields` aborts the parse instead of guessing.
#[derive(Debug, Clone)]
pub struct FeedLayout {
    pub expected_fields: usize,
    pub halt_date: usize,
    pub halt_time: usize,
    pub symbol: usize,
    pub name: usize,
    pub exchange: usize,
    pub reason: usize,
    pub resume_date: usize,
    pub resume_time: usize,
}

impl Default for FeedLayout {
    /// The 8-column layout observed on the current NYSE download endpoint.
    fn default() -> Self {
        Self {
            expected_fields: 8,
            halt_date: 0,
            halt_time: 1,
            symbol: 2,
            name: 3,
            exchange: 4,
            reason: 5,
            resume_date: 6,
            resume_time: 7,
        }
    }
}

/// Everything the parser and HTTP provider need to interpret the feed.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub url: String,
    /// Zone the feed's wall-clock timestamps are written in.
    pub timezone: Tz,
    pub layout: FeedLayout,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: NYSE_HALT_URL.to_string(),
            timezone: chrono_tz::America::New_York,
            layout: FeedLayout::default(),
        }
    }
}
