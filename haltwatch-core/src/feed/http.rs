//! Blocking HTTP feed provider.
//!
//! One unauthenticated GET per fetch against the exchange's download
//! endpoint. The upstream tool issued unbounded blocking requests; here the
//! client carries an explicit timeout so a hung server fails the cycle
//! instead of wedging the loop.

use super::config::FeedConfig;
use super::parse::parse_halts;
use super::provider::{FeedError, FeedFetch, HaltFeed};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// HTTP implementation of [`HaltFeed`].
pub struct HttpFeed {
    client: reqwest::blocking::Client,
    config: FeedConfig,
}

impl HttpFeed {
    pub fn new(config: FeedConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self { client, config }
    }
}

impl HaltFeed for HttpFeed {
    fn fetch(&self) -> Result<FeedFetch, FeedError> {
        let resp = self
            .client
            .get(&self.config.url)
            .send()
            .map_err(|e| FeedError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::BadStatus(status));
        }

        let last_modified = resp
            .headers()
            .get(reqwest::header::LAST_MODIFIED)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_last_modified);

        let body = resp
            .bytes()
            .map_err(|e| FeedError::Transport(e.to_string()))?;
        let outcome = parse_halts(&body, &self.config)?;

        Ok(FeedFetch {
            halts: outcome.halts,
            last_modified,
            warnings: outcome.warnings,
        })
    }
}

/// Parse an HTTP `Last-Modified` header value.
///
/// Some feed revisions omit or garble this header; a failure here only
/// degrades the displayed "last updated" line, never the fetch itself.
fn parse_last_modified(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn last_modified_parses_standard_header() {
        let parsed = parse_last_modified("Mon, 15 Jan 2024 14:30:00 GMT").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap());
    }

    #[test]
    fn last_modified_tolerates_garbage() {
        assert_eq!(parse_last_modified(""), None);
        assert_eq!(parse_last_modified("yesterday-ish"), None);
    }
}
