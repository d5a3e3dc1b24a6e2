//! CSV feed parser.
//!
//! Strict on shape — a row with the wrong field count aborts the whole
//! parse with no partial output — but tolerant of the feed's known
//! timestamp glitches, which degrade to `None` plus a warning.

use super::config::FeedConfig;
use super::provider::FeedError;
use crate::domain::TradeHalt;
use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

const FEED_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parsed records plus non-fatal diagnostics.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub halts: Vec<TradeHalt>,
    pub warnings: Vec<String>,
}

/// Parse a raw CSV feed body into halt records.
///
/// The first row is the header and is discarded. An empty or header-only
/// body yields an empty outcome, not an error.
pub fn parse_halts(input: &[u8], config: &FeedConfig) -> Result<ParseOutcome, FeedError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| FeedError::Malformed(e.to_string()))?;
        records.push(record);
    }

    if records.len() < 2 {
        return Ok(ParseOutcome::default());
    }

    let layout = &config.layout;
    let mut outcome = ParseOutcome::default();

    for (row, record) in records.iter().enumerate().skip(1) {
        if record.len() != layout.expected_fields {
            return Err(FeedError::MalformedRow {
                row,
                found: record.len(),
                expected: layout.expected_fields,
            });
        }

        let symbol = record[layout.symbol].to_string();

        let halt_time = parse_feed_time(
            &record[layout.halt_date],
            &record[layout.halt_time],
            config.timezone,
            &symbol,
            "halt",
            &mut outcome.warnings,
        );
        let resume_time = parse_feed_time(
            &record[layout.resume_date],
            &record[layout.resume_time],
            config.timezone,
            &symbol,
            "resume",
            &mut outcome.warnings,
        );

        outcome.halts.push(TradeHalt {
            symbol,
            name: try_unquote(&record[layout.name]),
            exchange: record[layout.exchange].to_string(),
            reason: record[layout.reason].to_string(),
            halt_time,
            resume_time,
        });
    }

    Ok(outcome)
}

/// Combine the feed's date and time columns into a UTC timestamp.
///
/// Either column empty means the feed has nothing to report: `None`, no
/// warning. Both present but unparsable is a feed glitch worth surfacing
/// but never fatal — the record keeps `None` and one warning is recorded.
/// Nonexistent local times (spring-forward DST gap) degrade the same way;
/// ambiguous ones resolve to the earlier instant.
fn parse_feed_time(
    date: &str,
    time: &str,
    tz: Tz,
    symbol: &str,
    which: &str,
    warnings: &mut Vec<String>,
) -> Option<DateTime<Utc>> {
    if date.is_empty() || time.is_empty() {
        return None;
    }

    let combined = format!("{date} {time}");
    let naive = match NaiveDateTime::parse_from_str(&combined, FEED_TIME_FORMAT) {
        Ok(naive) => naive,
        Err(e) => {
            warnings.push(format!("failed to parse {which} time for {symbol}: {e}"));
            return None;
        }
    };

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            warnings.push(format!(
                "nonexistent local {which} time for {symbol}: {combined}"
            ));
            None
        }
    }
}

/// Undo one layer of double-quote escaping on the issuer name.
///
/// The feed sometimes wraps names in an extra quoted-string layer beyond
/// normal CSV quoting. Anything that does not unescape cleanly falls back
/// to the raw value.
fn try_unquote(s: &str) -> String {
    let Some(inner) = s.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) else {
        return s.to_string();
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                _ => return s.to_string(),
            },
            // A bare interior quote means this was never a quoted string.
            '"' => return s.to_string(),
            _ => out.push(c),
        }
    }
    out
}
