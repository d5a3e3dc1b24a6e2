//! HaltWatch Core — halt records, feed parsing, snapshot diffing, poll loop.
//!
//! This crate contains everything behind the `haltwatch` binary:
//! - Domain types (`TradeHalt`, the per-cycle `Snapshot`)
//! - CSV feed parser, strict on feed shape but tolerant of timestamp glitches
//! - `HaltFeed` trait with the blocking HTTP implementation
//! - `SnapshotDiffer` — the alert decision across consecutive fetches
//! - Aligned table renderer and the fetch/watch loops

pub mod diff;
pub mod domain;
pub mod feed;
pub mod render;
pub mod watch;
