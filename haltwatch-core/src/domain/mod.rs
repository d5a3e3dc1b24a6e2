//! Domain types for the halt feed.

pub mod halt;

pub use halt::{snapshot_of, Snapshot, TradeHalt};
