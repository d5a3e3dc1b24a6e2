//! Feed configuration, parsing, and transport.

pub mod config;
pub mod http;
pub mod parse;
pub mod provider;

pub use config::{FeedConfig, FeedLayout, NYSE_HALT_URL};
pub use http::HttpFeed;
pub use parse::{parse_halts, ParseOutcome};
pub use provider::{FeedError, FeedFetch, HaltFeed};
