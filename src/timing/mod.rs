//! Timing-file decoding and per-grid-size aggregation.

pub mod aggregate;

pub use aggregate::{parse_timing, TimingEntry, TimingReport};
