//! solvis: comparison charts for tridiagonal linear-solver benchmarks
//!
//! This crate post-processes the result files written by an accompanying
//! solver benchmark suite (Thomas, Thomas-special, and LU runs) and renders
//! comparison charts: per-grid-size mean timings, max-relative-error curves,
//! and computed-vs-exact function values. Chart rendering is an injected
//! `ChartRenderer` capability, so pipelines stay testable without a drawing
//! backend.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod series;
pub mod table;
pub mod timing;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use error::*;
pub use render::*;
pub use series::*;
pub use table::*;
pub use timing::*;

// Re-export the timing report at the crate root for convenience
pub use timing::aggregate::TimingReport;
