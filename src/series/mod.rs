//! Loaders for the per-algorithm accuracy files: error-vs-grid-size series
//! and computed/exact function-value curves.

pub mod error_series;
pub mod function_values;

pub use error_series::ErrorSeries;
pub use function_values::Curve;
