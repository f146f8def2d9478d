//! Small numeric helpers shared by the loaders and aggregators.

pub mod stats;

pub use stats::{linspace, mean, nearest_index};
