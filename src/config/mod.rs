//! Run configuration: input/output locations and the fixed file-name scheme.

pub mod options;

pub use options::{Algorithm, AnalysisOptions, ALGORITHMS, HIGHLIGHT_TARGETS, RESOLUTIONS, TIMING_FILE};
