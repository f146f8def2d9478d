//! Options for one analysis run.
//!
//! The benchmark suite writes a fixed set of files with fixed names; those
//! names and the recognized grid resolutions live here as named constants,
//! and `AnalysisOptions` carries the directories plus the tunable knobs so
//! tests can point the pipelines at fixture files without touching pipeline
//! logic.

use std::path::PathBuf;

/// One of the three benchmarked solver algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Algorithm {
    /// File-name stem, e.g. `thomas_algorithm` in `thomas_algorithm_n_100.txt`.
    pub stem: &'static str,
    /// Human-readable name used in chart legends and titles.
    pub display: &'static str,
}

/// The three algorithms, in the column order of the timing file.
pub const ALGORITHMS: [Algorithm; 3] = [
    Algorithm { stem: "thomas_algorithm", display: "Thomas" },
    Algorithm { stem: "thomas_algorithm_special", display: "Thomas special" },
    Algorithm { stem: "LU", display: "LU" },
];

/// Timing file produced by the benchmark run.
pub const TIMING_FILE: &str = "compare_times.txt";

/// Grid resolutions the suite writes function-value files for, ascending.
/// The last one doubles as the "exact reference" resolution.
pub const RESOLUTIONS: [u32; 3] = [10, 100, 1000];

/// Grid-point counts to emphasize on the error curves.
pub const HIGHLIGHT_TARGETS: [f64; 3] = [10.0, 100.0, 1000.0];

/// Where to read result files from, where to put charts, and which points to
/// highlight.
#[derive(Clone, Debug)]
pub struct AnalysisOptions {
    /// Directory holding the solver's result files.
    pub data_dir: PathBuf,
    /// Directory chart images are written to.
    pub plot_dir: PathBuf,
    /// Grid-point counts highlighted on error curves.
    pub highlight_targets: Vec<f64>,
    /// Function-value resolutions, ascending; the last gets the exact overlay.
    pub resolutions: Vec<u32>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            data_dir: PathBuf::from("."),
            plot_dir: PathBuf::from("target/plots"),
            highlight_targets: HIGHLIGHT_TARGETS.to_vec(),
            resolutions: RESOLUTIONS.to_vec(),
        }
    }
}

impl AnalysisOptions {
    /// Options rooted at `data_dir`, otherwise default.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        AnalysisOptions {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn timing_path(&self) -> PathBuf {
        self.data_dir.join(TIMING_FILE)
    }

    pub fn error_path(&self, algorithm: &Algorithm) -> PathBuf {
        self.data_dir.join(format!("{}_error.txt", algorithm.stem))
    }

    pub fn values_path(&self, algorithm: &Algorithm, resolution: u32) -> PathBuf {
        self.data_dir
            .join(format!("{}_n_{}.txt", algorithm.stem, resolution))
    }

    /// The resolution whose file carries the exact-reference column.
    pub fn reference_resolution(&self) -> Option<u32> {
        self.resolutions.last().copied()
    }
}
