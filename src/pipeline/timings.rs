//! Timing comparison: decode `compare_times.txt`, reduce every block to its
//! per-algorithm mean, and draw all three algorithms on one log-log chart.
//! Grid sizes where LU was never computed come out as NaN and are dropped by
//! the renderer, not plotted as zero.

use crate::config::AnalysisOptions;
use crate::error::VizError;
use crate::render::{ChartRenderer, ChartSpec, Scale, SeriesSpec};
use crate::table::read_table;
use crate::timing::parse_timing;

/// Rows of header text before the numbers in the timing file.
const HEADER_ROWS: usize = 1;

pub fn run(opts: &AnalysisOptions, renderer: &dyn ChartRenderer) -> Result<(), VizError> {
    let table = read_table(&opts.timing_path(), HEADER_ROWS)?;
    let report = parse_timing(&table)?;

    let grid_sizes: Vec<f64> = report.entries.iter().map(|e| e.grid_size as f64).collect();
    let column = |f: fn(&crate::timing::TimingEntry) -> f64| -> Vec<f64> {
        report.entries.iter().map(f).collect()
    };

    renderer.render(&ChartSpec {
        title: format!("Calculation time, mean of {} runs", report.runs),
        x_label: "Grid points".to_string(),
        y_label: "Seconds".to_string(),
        scale: Scale::LogLog,
        series: vec![
            SeriesSpec::new("Thomas", grid_sizes.clone(), column(|e| e.thomas)),
            SeriesSpec::new("Thomas special", grid_sizes.clone(), column(|e| e.thomas_special)),
            SeriesSpec::new("LU", grid_sizes, column(|e| e.lu)),
        ],
        highlights: Vec::new(),
    })
}
