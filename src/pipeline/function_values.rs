//! Function-value comparison: one chart per algorithm, overlaying the
//! computed solutions at every resolution plus the exact reference taken
//! from the highest-resolution file.

use crate::config::{AnalysisOptions, ALGORITHMS};
use crate::error::VizError;
use crate::render::{ChartRenderer, ChartSpec, Scale, SeriesSpec};
use crate::series::Curve;
use crate::table::read_table;

/// Rows of header text before the numbers in a value file.
const HEADER_ROWS: usize = 1;

pub fn run(opts: &AnalysisOptions, renderer: &dyn ChartRenderer) -> Result<(), VizError> {
    for algorithm in &ALGORITHMS {
        let mut series = Vec::new();
        for &resolution in &opts.resolutions {
            let table = read_table(&opts.values_path(algorithm, resolution), HEADER_ROWS)?;
            let with_reference = Some(resolution) == opts.reference_resolution();
            let curve = Curve::from_table(&table, with_reference)?;
            let xs = curve.sample_coords();

            // legend shows the interior point count, excluding the two
            // boundary rows the solver writes
            let interior = curve.computed().len().saturating_sub(2);
            series.push(SeriesSpec::new(
                interior.to_string(),
                xs.clone(),
                curve.computed().to_vec(),
            ));
            if let Some(exact) = curve.exact() {
                series.push(SeriesSpec::new("exact", xs, exact.to_vec()));
            }
        }

        renderer.render(&ChartSpec {
            title: format!("{} function values", algorithm.display),
            x_label: "x".to_string(),
            y_label: "function value".to_string(),
            scale: Scale::Linear,
            series,
            highlights: Vec::new(),
        })?;
    }
    Ok(())
}
