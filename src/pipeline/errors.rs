//! Error comparison: one log-log chart per algorithm error file, with the
//! operator's reference grid sizes highlighted on the curve.

use crate::config::{AnalysisOptions, ALGORITHMS};
use crate::error::VizError;
use crate::render::{ChartRenderer, ChartSpec, Scale, SeriesSpec};
use crate::series::ErrorSeries;
use crate::table::read_table;

pub fn run(opts: &AnalysisOptions, renderer: &dyn ChartRenderer) -> Result<(), VizError> {
    for algorithm in &ALGORITHMS {
        // error files carry no header line
        let table = read_table(&opts.error_path(algorithm), 0)?;
        let series = ErrorSeries::from_table(&table)?;

        let highlights = series
            .highlight_indices(&opts.highlight_targets)
            .into_iter()
            .map(|i| (series.grid_points[i], series.max_rel_error[i]))
            .collect();

        renderer.render(&ChartSpec {
            title: format!("{} max relative error", algorithm.display),
            x_label: "number of grid points, n".to_string(),
            y_label: "max relative error".to_string(),
            scale: Scale::LogLog,
            series: vec![SeriesSpec::new(
                algorithm.display,
                series.grid_points.clone(),
                series.max_rel_error.clone(),
            )],
            highlights,
        })?;
    }
    Ok(())
}
