//! Max-relative-error series, one per algorithm error file.

use crate::error::VizError;
use crate::table::Table;
use crate::utils::nearest_index;

/// Ordered (grid_point_count, max_relative_error) pairs, in file order.
///
/// The producer already writes one row per grid size, sorted ascending, so no
/// aggregation or re-sorting happens here.
#[derive(Clone, Debug)]
pub struct ErrorSeries {
    pub grid_points: Vec<f64>,
    pub max_rel_error: Vec<f64>,
}

impl ErrorSeries {
    /// Extract the two columns of an error table.
    pub fn from_table(table: &Table) -> Result<Self, VizError> {
        table.expect_shape(2)?;
        Ok(ErrorSeries {
            grid_points: table.column(0),
            max_rel_error: table.column(1),
        })
    }

    /// For each target grid-point count, the index of the entry closest to it
    /// (minimum absolute difference, ties to the lowest index). Used to mark
    /// the grid sizes the operator cares about on the error curve.
    pub fn highlight_indices(&self, targets: &[f64]) -> Vec<usize> {
        targets
            .iter()
            .filter_map(|&t| nearest_index(&self.grid_points, t))
            .collect()
    }
}
