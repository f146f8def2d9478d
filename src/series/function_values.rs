//! Function-value curves: computed solutions, plus the exact reference at the
//! highest resolution.
//!
//! The value files carry three columns (exact, computed, relative_error) but
//! no sample coordinate; the solver evaluated on `n` evenly spaced points
//! over `[0, 1]`, so the coordinate is reconstructed from the column length.

use crate::error::VizError;
use crate::table::Table;
use crate::utils::linspace;

/// A loaded function-value curve for one algorithm at one resolution.
///
/// The exact column is only carried for the designated highest-resolution
/// file of an algorithm group, where it is overlaid once as ground truth.
#[derive(Clone, Debug)]
pub enum Curve {
    Computed(Vec<f64>),
    ComputedWithReference { computed: Vec<f64>, exact: Vec<f64> },
}

/// Column order in the value files.
const COL_EXACT: usize = 0;
const COL_COMPUTED: usize = 1;

impl Curve {
    /// Extract the computed column, and the exact column too when
    /// `with_reference` marks this as the group's highest-resolution file.
    pub fn from_table(table: &Table, with_reference: bool) -> Result<Self, VizError> {
        table.expect_shape(3)?;
        let computed = table.column(COL_COMPUTED);
        Ok(if with_reference {
            Curve::ComputedWithReference {
                computed,
                exact: table.column(COL_EXACT),
            }
        } else {
            Curve::Computed(computed)
        })
    }

    pub fn computed(&self) -> &[f64] {
        match self {
            Curve::Computed(c) => c,
            Curve::ComputedWithReference { computed, .. } => computed,
        }
    }

    pub fn exact(&self) -> Option<&[f64]> {
        match self {
            Curve::Computed(_) => None,
            Curve::ComputedWithReference { exact, .. } => Some(exact),
        }
    }

    /// The implicit sample coordinate: `n` evenly spaced points over `[0, 1]`
    /// where `n` is the computed-column length.
    pub fn sample_coords(&self) -> Vec<f64> {
        linspace(0.0, 1.0, self.computed().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn value_table(n: usize) -> Table {
        let rows = (0..n)
            .map(|i| {
                let x = i as f64 / (n - 1) as f64;
                vec![x * x, x * x + 1e-6, 1e-6]
            })
            .collect();
        Table::from_rows("vals.txt", rows).unwrap()
    }

    #[test]
    fn computed_column_is_always_extracted() {
        let curve = Curve::from_table(&value_table(5), false).unwrap();
        assert_eq!(curve.computed().len(), 5);
        assert!(curve.exact().is_none());
    }

    #[test]
    fn exact_column_only_at_highest_resolution() {
        let curve = Curve::from_table(&value_table(5), true).unwrap();
        let exact = curve.exact().unwrap();
        assert_eq!(exact.len(), 5);
        assert_abs_diff_eq!(exact[4], 1.0, epsilon = 1e-15);
    }

    #[test]
    fn sample_coords_span_unit_interval_inclusive() {
        let curve = Curve::from_table(&value_table(12), false).unwrap();
        let xs = curve.sample_coords();
        assert_eq!(xs.len(), 12);
        assert_abs_diff_eq!(xs[0], 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(xs[11], 1.0, epsilon = 1e-15);
    }

    #[test]
    fn wrong_column_count_is_a_format_error() {
        let table = Table::from_rows("vals.txt", vec![vec![1.0, 2.0]]).unwrap();
        assert!(Curve::from_table(&table, false).is_err());
    }
}
