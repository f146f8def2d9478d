//! Parser/aggregator for the benchmark timing file.
//!
//! `compare_times.txt` embeds its own layout: after the header line (already
//! skipped by the table reader) come two scalar rows, `runs` (repeated
//! measurements per grid size) and `num_grid_values` (distinct grid sizes),
//! each repeated across the three columns with only column 0 meaningful.
//! Then `num_grid_values` contiguous blocks of `runs + 1` rows follow: the
//! block's first row carries the grid size, the remaining `runs` rows carry
//! one (Thomas, Thomas-special, LU) sample each, in seconds.
//!
//! The LU column uses `-1` as a "not computed for this grid size" sentinel.
//! The producer writes the sentinel for a whole block or not at all, so the
//! block mean of an uncomputed grid size is exactly `-1`; that mean is mapped
//! to NaN so renderers drop the point instead of plotting a fake timing.

use crate::error::VizError;
use crate::table::Table;
use crate::utils::mean;

/// Aggregated timings for one grid size: the mean of each algorithm's `runs`
/// samples. `lu` is NaN when LU was not computed for this grid size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingEntry {
    pub grid_size: u64,
    pub thomas: f64,
    pub thomas_special: f64,
    pub lu: f64,
}

/// Decoded timing file: the two header scalars plus one aggregated entry per
/// grid size, in block (file) order.
#[derive(Clone, Debug)]
pub struct TimingReport {
    pub runs: usize,
    pub num_grid_values: usize,
    pub entries: Vec<TimingEntry>,
}

/// LU sentinel for "not computed" samples.
const NOT_COMPUTED: f64 = -1.0;

/// Column order in the timing file.
const COL_THOMAS: usize = 0;
const COL_THOMAS_SPECIAL: usize = 1;
const COL_LU: usize = 2;

/// Decode a timing table (header line already stripped) and reduce each
/// block to per-algorithm means.
///
/// Fails with a `Format` error when a header scalar is non-positive or
/// non-integral, when the row count does not match
/// `2 + num_grid_values * (runs + 1)`, or when a block mixes `-1` sentinels
/// with real LU samples.
pub fn parse_timing(table: &Table) -> Result<TimingReport, VizError> {
    table.expect_shape(3)?;
    if table.nrows() < 2 {
        return Err(VizError::format(
            table.path(),
            format!("expected 2 header scalar rows, got {}", table.nrows()),
        ));
    }

    let runs = header_scalar(table, 0, "runs")?;
    let num_grid_values = header_scalar(table, 1, "num_grid_values")?;

    // the row-count formula must not overflow before the shape check runs
    let expected_rows = runs
        .checked_add(1)
        .and_then(|block| num_grid_values.checked_mul(block))
        .and_then(|n| n.checked_add(2))
        .ok_or_else(|| {
            VizError::format(
                table.path(),
                format!(
                    "header scalars too large: {num_grid_values} blocks of {runs} runs overflow the row count"
                ),
            )
        })?;
    if table.nrows() != expected_rows {
        return Err(VizError::format(
            table.path(),
            format!(
                "expected {expected_rows} rows (2 + {num_grid_values} blocks of {} rows), got {}",
                runs + 1,
                table.nrows()
            ),
        ));
    }

    let mut entries = Vec::with_capacity(num_grid_values);
    for i in 0..num_grid_values {
        let start = 2 + i * (runs + 1);
        let block = table.slice(start, start + runs + 1);
        let grid_size = block[0][0].trunc() as u64;
        let samples = &block[1..];

        let col = |j: usize| samples.iter().map(|r| r[j]).collect::<Vec<f64>>();
        let lu_samples = col(COL_LU);
        let sentinels = lu_samples.iter().filter(|&&v| v == NOT_COMPUTED).count();
        if sentinels != 0 && sentinels != runs {
            return Err(VizError::format(
                table.path(),
                format!(
                    "grid size {grid_size}: mixed LU sentinel ({sentinels} of {runs} samples are -1)"
                ),
            ));
        }

        // Means over the raw samples; only afterwards is the LU sentinel
        // mean mapped to NaN.
        let mut lu = mean(&lu_samples);
        if lu == NOT_COMPUTED {
            lu = f64::NAN;
        }
        entries.push(TimingEntry {
            grid_size,
            thomas: mean(&col(COL_THOMAS)),
            thomas_special: mean(&col(COL_THOMAS_SPECIAL)),
            lu,
        });
    }

    Ok(TimingReport {
        runs,
        num_grid_values,
        entries,
    })
}

/// Read a positive integral header scalar from column 0 of `row`.
fn header_scalar(table: &Table, row: usize, name: &str) -> Result<usize, VizError> {
    let v = table.row(row)[0];
    if v <= 0.0 || v.fract() != 0.0 {
        return Err(VizError::format(
            table.path(),
            format!("header scalar {name} must be a positive integer, got {v}"),
        ));
    }
    Ok(v as usize)
}
