//! Reader for the plain-text numeric tables the solver suite writes.
//!
//! The benchmark programs emit fixed-width, whitespace-separated columns with
//! an optional header line of column names. `read_table` is the single entry
//! point all three loaders sit on: skip the header, parse every remaining
//! non-blank line as a row of f64, and insist the table is rectangular.

use std::path::{Path, PathBuf};

use crate::error::VizError;

/// A rectangular numeric table together with the path it was read from.
///
/// The path is kept so downstream shape checks can report which file was
/// malformed, not just that one was.
#[derive(Clone, Debug)]
pub struct Table {
    path: PathBuf,
    rows: Vec<Vec<f64>>,
}

impl Table {
    /// Build a table from in-memory rows (fixtures and benches).
    ///
    /// All rows must have the same length as the first.
    pub fn from_rows(name: impl Into<PathBuf>, rows: Vec<Vec<f64>>) -> Result<Self, VizError> {
        let path = name.into();
        if let Some(first) = rows.first() {
            let ncols = first.len();
            for (i, row) in rows.iter().enumerate() {
                if row.len() != ncols {
                    return Err(VizError::format(
                        &path,
                        format!("row {i}: expected {ncols} columns, got {}", row.len()),
                    ));
                }
            }
        }
        Ok(Table { path, rows })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Copy out column `j`.
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.rows.iter().map(|r| r[j]).collect()
    }

    /// The rows in `[start, end)` as a sub-slice view.
    pub fn slice(&self, start: usize, end: usize) -> &[Vec<f64>] {
        &self.rows[start..end]
    }

    /// Shape-check helper: error unless the table has exactly `ncols` columns
    /// and at least one data row.
    pub fn expect_shape(&self, ncols: usize) -> Result<(), VizError> {
        if self.rows.is_empty() {
            return Err(VizError::format(&self.path, "no data rows"));
        }
        if self.ncols() != ncols {
            return Err(VizError::format(
                &self.path,
                format!("expected {ncols} columns, got {}", self.ncols()),
            ));
        }
        Ok(())
    }
}

/// Read a whitespace-separated numeric table, skipping `skip_rows` leading
/// lines (header text the producer writes before the numbers).
///
/// Blank lines are ignored. Every remaining line must parse as f64 tokens and
/// carry the same number of tokens as the first data line.
pub fn read_table(path: &Path, skip_rows: usize) -> Result<Table, VizError> {
    let text = std::fs::read_to_string(path).map_err(|source| VizError::MissingFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (lineno, line) in text.lines().enumerate().skip(skip_rows) {
        if line.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for tok in line.split_whitespace() {
            let v: f64 = tok.parse().map_err(|_| {
                VizError::format(path, format!("line {}: bad number {tok:?}", lineno + 1))
            })?;
            row.push(v);
        }
        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(VizError::format(
                    path,
                    format!(
                        "line {}: expected {} columns, got {}",
                        lineno + 1,
                        first.len(),
                        row.len()
                    ),
                ));
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(VizError::format(path, "no data rows"));
    }
    Ok(Table {
        path: path.to_path_buf(),
        rows,
    })
}
