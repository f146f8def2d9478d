//! Chart rendering as an injected capability.
//!
//! Pipelines describe what to draw (`ChartSpec`) and hand it to a
//! `ChartRenderer`; they never talk to a drawing backend directly. The
//! production backend is `PlottersRenderer`; tests use `RecordingRenderer`.

use std::cell::RefCell;

use crate::error::VizError;

pub mod plotters_backend;

pub use plotters_backend::PlottersRenderer;

/// Axis scaling for a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scale {
    Linear,
    LogLog,
}

/// One labeled curve: paired x/y samples in draw order.
///
/// NaN y-values mark intentionally absent points; renderers must skip them
/// without breaking the rest of the curve.
#[derive(Clone, Debug)]
pub struct SeriesSpec {
    pub label: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl SeriesSpec {
    pub fn new(label: impl Into<String>, xs: Vec<f64>, ys: Vec<f64>) -> Self {
        SeriesSpec {
            label: label.into(),
            xs,
            ys,
        }
    }

    /// Contiguous runs of points where both coordinates are finite.
    ///
    /// Each run can be drawn as one polyline; NaN points fall in the gaps.
    pub fn finite_segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();
        for (&x, &y) in self.xs.iter().zip(self.ys.iter()) {
            if x.is_finite() && y.is_finite() {
                current.push((x, y));
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

/// A complete chart description: title, axes, scale, curves, and optional
/// emphasized points. All curves on one chart share axes.
#[derive(Clone, Debug)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub scale: Scale,
    pub series: Vec<SeriesSpec>,
    pub highlights: Vec<(f64, f64)>,
}

/// Something that can materialize a chart.
///
/// `render` is synchronous: it returns only once the chart is fully
/// materialized, so callers may rely on chart N being complete before they
/// move on to chart N+1.
pub trait ChartRenderer {
    fn render(&self, chart: &ChartSpec) -> Result<(), VizError>;
}

/// Test renderer: records every chart it is asked to draw.
#[derive(Default)]
pub struct RecordingRenderer {
    charts: RefCell<Vec<ChartSpec>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn charts(&self) -> Vec<ChartSpec> {
        self.charts.borrow().clone()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render(&self, chart: &ChartSpec) -> Result<(), VizError> {
        self.charts.borrow_mut().push(chart.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_segments_split_on_nan() {
        let s = SeriesSpec::new(
            "lu",
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![0.1, f64::NAN, 0.3, 0.4, f64::NAN],
        );
        let segs = s.finite_segments();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0], vec![(1.0, 0.1)]);
        assert_eq!(segs[1], vec![(3.0, 0.3), (4.0, 0.4)]);
    }

    #[test]
    fn finite_segments_of_clean_series_is_one_run() {
        let s = SeriesSpec::new("t", vec![1.0, 2.0], vec![3.0, 4.0]);
        assert_eq!(s.finite_segments().len(), 1);
    }

    #[test]
    fn recording_renderer_keeps_order() {
        let r = RecordingRenderer::new();
        for title in ["a", "b"] {
            r.render(&ChartSpec {
                title: title.to_string(),
                x_label: String::new(),
                y_label: String::new(),
                scale: Scale::Linear,
                series: vec![],
                highlights: vec![],
            })
            .unwrap();
        }
        let charts = r.charts();
        assert_eq!(charts[0].title, "a");
        assert_eq!(charts[1].title, "b");
    }
}
