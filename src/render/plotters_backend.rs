//! Plotters-backed chart renderer.
//!
//! Draws each chart into its own PNG under the configured output directory.
//! The call is synchronous: when `render` returns, the image is on disk.

use std::path::{Path, PathBuf};

use plotters::coord::CoordTranslate;
use plotters::prelude::IntoLogRange;
use plotters::prelude::*;

use crate::error::VizError;
use crate::render::{ChartRenderer, ChartSpec, Scale};

const CHART_SIZE: (u32, u32) = (1000, 800);

/// Renders charts as PNG files via the plotters bitmap backend.
pub struct PlottersRenderer {
    out_dir: PathBuf,
}

impl PlottersRenderer {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        PlottersRenderer {
            out_dir: out_dir.into(),
        }
    }

    /// Where a chart with this title lands on disk.
    pub fn chart_path(&self, title: &str) -> PathBuf {
        self.out_dir.join(format!("{}.png", slug(title)))
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render(&self, chart: &ChartSpec) -> Result<(), VizError> {
        std::fs::create_dir_all(&self.out_dir).map_err(|e| {
            VizError::Render(format!("cannot create {}: {e}", self.out_dir.display()))
        })?;
        let path = self.chart_path(&chart.title);
        draw_chart(&path, chart)?;
        Ok(())
    }
}

/// Derive a file stem from a chart title.
fn slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}

fn rerr(e: impl std::fmt::Display) -> VizError {
    VizError::Render(e.to_string())
}

/// Data bounds over every finite point in the chart (curves and highlights).
fn bounds(spec: &ChartSpec) -> Option<((f64, f64), (f64, f64))> {
    let mut x = (f64::INFINITY, f64::NEG_INFINITY);
    let mut y = (f64::INFINITY, f64::NEG_INFINITY);
    let points = spec
        .series
        .iter()
        .flat_map(|s| s.xs.iter().copied().zip(s.ys.iter().copied()))
        .chain(spec.highlights.iter().copied());
    for (px, py) in points {
        if px.is_finite() && py.is_finite() {
            x = (x.0.min(px), x.1.max(px));
            y = (y.0.min(py), y.1.max(py));
        }
    }
    if x.0.is_finite() { Some((x, y)) } else { None }
}

fn draw_chart(path: &Path, spec: &ChartSpec) -> Result<(), VizError> {
    let ((x_min, x_max), (y_min, y_max)) = bounds(spec)
        .ok_or_else(|| VizError::Render(format!("{}: no finite points to draw", spec.title)))?;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(rerr)?;

    match spec.scale {
        Scale::LogLog => {
            // log axes need strictly positive ranges
            let x_lo = if x_min > 0.0 { x_min / 1.5 } else { 1e-12 };
            let y_lo = if y_min > 0.0 { y_min / 1.5 } else { 1e-12 };
            let mut chart = ChartBuilder::on(&root)
                .caption(&spec.title, ("sans-serif", 30))
                .margin(15)
                .set_label_area_size(LabelAreaPosition::Left, 70)
                .set_label_area_size(LabelAreaPosition::Bottom, 45)
                .build_cartesian_2d(
                    (x_lo..x_max * 1.5).log_scale(),
                    (y_lo..y_max * 1.5).log_scale(),
                )
                .map_err(rerr)?;
            chart
                .configure_mesh()
                .x_desc(spec.x_label.as_str())
                .y_desc(spec.y_label.as_str())
                .draw()
                .map_err(rerr)?;
            draw_curves(&mut chart, spec)?;
        }
        Scale::Linear => {
            let x_pad = pad(x_min, x_max);
            let y_pad = pad(y_min, y_max);
            let mut chart = ChartBuilder::on(&root)
                .caption(&spec.title, ("sans-serif", 30))
                .margin(15)
                .set_label_area_size(LabelAreaPosition::Left, 70)
                .set_label_area_size(LabelAreaPosition::Bottom, 45)
                .build_cartesian_2d(x_min - x_pad..x_max + x_pad, y_min - y_pad..y_max + y_pad)
                .map_err(rerr)?;
            chart
                .configure_mesh()
                .x_desc(spec.x_label.as_str())
                .y_desc(spec.y_label.as_str())
                .draw()
                .map_err(rerr)?;
            draw_curves(&mut chart, spec)?;
        }
    }

    root.present().map_err(rerr)?;
    Ok(())
}

/// 5% range padding, falling back to a unit pad for degenerate ranges.
fn pad(lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    if span > 0.0 { span * 0.05 } else { 1.0 }
}

/// Draw every curve (NaN points skipped, samples marked), the highlight
/// points, and the legend.
fn draw_curves<'a, DB, CT>(
    chart: &mut ChartContext<'a, DB, CT>,
    spec: &ChartSpec,
) -> Result<(), VizError>
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: std::error::Error + Send + Sync + 'static,
    CT: CoordTranslate<From = (f64, f64)>,
{
    for (idx, series) in spec.series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let mut labeled = false;
        for segment in series.finite_segments() {
            let anno = chart
                .draw_series(LineSeries::new(
                    segment,
                    ShapeStyle::from(&color).stroke_width(2),
                ))
                .map_err(rerr)?;
            if !labeled {
                anno.label(series.label.clone()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], ShapeStyle::from(&color))
                });
                labeled = true;
            }
        }
        // sample markers, matplotlib "-o" style
        let markers = series
            .xs
            .iter()
            .zip(series.ys.iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|(&x, &y)| Circle::new((x, y), 3, color.filled()))
            .collect::<Vec<_>>();
        chart.draw_series(markers).map_err(rerr)?;
    }

    for &point in &spec.highlights {
        chart
            .draw_series(std::iter::once(Circle::new(point, 5, RED.filled())))
            .map_err(rerr)?;
    }

    if spec.series.iter().any(|s| !s.label.is_empty()) {
        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .draw()
            .map_err(rerr)?;
    }
    Ok(())
}
