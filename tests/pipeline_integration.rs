//! End-to-end pipeline tests over a full fixture result set, using the
//! recording renderer in place of a drawing backend.

use std::fmt::Write as _;
use std::path::Path;

use solvis::config::{AnalysisOptions, ALGORITHMS};
use solvis::pipeline;
use solvis::render::{RecordingRenderer, Scale};
use solvis::VizError;

/// Write the full set of result files the benchmark suite produces:
/// nine function-value files, three error files, and the timing file.
fn write_result_set(dir: &Path) {
    let opts = AnalysisOptions::in_dir(dir);

    for algorithm in &ALGORITHMS {
        for &resolution in &[10u32, 100, 1000] {
            let n = resolution as usize + 2;
            let mut text = String::from("U(x) V(x) eps\n");
            for i in 0..n {
                let x = i as f64 / (n - 1) as f64;
                let exact = x * (1.0 - x);
                writeln!(text, "{exact} {} 1e-6", exact + 1e-6).unwrap();
            }
            std::fs::write(opts.values_path(algorithm, resolution), text).unwrap();
        }

        let mut text = String::new();
        for n in [5.0f64, 10.0, 50.0, 100.0, 500.0, 1000.0] {
            writeln!(text, "{n} {}", 1.0 / n).unwrap();
        }
        std::fs::write(opts.error_path(algorithm), text).unwrap();
    }

    let timing = "thomas thomas_special LU\n\
                  2 2 2\n\
                  2 2 2\n\
                  10 10 10\n\
                  0.1 0.05 -1\n\
                  0.1 0.05 -1\n\
                  100 100 100\n\
                  0.2 0.1 0.3\n\
                  0.2 0.1 0.3\n";
    std::fs::write(opts.timing_path(), timing).unwrap();
}

fn run_all(opts: &AnalysisOptions, renderer: &RecordingRenderer) -> Result<(), VizError> {
    pipeline::function_values::run(opts, renderer)?;
    pipeline::errors::run(opts, renderer)?;
    pipeline::timings::run(opts, renderer)
}

/// All three pipelines over a complete result set: seven charts, in order.
#[test]
fn full_run_renders_seven_charts_in_order() {
    let dir = tempfile::tempdir().unwrap();
    write_result_set(dir.path());
    let opts = AnalysisOptions::in_dir(dir.path());
    let renderer = RecordingRenderer::new();

    run_all(&opts, &renderer).unwrap();
    let charts = renderer.charts();
    assert_eq!(charts.len(), 7);

    // three function-value charts first, linear scale, four curves each
    // (three resolutions plus the exact overlay)
    for (chart, algorithm) in charts[..3].iter().zip(ALGORITHMS.iter()) {
        assert!(chart.title.contains(algorithm.display), "{}", chart.title);
        assert_eq!(chart.scale, Scale::Linear);
        assert_eq!(chart.series.len(), 4);
        assert_eq!(chart.series[3].label, "exact");
        // legend shows interior point counts
        assert_eq!(chart.series[0].label, "10");
        assert_eq!(chart.series[2].label, "1000");
    }

    // then three error charts, log-log, one curve each with highlights
    for chart in &charts[3..6] {
        assert_eq!(chart.scale, Scale::LogLog);
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.highlights.len(), 3);
    }

    // finally the timing chart
    let timing = &charts[6];
    assert_eq!(timing.title, "Calculation time, mean of 2 runs");
    assert_eq!(timing.scale, Scale::LogLog);
    assert_eq!(timing.series.len(), 3);
}

/// x coordinates of function-value curves are reconstructed over [0, 1].
#[test]
fn function_value_coordinates_span_unit_interval() {
    let dir = tempfile::tempdir().unwrap();
    write_result_set(dir.path());
    let opts = AnalysisOptions::in_dir(dir.path());
    let renderer = RecordingRenderer::new();

    pipeline::function_values::run(&opts, &renderer).unwrap();
    for chart in renderer.charts() {
        for series in &chart.series {
            assert_eq!(*series.xs.first().unwrap(), 0.0);
            assert_eq!(*series.xs.last().unwrap(), 1.0);
            assert_eq!(series.xs.len(), series.ys.len());
        }
    }
}

/// The uncomputed LU grid size reaches the renderer as NaN, never as zero.
#[test]
fn uncomputed_lu_point_is_nan_in_the_rendered_curve() {
    let dir = tempfile::tempdir().unwrap();
    write_result_set(dir.path());
    let opts = AnalysisOptions::in_dir(dir.path());
    let renderer = RecordingRenderer::new();

    pipeline::timings::run(&opts, &renderer).unwrap();
    let charts = renderer.charts();
    let lu = &charts[0].series[2];
    assert_eq!(lu.label, "LU");
    assert!(lu.ys[0].is_nan());
    assert_eq!(lu.ys[1], 0.3);
    // the NaN point is skipped, the rest of the curve survives
    assert_eq!(lu.finite_segments(), vec![vec![(100.0, 0.3)]]);
}

/// Highlight points sit on the curve at the entries closest to the targets.
#[test]
fn error_highlights_lie_on_the_curve() {
    let dir = tempfile::tempdir().unwrap();
    write_result_set(dir.path());
    let opts = AnalysisOptions::in_dir(dir.path());
    let renderer = RecordingRenderer::new();

    pipeline::errors::run(&opts, &renderer).unwrap();
    for chart in renderer.charts() {
        let curve = &chart.series[0];
        for (hx, hy) in &chart.highlights {
            let i = curve.xs.iter().position(|x| x == hx).unwrap();
            assert_eq!(curve.ys[i], *hy);
        }
    }
}

/// A missing input file aborts the run with `MissingFile`.
#[test]
fn missing_timing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let opts = AnalysisOptions::in_dir(dir.path());
    let renderer = RecordingRenderer::new();

    let err = pipeline::timings::run(&opts, &renderer).unwrap_err();
    assert!(matches!(err, VizError::MissingFile { .. }), "{err}");
    assert!(renderer.charts().is_empty());
}
