use solvis::config::AnalysisOptions;
use solvis::error::VizError;
use solvis::pipeline;
use solvis::render::PlottersRenderer;

fn main() -> Result<(), VizError> {
    let opts = AnalysisOptions::default();
    let renderer = PlottersRenderer::new(&opts.plot_dir);

    pipeline::function_values::run(&opts, &renderer)?;
    pipeline::errors::run(&opts, &renderer)?;
    pipeline::timings::run(&opts, &renderer)?;

    println!("Saved charts to {}", opts.plot_dir.display());
    Ok(())
}
