//! Plots the test metrics of a depth sweep.
use plotters::prelude::*;

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use super::depth_results::{read_depth_results, DepthResult};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;


/// Draw test accuracy and test F1 against depth for the results in
/// `results_file` and write the plot next to it as an SVG file.
/// Returns the path of the plot.
pub fn plot_statistics<P: AsRef<Path>>(results_file: P) -> Result<PathBuf> {
    let results_file = results_file.as_ref();
    let results = read_depth_results(results_file)?;
    if results.is_empty() {
        return Err(Error::Plot(format!(
            "{} holds no result", results_file.display()
        )));
    }

    let output = results_file.with_extension("svg");
    let caption = results_file.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(".results.txt"))
        .unwrap_or("depth sweep")
        .to_string();

    draw(&output, &caption, &results)
        .map_err(|e| Error::Plot(e.to_string()))?;
    Ok(output)
}


fn draw(output: &Path, caption: &str, results: &[DepthResult])
    -> std::result::Result<(), Box<dyn std::error::Error>>
{
    let min_depth = results.iter().map(|r| r.depth).min().unwrap_or(0);
    let max_depth = results.iter().map(|r| r.depth).max().unwrap_or(0)
        .max(min_depth + 1);

    let root = SVGBackend::new(output, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(min_depth as f64..max_depth as f64, 0f64..1f64)?;

    chart.configure_mesh()
        .x_desc("Depth")
        .y_desc("Score")
        .draw()?;

    let accuracy = results.iter().map(|r| (r.depth as f64, r.accuracy));
    chart.draw_series(LineSeries::new(accuracy, &BLUE))?
        .label("Test accuracy")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    let f1 = results.iter().map(|r| (r.depth as f64, r.f1_score));
    chart.draw_series(LineSeries::new(f1, &RED))?
        .label("Test F1")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
