use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::core::simulator::Trajectory;
use crate::core::window::PlotWindow;
use crate::error::{Result, SimulationError};

const CHART_SIZE_PX: (u32, u32) = (960, 600);
const SERIES_COLORS: [RGBColor; 4] = [BLUE, RED, GREEN, MAGENTA];

/// One labelled curve on the chart.
pub struct ChartSeries<'a> {
    pub label: &'a str,
    pub trajectory: &'a Trajectory,
}

fn render_error<E: std::fmt::Display>(err: E) -> SimulationError {
    SimulationError::Render(err.to_string())
}

/// Window that fits every series, so overlaid runs share one scale.
pub fn combined_window(series: &[ChartSeries<'_>]) -> PlotWindow {
    let (max_x, max_y) = series.iter().fold((0.0f64, 0.0f64), |(mx, my), s| {
        (
            mx.max(s.trajectory.max_range()),
            my.max(s.trajectory.max_height()),
        )
    });
    PlotWindow::from_extent(max_x, max_y)
}

/// Draws height against distance for each series and writes an SVG file.
pub fn render_svg(path: &Path, series: &[ChartSeries<'_>]) -> Result<()> {
    draw_chart(path, series, true)
}

/// Like [`render_svg`] but draws only the curves: no caption, axis labels or
/// legend, so no font lookup is needed.
pub fn render_svg_curves(path: &Path, series: &[ChartSeries<'_>]) -> Result<()> {
    draw_chart(path, series, false)
}

fn draw_chart(path: &Path, series: &[ChartSeries<'_>], annotated: bool) -> Result<()> {
    let window = combined_window(series);
    let root = SVGBackend::new(path, CHART_SIZE_PX).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(12);
    if annotated {
        builder
            .caption("Projectile Motion", ("sans-serif", 28))
            .x_label_area_size(40)
            .y_label_area_size(50);
    }
    let mut chart = builder
        .build_cartesian_2d(0.0..window.max_x_m, 0.0..window.max_y_m)
        .map_err(render_error)?;

    if annotated {
        chart
            .configure_mesh()
            .x_desc("Distance (m)")
            .y_desc("Height (m)")
            .draw()
            .map_err(render_error)?;
    }

    for (idx, s) in series.iter().enumerate() {
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
        let points = s.trajectory.samples().map(|p| (p.x_m, p.y_m.max(0.0)));
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(render_error)?
            .label(s.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    if annotated {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_error)?;
    }

    root.present().map_err(render_error)?;
    info!(path = %path.display(), series = series.len(), annotated, "chart written");
    Ok(())
}
