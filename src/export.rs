use std::ops::Range;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;

use crate::color::TraceColors;
use crate::data::model::{RunLogs, Series};
use crate::ui::{figure_pixels, Panel};

/// Font family every caption and label is drawn with.
pub const FONT_FAMILY: &str = "sans-serif";

// ---------------------------------------------------------------------------
// Headless rendering
// ---------------------------------------------------------------------------

/// Draw the two-row mosaic into a PNG file instead of opening a window.
///
/// The figure is rendered in memory first; the file is only created once
/// every panel has been drawn.
pub fn save_png(run: &RunLogs, path: &Path) -> Result<()> {
    save_png_with_font(run, path, FONT_FAMILY)
}

fn save_png_with_font(run: &RunLogs, path: &Path, font: &str) -> Result<()> {
    let pixels = render_rgb(run, font)?;
    let (width, height) = figure_pixels();

    image::save_buffer_with_format(
        path,
        &pixels,
        width,
        height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("writing {}", path.display()))?;

    log::info!("Saved run {} to {}", run.index, path.display());
    Ok(())
}

/// Render the mosaic into a packed RGB buffer of `figure_pixels()` size.
pub fn render_rgb(run: &RunLogs, font: &str) -> Result<Vec<u8>> {
    register_embedded_font()?;

    let colors = TraceColors::new(run.energy.n_columns(), run.victories.n_columns());
    let (width, height) = figure_pixels();
    let mut pixels = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;
        let areas = root.split_evenly((Panel::ALL.len(), 1));

        for (panel, area) in Panel::ALL.into_iter().zip(areas.iter()) {
            draw_panel(area, panel, font, panel.series(run), panel.colors(&colors))
                .with_context(|| format!("drawing panel '{}'", panel.key()))?;
        }

        root.present()?;
    }

    Ok(pixels)
}

/// Make `FONT_FAMILY` resolvable without any system fonts.
fn register_embedded_font() -> Result<()> {
    plotters::style::register_font(
        FONT_FAMILY,
        FontStyle::Normal,
        epaint_default_fonts::UBUNTU_LIGHT,
    )
    .map_err(|_| anyhow!("embedded font could not be parsed"))
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    panel: Panel,
    font: &str,
    series: &Series,
    colors: &[[u8; 3]],
) -> Result<()> {
    let (x_range, y_range) = axis_ranges(series);

    let mut chart = ChartBuilder::on(area)
        .caption(panel.title(), (font, 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .label_style((font, 12))
        .axis_desc_style((font, 14))
        .x_desc("T")
        .draw()?;

    for (trace, &[r, g, b]) in panel_traces(series).into_iter().zip(colors.iter().cycle()) {
        chart.draw_series(LineSeries::new(trace, RGBColor(r, g, b)))?;
    }

    Ok(())
}

/// The lines drawn in one panel: one per column, non-finite values left out.
pub fn panel_traces(series: &Series) -> Vec<Vec<(f64, f64)>> {
    (0..series.n_columns())
        .map(|column| {
            series
                .points(column)
                .into_iter()
                .filter(|&[_, y]| y.is_finite())
                .map(|[x, y]| (x, y))
                .collect()
        })
        .collect()
}

/// Axis extents for one panel.
///
/// x spans every position (at least `0..1`); y spans the finite values padded
/// by 5 %. A flat series is centred in a unit band, an empty one gets `0..1`.
pub fn axis_ranges(series: &Series) -> (Range<f64>, Range<f64>) {
    let x_max = series.len().saturating_sub(1).max(1) as f64;
    let y = match series.value_range() {
        Some((lo, hi)) if hi > lo => {
            let pad = (hi - lo) * 0.05;
            (lo - pad)..(hi + pad)
        }
        Some((v, _)) => (v - 0.5)..(v + 0.5),
        None => 0.0..1.0,
    };
    (0.0..x_max, y)
}
