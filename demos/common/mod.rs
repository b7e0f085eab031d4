//! Shared stem-plot helpers for the demo programs.

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Draws one titled stem-plot panel onto a drawing area.
///
/// Each sample is rendered as a vertical line from the baseline plus a filled
/// marker, the discrete-time equivalent of a line plot. The vertical axis is
/// scaled to the panel's own maximum so short pulses and tall convolution
/// outputs both stay readable.
pub fn draw_stem_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    title: &str,
    values: &[f64],
    color: &RGBColor,
) -> Result<()> {
    let x_max = values.len().max(1) as f64;
    let y_max = values.iter().copied().fold(1.0_f64, f64::max) * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(8)
        .x_label_area_size(28)
        .y_label_area_size(44)
        .build_cartesian_2d(-0.5..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("n")
        .y_desc("Amplitude")
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(n, &v)| {
        PathElement::new(vec![(n as f64, 0.0), (n as f64, v)], color.stroke_width(1))
    }))?;
    chart.draw_series(
        values
            .iter()
            .enumerate()
            .map(|(n, &v)| Circle::new((n as f64, v), 3, color.filled())),
    )?;

    Ok(())
}
