//! Static three-panel convolution plot.
//!
//! Computes y[n] = x[n] * h[n] for x[n] = 0.7^n u[n] and a pulse of width 10
//! over a 30-sample window, renders the three stem plots to a PNG and writes
//! a snapshot of the arrays next to it.

mod common;

use anyhow::{Result, ensure};
use convolvulus::{Snapshot, convolve, generate_h, generate_x};
use plotters::prelude::*;

const DECAY: f64 = 0.7;
const PULSE_WIDTH: usize = 10;
const WINDOW: usize = 30;
const PLOT_FILE: &str = "convolution.png";
const SNAPSHOT_FILE: &str = "conv_results.json";

fn main() -> Result<()> {
    let x_n = generate_x(DECAY, WINDOW);
    let h_n = generate_h(WINDOW, PULSE_WIDTH);
    let y_n = convolve(&x_n, &h_n);

    let snapshot = Snapshot {
        x_n: x_n.clone(),
        h_n: h_n.clone(),
        y_n: y_n.clone(),
    };
    snapshot.save(SNAPSHOT_FILE)?;
    let reloaded = Snapshot::load(SNAPSHOT_FILE)?;
    ensure!(snapshot == reloaded, "snapshot round-trip mismatch");

    let root = BitMapBackend::new(PLOT_FILE, (1000, 800)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((3, 1));
    common::draw_stem_panel(
        &panels[0],
        &format!("Input Signal x[n] = {DECAY}^n u[n]"),
        &x_n,
        &BLUE,
    )?;
    common::draw_stem_panel(
        &panels[1],
        &format!("Impulse Response h[n] = u[n] - u[n-{PULSE_WIDTH}]"),
        &h_n,
        &GREEN,
    )?;
    common::draw_stem_panel(
        &panels[2],
        "Output y[n] = x[n] * h[n] (Convolution)",
        &y_n,
        &RED,
    )?;
    root.present()?;

    println!("Plot written to {PLOT_FILE}, snapshot to {SNAPSHOT_FILE}");
    Ok(())
}
