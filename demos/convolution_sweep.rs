//! Animated decay-factor sweep.
//!
//! Sweeps the decay factor a from 0 toward 1 across 180 frames, recomputing
//! x[n], h[n] and y[n] per frame, and exports the three stem plots as an
//! animated GIF. Frames are rendered sequentially; export blocks until the
//! whole animation is written.

mod common;

use anyhow::Result;
use convolvulus::SweepConfig;
use plotters::prelude::*;

// 10 ms per frame = 100 fps in the exported GIF
const FRAME_DELAY_MS: u32 = 10;
// Export the animation as a .gif at runtime? (true/false)
const SAVE_GIF: bool = true;
const OUTPUT_FILE: &str = "convolution_sweep.gif";

fn main() -> Result<()> {
    if !SAVE_GIF {
        println!("No actions specified,");
        println!("please set SAVE_GIF to true to export the animation.");
        return Ok(());
    }

    let config = SweepConfig::default();
    println!(
        "Please wait, generating {OUTPUT_FILE} ({} frames)...",
        config.frame_count
    );

    let root =
        BitMapBackend::gif(OUTPUT_FILE, (1000, 800), FRAME_DELAY_MS)?.into_drawing_area();
    for frame in config.frames() {
        root.fill(&WHITE)?;
        let panels = root.split_evenly((3, 1));
        common::draw_stem_panel(
            &panels[0],
            &format!(
                "a = {:.3}, N = {}    Input Signal x[n] = {:.3}^n u[n]",
                frame.a, config.pulse_width, frame.a
            ),
            &frame.x,
            &BLUE,
        )?;
        common::draw_stem_panel(
            &panels[1],
            &format!("Impulse Response h[n] = u[n] - u[n-{}]", config.pulse_width),
            &frame.h,
            &RED,
        )?;
        common::draw_stem_panel(
            &panels[2],
            "Output y[n] = x[n] * h[n] (Convolution)",
            &frame.y,
            &MAGENTA,
        )?;
        root.present()?;
    }

    println!("Saved {OUTPUT_FILE}");
    Ok(())
}
