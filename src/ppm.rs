// src/ppm.rs

//! Plain-text PPM (P3) image output.
//!
//! Serializes the occupancy grid as one header line followed by one line
//! per row of `R G B` channel triples, foreground for occupied cells and
//! background for everything else.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::color::Color;
use crate::graph::Grid;

/// Maximum channel value declared in the header.
const MAX_CHANNEL: u32 = 255;

/// Writes the grid to `path`. Failure to create the file is reported with
/// the path; write failures propagate as plain I/O errors.
pub fn write_image(path: &Path, grid: &Grid, foreground: Color, background: Color) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("could not write '{}'", path.display()))?;
    let mut out = BufWriter::new(file);
    render(&mut out, grid, foreground, background)?;
    out.flush()?;

    info!(
        "wrote {}x{} image to '{}'",
        grid.cols(),
        grid.rows(),
        path.display()
    );
    Ok(())
}

/// Serializes the pixel rows to `out`. Split from the file handling so
/// tests can render into a buffer.
fn render(
    out: &mut impl Write,
    grid: &Grid,
    foreground: Color,
    background: Color,
) -> io::Result<()> {
    writeln!(out, "P3 {} {} {}", grid.cols(), grid.rows(), MAX_CHANNEL)?;

    for row in 0..grid.rows() {
        for &occupied in grid.row(row) {
            let [r, g, b] = if occupied {
                foreground.channels()
            } else {
                background.channels()
            };
            write!(out, "{} {} {} ", r, g, b)?;
        }
        writeln!(out)?;
    }

    Ok(())
}
