// src/rasterizer.rs

//! Samples each polynomial across the grid and marks the cells it covers.
//!
//! The coordinate system is shared by every curve: origin at the grid
//! center, x growing rightward, and the computed value flipped around the
//! vertical center so larger values sit higher on the grid. Consecutive
//! samples are joined with a vertical run so a slope steeper than one row
//! per column stays connected instead of degrading into isolated dots.

use log::trace;

use crate::graph::{Graph, Grid};
use crate::poly::Polynomial;

/// Rasterizes every polynomial in the store onto its grid.
pub fn draw(graph: &mut Graph) {
    let dx = graph.grid.cols() as f64 / 2.0;
    let dy = graph.grid.rows() as f64 / 2.0;

    for poly in &graph.polynomials {
        draw_curve(poly, &mut graph.grid, dx, dy);
    }
}

/// Draws one curve, column by column.
fn draw_curve(poly: &Polynomial, grid: &mut Grid, dx: f64, dy: f64) {
    let mut last_row: Option<usize> = None;

    for col in 0..grid.cols() {
        let value = poly.eval(col as f64 - dx);
        let Some(row) = target_row(dy, value, grid.rows()) else {
            // Off-grid sample: skip the column but keep the last visible
            // row, so the curve reconnects where it re-enters the grid.
            trace!("column {} off-grid (value {})", col, value);
            continue;
        };

        match last_row {
            Some(last) => {
                for run_row in row.min(last)..row.max(last) {
                    grid.mark(run_row, col);
                }
                grid.mark(row, col);
            }
            None => grid.mark(row, col),
        }
        last_row = Some(row);
    }
}

/// Maps a sample value to a grid row, or `None` when the sample falls
/// outside the vertical extent.
///
/// The row is computed as a signed integer and range-checked before any
/// conversion to the index type; a negative result must never wrap into a
/// large index. Non-finite samples are off-grid by definition.
fn target_row(dy: f64, value: f64, rows: usize) -> Option<usize> {
    if !value.is_finite() {
        return None;
    }
    let row = (dy - value) as i64;
    if (0..rows as i64).contains(&row) {
        Some(row as usize)
    } else {
        None
    }
}
