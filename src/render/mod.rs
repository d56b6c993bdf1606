//! Read-only snapshots for renderers
//!
//! Converts a [`Grid`] into engine-agnostic pixel data or a text view. These
//! functions only read the grid, so they are safe to call from a
//! [`ProgressObserver`](crate::pipeline::ProgressObserver) between phases.

mod colors;

pub use colors::{CellColor, CellPalette, ClassicPalette, CustomPalette};

use crate::grid::Grid;

/// One RGBA color per cell, row-major
///
/// Row 0 is the top of the map. Engines with a bottom-left texture origin
/// should flip rows when uploading.
pub fn render_rgba<P>(grid: &Grid, palette: &P) -> Vec<CellColor>
where
    P: CellPalette + ?Sized,
{
    grid.cells().iter().map(|&s| palette.color(s)).collect()
}

/// RGBA bytes (4 per cell), row-major, ready for an 8-bit texture upload
pub fn render_rgba8<P>(grid: &Grid, palette: &P) -> Vec<u8>
where
    P: CellPalette + ?Sized,
{
    render_rgba(grid, palette)
        .into_iter()
        .flat_map(|color| color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8))
        .collect()
}

/// Text view of the grid, one line per row
///
/// `#` wall, `.` open, `~` filled, `@` spawn, `*` marker.
///
/// # Example
///
/// ```
/// use cellular_caves::{render_ascii, CellState, Grid, IVec2};
///
/// let mut grid = Grid::new(3, 2, CellState::Open);
/// grid.set(IVec2::new(0, 0), CellState::Wall);
/// grid.set(IVec2::new(2, 1), CellState::Spawn);
///
/// assert_eq!(render_ascii(&grid), "#..\n..@\n");
/// ```
pub fn render_ascii(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.len() + grid.height());
    for row in grid.cells().chunks(grid.width().max(1)) {
        out.extend(row.iter().map(|s| s.glyph()));
        out.push('\n');
    }
    out
}
