//! Connected cave labeling
//!
//! Partitions open space into maximal 4-connected caves with an iterative
//! flood fill, then keeps only the largest one.
//!
//! # States
//!
//! - [`flood_fill`] reads `Open`, writes `Filled` during the traversal and
//!   writes `Open` back before returning
//! - [`label_all`] therefore leaves the grid content unchanged
//! - [`cull_minor_caves`] writes `Wall` over every cave but the kept one

use glam::IVec2;

use crate::cell::CellState;
use crate::error::{CaveError, Result};
use crate::grid::Grid;

/// Orthogonal offsets used for cave connectivity
pub const VON_NEUMANN_OFFSETS: [IVec2; 4] = [
    IVec2::new(1, 0),
    IVec2::new(-1, 0),
    IVec2::new(0, 1),
    IVec2::new(0, -1),
];

/// A maximal 4-connected region of open cells
///
/// Cells are stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cave {
    cells: Vec<IVec2>,
}

impl Cave {
    /// Number of cells in this cave
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the cave has no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells of this cave, row-major
    #[inline]
    pub fn cells(&self) -> &[IVec2] {
        &self.cells
    }

    /// Check if a coordinate belongs to this cave
    pub fn contains(&self, pos: IVec2) -> bool {
        self.cells
            .binary_search_by_key(&(pos.y, pos.x), |c| (c.y, c.x))
            .is_ok()
    }

    /// Consume the cave, returning its cells
    pub fn into_cells(self) -> Vec<IVec2> {
        self.cells
    }
}

/// Collect the cave containing `start`
///
/// Uses an explicit stack, so memory grows with the cave size rather than
/// with call depth. Returns an empty cave if `start` is not `Open`.
pub fn flood_fill(grid: &mut Grid, start: IVec2) -> Cave {
    if grid.get(start) != CellState::Open {
        return Cave::default();
    }

    let mut cells = Vec::new();
    let mut stack = vec![start];
    grid.set(start, CellState::Filled);

    while let Some(pos) = stack.pop() {
        cells.push(pos);
        for offset in VON_NEUMANN_OFFSETS {
            let next = pos + offset;
            // get() reads out-of-bounds as Wall, so set() stays in bounds
            if grid.get(next) == CellState::Open {
                grid.set(next, CellState::Filled);
                stack.push(next);
            }
        }
    }

    for &pos in &cells {
        grid.set(pos, CellState::Open);
    }

    cells.sort_unstable_by_key(|c| (c.y, c.x));
    Cave { cells }
}

/// Label every cave in the grid
///
/// Caves are returned in the row-major order of their first cell. Every
/// open cell lands in exactly one cave; walls land in none.
///
/// # Example
///
/// ```
/// use cellular_caves::{label_all, CellState, Grid, IVec2};
///
/// let mut grid = Grid::new(5, 1, CellState::Open);
/// grid.set(IVec2::new(2, 0), CellState::Wall);
///
/// let caves = label_all(&mut grid);
/// assert_eq!(caves.len(), 2);
/// assert_eq!(caves[0].len(), 2);
/// assert_eq!(caves[1].len(), 2);
/// ```
pub fn label_all(grid: &mut Grid) -> Vec<Cave> {
    let mut assigned = vec![false; grid.len()];
    let mut caves = Vec::new();

    for index in 0..grid.len() {
        let pos = grid.position_of(index);
        if assigned[index] || grid.get(pos) != CellState::Open {
            continue;
        }

        let cave = flood_fill(grid, pos);
        for &cell in cave.cells() {
            if let Some(i) = grid.index_of(cell) {
                assigned[i] = true;
            }
        }
        caves.push(cave);
    }

    caves
}

/// Index of the largest cave; the first one wins ties
pub fn dominant_cave_index(caves: &[Cave]) -> Option<usize> {
    caves
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, usize)>, (i, cave)| match best {
            Some((_, len)) if len >= cave.len() => best,
            _ => Some((i, cave.len())),
        })
        .map(|(i, _)| i)
}

/// Wall over every cave except `caves[keep]`
///
/// Returns the number of cells converted.
pub fn cull_minor_caves(grid: &mut Grid, caves: &[Cave], keep: usize) -> usize {
    let mut culled = 0;
    for (i, cave) in caves.iter().enumerate() {
        if i == keep {
            continue;
        }
        for &pos in cave.cells() {
            grid.set(pos, CellState::Wall);
        }
        culled += cave.len();
    }
    culled
}

/// Keep only the largest cave, returning it
///
/// # Errors
///
/// Returns `EmptyMap` if `caves` is empty (no open cells existed)
pub fn select_dominant(grid: &mut Grid, mut caves: Vec<Cave>) -> Result<Cave> {
    let keep = dominant_cave_index(&caves).ok_or(CaveError::EmptyMap)?;
    cull_minor_caves(grid, &caves, keep);
    Ok(caves.swap_remove(keep))
}
