//! Fixed-size 2D cell container
//!
//! The grid owns every cell state of one map. Dimensions are fixed at
//! construction. Reads outside the grid return [`CellState::Wall`]; writes
//! outside the grid are a caller bug (asserted in debug builds, ignored in
//! release builds).

use glam::IVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cell::CellState;
use crate::error::{CaveError, Result};

/// Largest width or height a grid may have (coordinates are `i32`)
pub const MAX_DIMENSION: usize = i32::MAX as usize;

fn cell_count(width: usize, height: usize) -> Result<usize> {
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(CaveError::InvalidConfig(format!(
            "grid {}x{} exceeds the {} cell coordinate limit",
            width, height, MAX_DIMENSION
        )));
    }
    width.checked_mul(height).ok_or_else(|| {
        CaveError::InvalidConfig(format!("grid {}x{} has too many cells", width, height))
    })
}

/// Rectangular grid of cell states stored row-major
///
/// # Example
///
/// ```
/// use cellular_caves::{CellState, Grid, IVec2};
///
/// let mut grid = Grid::new(4, 3, CellState::Open);
/// grid.set(IVec2::new(1, 2), CellState::Wall);
///
/// assert_eq!(grid.get(IVec2::new(1, 2)), CellState::Wall);
/// // Out of bounds always reads as wall
/// assert_eq!(grid.get(IVec2::new(-1, 0)), CellState::Wall);
/// assert_eq!(grid.get(IVec2::new(4, 0)), CellState::Wall);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr", into = "GridRepr"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

/// Unchecked wire form of [`Grid`]; converted through [`Grid::from_cells`]
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct GridRepr {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = CaveError;

    fn try_from(repr: GridRepr) -> Result<Self> {
        Grid::from_cells(repr.width, repr.height, repr.cells)
    }
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(grid: Grid) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
            cells: grid.cells,
        }
    }
}

impl Grid {
    /// Create a grid with every cell set to `fill`
    ///
    /// # Panics
    ///
    /// Panics if either dimension exceeds [`MAX_DIMENSION`] or the cell count
    /// overflows `usize`. Use [`Grid::try_new`] for untrusted sizes.
    pub fn new(width: usize, height: usize, fill: CellState) -> Self {
        match Self::try_new(width, height, fill) {
            Ok(grid) => grid,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create a grid with every cell set to `fill`, checking the dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a dimension exceeds [`MAX_DIMENSION`] or
    /// `width * height` overflows
    pub fn try_new(width: usize, height: usize, fill: CellState) -> Result<Self> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![fill; len],
        })
    }

    /// Build a grid from row-major cells
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the dimensions are out of range or
    /// `cells.len() != width * height`
    pub fn from_cells(width: usize, height: usize, cells: Vec<CellState>) -> Result<Self> {
        let len = cell_count(width, height)?;
        if cells.len() != len {
            return Err(CaveError::InvalidConfig(format!(
                "grid {}x{} needs {} cells (got {})",
                width,
                height,
                len,
                cells.len()
            )));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the grid has no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if a coordinate lies inside the grid
    #[inline]
    pub fn in_bounds(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Row-major storage index of a coordinate, `None` when out of bounds
    #[inline]
    pub fn index_of(&self, pos: IVec2) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.y as usize * self.width + pos.x as usize)
    }

    /// Coordinate of a row-major storage index
    #[inline]
    pub fn position_of(&self, index: usize) -> IVec2 {
        IVec2::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Read a cell; out-of-bounds coordinates read as `Wall`
    #[inline]
    pub fn get(&self, pos: IVec2) -> CellState {
        self.index_of(pos)
            .map(|i| self.cells[i])
            .unwrap_or(CellState::Wall)
    }

    /// Write a cell
    ///
    /// Callers bounds-check first. An out-of-bounds write panics in debug
    /// builds and is dropped in release builds.
    #[inline]
    pub fn set(&mut self, pos: IVec2, state: CellState) {
        debug_assert!(
            self.in_bounds(pos),
            "write outside {}x{} grid at ({}, {})",
            self.width,
            self.height,
            pos.x,
            pos.y
        );
        if let Some(i) = self.index_of(pos) {
            self.cells[i] = state;
        }
    }

    /// All cell states in row-major order
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// All coordinates in row-major order (y outer, x inner)
    pub fn positions(&self) -> impl Iterator<Item = IVec2> + '_ {
        (0..self.len()).map(move |i| self.position_of(i))
    }

    /// Coordinates paired with their states, row-major
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (self.position_of(i), state))
    }

    /// Number of cells in the given state
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Coordinates of every cell in the given state, row-major
    pub fn positions_of(&self, state: CellState) -> Vec<IVec2> {
        self.iter()
            .filter(|&(_, s)| s == state)
            .map(|(pos, _)| pos)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_filled() {
        let grid = Grid::new(5, 3, CellState::Open);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.len(), 15);
        assert_eq!(grid.count(CellState::Open), 15);
    }

    #[test]
    fn test_out_of_bounds_reads_wall() {
        let grid = Grid::new(3, 3, CellState::Open);
        for pos in [
            IVec2::new(-1, 0),
            IVec2::new(0, -1),
            IVec2::new(3, 0),
            IVec2::new(0, 3),
            IVec2::new(i32::MIN, i32::MAX),
        ] {
            assert_eq!(grid.get(pos), CellState::Wall, "pos {:?}", pos);
        }
    }

    #[test]
    fn test_get_returns_last_write() {
        let mut grid = Grid::new(4, 4, CellState::Wall);
        let pos = IVec2::new(2, 1);
        grid.set(pos, CellState::Open);
        grid.set(pos, CellState::Marker);
        assert_eq!(grid.get(pos), CellState::Marker);
        assert_eq!(grid.count(CellState::Marker), 1);
    }

    #[test]
    fn test_no_wrapping() {
        let mut grid = Grid::new(3, 2, CellState::Wall);
        grid.set(IVec2::new(0, 1), CellState::Open);
        // (3, 0) would alias (0, 1) with naive row-major indexing
        assert_eq!(grid.get(IVec2::new(3, 0)), CellState::Wall);
    }

    #[test]
    fn test_index_round_trip() {
        let grid = Grid::new(7, 4, CellState::Wall);
        for pos in grid.positions() {
            let index = grid.index_of(pos).unwrap();
            assert_eq!(grid.position_of(index), pos);
        }
    }

    #[test]
    fn test_row_major_order() {
        let grid = Grid::new(2, 2, CellState::Wall);
        let order: Vec<IVec2> = grid.positions().collect();
        assert_eq!(
            order,
            vec![
                IVec2::new(0, 0),
                IVec2::new(1, 0),
                IVec2::new(0, 1),
                IVec2::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_positions_of() {
        let mut grid = Grid::new(3, 3, CellState::Wall);
        grid.set(IVec2::new(2, 0), CellState::Open);
        grid.set(IVec2::new(0, 2), CellState::Open);
        assert_eq!(
            grid.positions_of(CellState::Open),
            vec![IVec2::new(2, 0), IVec2::new(0, 2)]
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "write outside")]
    fn test_out_of_bounds_write_panics_in_debug() {
        let mut grid = Grid::new(2, 2, CellState::Wall);
        grid.set(IVec2::new(2, 0), CellState::Open);
    }

    #[test]
    fn test_from_cells_checks_length() {
        let grid = Grid::from_cells(2, 1, vec![CellState::Open, CellState::Wall]).unwrap();
        assert_eq!(grid.get(IVec2::new(0, 0)), CellState::Open);

        assert!(Grid::from_cells(4, 4, Vec::new()).is_err());
        assert!(Grid::from_cells(2, 2, vec![CellState::Open; 5]).is_err());
    }

    #[test]
    fn test_try_new_rejects_oversized() {
        assert!(Grid::try_new(MAX_DIMENSION + 1, 1, CellState::Wall).is_err());
        assert!(Grid::try_new(1, MAX_DIMENSION + 1, CellState::Wall).is_err());
        assert!(Grid::try_new(0, 0, CellState::Wall).unwrap().is_empty());
    }

    #[test]
    #[should_panic(expected = "coordinate limit")]
    fn test_new_panics_on_oversized() {
        let _ = Grid::new(MAX_DIMENSION + 1, 1, CellState::Wall);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_grid_deserialization_rejects_bad_length() {
        let result = serde_json::from_str::<Grid>(r#"{"width":4,"height":4,"cells":[]}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<Grid>(r#"{"width":1,"height":1,"cells":["Open"]}"#);
        assert_eq!(result.unwrap().get(IVec2::new(0, 0)), CellState::Open);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_grid_serialization() {
        let mut grid = Grid::new(3, 2, CellState::Open);
        grid.set(IVec2::new(1, 1), CellState::Spawn);

        let json = serde_json::to_string(&grid).unwrap();
        let restored: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, restored);
    }
}
