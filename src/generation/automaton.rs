//! Cellular automaton cave rule
//!
//! Walls are "alive", everything else is "dead". Each transition reads the
//! whole current grid and writes a fresh one, so no cell ever sees a
//! neighbor's updated state within the same step.

use glam::IVec2;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cell::CellState;
use crate::grid::Grid;

/// The 8 Moore neighborhood offsets (center excluded)
pub const MOORE_OFFSETS: [IVec2; 8] = [
    IVec2::new(-1, -1),
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, 1),
    IVec2::new(1, 1),
];

/// Transition thresholds for the cave automaton
///
/// With `death_limit = 4` and `birth_number = 4` this is the classic 4-5
/// rule: a wall survives with at least 4 wall neighbors, floor fills in with
/// 5 or more.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutomatonRules {
    /// A wall with fewer wall neighbors than this becomes open
    pub death_limit: u8,
    /// An open cell with more wall neighbors than this becomes wall
    pub birth_number: u8,
}

impl Default for AutomatonRules {
    fn default() -> Self {
        Self {
            death_limit: 4,
            birth_number: 4,
        }
    }
}

impl AutomatonRules {
    /// Next state of a cell given its current state and alive-neighbor count
    #[inline]
    pub fn next_state(&self, current: CellState, alive_neighbors: u8) -> CellState {
        if current.is_wall() {
            if alive_neighbors < self.death_limit {
                CellState::Open
            } else {
                CellState::Wall
            }
        } else if alive_neighbors > self.birth_number {
            CellState::Wall
        } else {
            CellState::Open
        }
    }
}

/// Count wall neighbors of a cell
///
/// Neighbors outside the grid count as walls, which pulls caves away from
/// the map edges.
pub fn count_alive_neighbors(grid: &Grid, pos: IVec2) -> u8 {
    MOORE_OFFSETS
        .iter()
        .filter(|&&offset| grid.get(pos + offset).is_wall())
        .count() as u8
}

/// Count passable neighbors of a cell
///
/// Same boundary rule as [`count_alive_neighbors`]: out-of-bounds neighbors
/// are walls and never passable.
pub fn count_open_neighbors(grid: &Grid, pos: IVec2) -> u8 {
    MOORE_OFFSETS
        .iter()
        .filter(|&&offset| grid.get(pos + offset).is_passable())
        .count() as u8
}

/// Apply one automaton transition, returning the next grid
///
/// Pure: the input grid is only read.
pub fn step(grid: &Grid, rules: AutomatonRules) -> Grid {
    let mut next = Grid::new(grid.width(), grid.height(), CellState::Wall);
    for (pos, state) in grid.iter() {
        let alive = count_alive_neighbors(grid, pos);
        next.set(pos, rules.next_state(state, alive));
    }
    next
}

/// Run `steps` transitions, calling `on_step(i, grid)` after each one
///
/// `i` counts from 1.
pub fn simulate<F>(mut grid: Grid, rules: AutomatonRules, steps: usize, mut on_step: F) -> Grid
where
    F: FnMut(usize, &Grid),
{
    for i in 1..=steps {
        grid = step(&grid, rules);
        on_step(i, &grid);
    }
    grid
}

/// Fill a grid with random noise
///
/// Every cell independently becomes wall with probability `wall_chance`
/// (must be within `[0, 1]`), open otherwise. Cells are drawn in row-major
/// order so a seeded `rng` always produces the same grid.
pub fn seed_noise<R: Rng + ?Sized>(grid: &mut Grid, wall_chance: f64, rng: &mut R) {
    let positions: Vec<IVec2> = grid.positions().collect();
    for pos in positions {
        let state = if rng.gen_bool(wall_chance) {
            CellState::Wall
        } else {
            CellState::Open
        };
        grid.set(pos, state);
    }
}
