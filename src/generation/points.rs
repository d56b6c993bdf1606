//! Marker distribution
//!
//! Reads `Open` cells of the dominant cave, writes `Marker`. The spawn cell
//! is never overwritten.

use glam::IVec2;
use rand::Rng;

use super::caves::Cave;
use crate::cell::CellState;
use crate::grid::Grid;

/// Euclidean distance between two grid coordinates
#[inline]
pub fn grid_distance(a: IVec2, b: IVec2) -> f32 {
    a.as_vec2().distance(b.as_vec2())
}

/// Scatter markers over `cave`
///
/// Every open cell at distance `>= min_distance` from `spawn` independently
/// becomes a marker with probability `chance` (within `[0, 1]`). Markers
/// have no spacing constraint between each other.
///
/// Returns the marked cells in the cave's row-major order.
pub fn distribute<R: Rng + ?Sized>(
    grid: &mut Grid,
    cave: &Cave,
    spawn: IVec2,
    min_distance: f32,
    chance: f64,
    rng: &mut R,
) -> Vec<IVec2> {
    let mut markers = Vec::new();

    for &pos in cave.cells() {
        if pos == spawn || grid.get(pos) != CellState::Open {
            continue;
        }
        if grid_distance(spawn, pos) < min_distance {
            continue;
        }
        if rng.gen_bool(chance) {
            grid.set(pos, CellState::Marker);
            markers.push(pos);
        }
    }

    markers
}
