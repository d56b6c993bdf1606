//! Cell states stored in the cave grid

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// State of a single grid cell
///
/// The automaton only distinguishes `Wall` (alive) from everything else
/// (dead). The remaining states are annotations written by the later phases:
///
/// - `Filled` exists only while a cave is being flood filled
/// - `Spawn` is written once by spawn selection
/// - `Marker` is written by point distribution
///
/// Any coordinate outside the grid reads as `Wall`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    /// Impassable rock
    #[default]
    Wall,
    /// Passable floor
    Open,
    /// Transient flood-fill mark, reverted to `Open` once a cave is collected
    Filled,
    /// The player start cell
    Spawn,
    /// A cell flagged for item placement
    Marker,
}

impl CellState {
    /// Check if this cell counts as alive for the automaton
    #[inline]
    pub fn is_wall(self) -> bool {
        matches!(self, CellState::Wall)
    }

    /// Check if a player can stand on this cell
    #[inline]
    pub fn is_passable(self) -> bool {
        matches!(self, CellState::Open | CellState::Spawn | CellState::Marker)
    }

    /// Single character used by the ASCII snapshot
    pub fn glyph(self) -> char {
        match self {
            CellState::Wall => '#',
            CellState::Open => '.',
            CellState::Filled => '~',
            CellState::Spawn => '@',
            CellState::Marker => '*',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_wall() {
        assert_eq!(CellState::default(), CellState::Wall);
    }

    #[test]
    fn test_passability() {
        assert!(!CellState::Wall.is_passable());
        assert!(CellState::Open.is_passable());
        assert!(CellState::Spawn.is_passable());
        assert!(CellState::Marker.is_passable());
        // Filled never survives a labeling call, so it is not walkable
        assert!(!CellState::Filled.is_passable());
    }

    #[test]
    fn test_only_wall_is_alive() {
        let alive: Vec<_> = [
            CellState::Wall,
            CellState::Open,
            CellState::Filled,
            CellState::Spawn,
            CellState::Marker,
        ]
        .into_iter()
        .filter(|s| s.is_wall())
        .collect();
        assert_eq!(alive, vec![CellState::Wall]);
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let glyphs: std::collections::HashSet<char> = [
            CellState::Wall,
            CellState::Open,
            CellState::Filled,
            CellState::Spawn,
            CellState::Marker,
        ]
        .into_iter()
        .map(CellState::glyph)
        .collect();
        assert_eq!(glyphs.len(), 5);
    }
}
