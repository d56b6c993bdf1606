//! Cell palettes
//!
//! A palette turns a [`CellState`] into a linear RGBA color. Any
//! `Fn(CellState) -> CellColor` closure is already a palette.

use crate::cell::CellState;

/// Linear RGBA, each channel in `0.0..=1.0`
pub type CellColor = [f32; 4];

pub trait CellPalette {
    fn color(&self, state: CellState) -> CellColor;
}

impl<F> CellPalette for F
where
    F: Fn(CellState) -> CellColor,
{
    fn color(&self, state: CellState) -> CellColor {
        self(state)
    }
}

/// The classic debug look: black rock, grey floor, red spawn
///
/// Flood-fill marks and item markers share one blue.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicPalette;

impl ClassicPalette {
    pub const ROCK: CellColor = [0.0, 0.0, 0.0, 1.0];
    pub const FLOOR: CellColor = [0.5, 0.5, 0.5, 1.0];
    pub const HIGHLIGHT: CellColor = [0.0, 0.0, 1.0, 1.0];
    pub const START: CellColor = [1.0, 0.0, 0.0, 1.0];
}

impl CellPalette for ClassicPalette {
    fn color(&self, state: CellState) -> CellColor {
        match state {
            CellState::Wall => Self::ROCK,
            CellState::Open => Self::FLOOR,
            CellState::Filled | CellState::Marker => Self::HIGHLIGHT,
            CellState::Spawn => Self::START,
        }
    }
}

/// Lookup-table palette, one color slot per cell state
///
/// Starts from the classic colors; override slots with [`with`](Self::with).
///
/// ```
/// use cellular_caves::{CellPalette, CellState, CustomPalette};
///
/// let gold = [1.0, 0.84, 0.0, 1.0];
/// let palette = CustomPalette::default().with(CellState::Marker, gold);
/// assert_eq!(palette.color(CellState::Marker), gold);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomPalette {
    slots: [CellColor; 5],
}

fn slot(state: CellState) -> usize {
    match state {
        CellState::Wall => 0,
        CellState::Open => 1,
        CellState::Filled => 2,
        CellState::Spawn => 3,
        CellState::Marker => 4,
    }
}

impl CustomPalette {
    /// Fill every slot with one color
    pub fn uniform(color: CellColor) -> Self {
        Self { slots: [color; 5] }
    }

    /// Snapshot another palette into a table
    pub fn from_palette<P: CellPalette + ?Sized>(palette: &P) -> Self {
        let mut table = Self::uniform([0.0; 4]);
        for state in [
            CellState::Wall,
            CellState::Open,
            CellState::Filled,
            CellState::Spawn,
            CellState::Marker,
        ] {
            table.slots[slot(state)] = palette.color(state);
        }
        table
    }

    pub fn with(mut self, state: CellState, color: CellColor) -> Self {
        self.set(state, color);
        self
    }

    pub fn set(&mut self, state: CellState, color: CellColor) {
        self.slots[slot(state)] = color;
    }
}

impl Default for CustomPalette {
    fn default() -> Self {
        Self::from_palette(&ClassicPalette)
    }
}

impl CellPalette for CustomPalette {
    #[inline]
    fn color(&self, state: CellState) -> CellColor {
        self.slots[slot(state)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_spawn_stands_out() {
        let spawn = ClassicPalette.color(CellState::Spawn);
        for other in [CellState::Wall, CellState::Open, CellState::Marker] {
            assert_ne!(ClassicPalette.color(other), spawn);
        }
        assert_eq!(
            ClassicPalette.color(CellState::Filled),
            ClassicPalette.color(CellState::Marker)
        );
    }

    #[test]
    fn test_with_overrides_one_slot() {
        let teal = [0.0, 0.5, 0.5, 1.0];
        let palette = CustomPalette::default().with(CellState::Open, teal);

        assert_eq!(palette.color(CellState::Open), teal);
        assert_eq!(palette.color(CellState::Wall), ClassicPalette::ROCK);
        assert_eq!(palette.color(CellState::Spawn), ClassicPalette::START);
    }

    #[test]
    fn test_closure_palette() {
        let mono = |state: CellState| -> CellColor {
            if state.is_passable() {
                [1.0; 4]
            } else {
                [0.0; 4]
            }
        };

        assert_eq!(mono.color(CellState::Marker), [1.0; 4]);
        assert_eq!(mono.color(CellState::Filled), [0.0; 4]);

        let table = CustomPalette::from_palette(&mono);
        let expected = CustomPalette::uniform([0.0; 4])
            .with(CellState::Open, [1.0; 4])
            .with(CellState::Spawn, [1.0; 4])
            .with(CellState::Marker, [1.0; 4]);
        assert_eq!(table, expected);
    }
}
