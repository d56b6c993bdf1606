//! Cellular-automaton cave map generation
//!
//! A standalone library that turns random noise into a playable 2D cave:
//! one connected open region, a spawn point in open space, and scattered
//! item markers kept away from the spawn. Engine agnostic; renderers read
//! the grid through [`render`] or a [`ProgressObserver`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cellular_caves::*;
//!
//! let config = CaveConfigBuilder::new()
//!     .map_size(MapSize::Medium)
//!     .number_of_steps(5)
//!     .build().unwrap();
//!
//! let map = CaveMap::generate(&config, 42).unwrap();
//!
//! println!("{}", render_ascii(map.grid()));
//! println!("Spawn at {:?}, {} markers", map.spawn(), map.marker_count());
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configuration, cell states and grids

// Modules
pub mod error;
pub mod config;
pub mod cell;
pub mod grid;
pub mod generation;
pub mod pipeline;
pub mod map;
pub mod render;

// Re-export core types for convenience
pub use error::{CaveError, Result};
pub use config::{CaveConfig, CaveConfigBuilder, MapSize};
pub use cell::CellState;
pub use grid::Grid;
pub use generation::{
    count_alive_neighbors, count_open_neighbors, distribute, label_all, seed_noise,
    select_dominant, select_spawn, step, AutomatonRules, Cave,
};
pub use pipeline::{CaveGenerator, GenerationPhase, NoProgress, ProgressObserver};
pub use map::CaveMap;
pub use render::{render_ascii, render_rgba, render_rgba8, CellColor, CellPalette, ClassicPalette, CustomPalette};

// Re-export glam::IVec2 for convenience
pub use glam::IVec2;
