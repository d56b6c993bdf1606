//! Core cave generation algorithms
//!
//! Each phase is a plain function over an exclusively borrowed [`Grid`]:
//!
//! 1. [`seed_noise`] fills the grid with random walls
//! 2. [`step`] / [`simulate`] apply the cellular automaton
//! 3. [`label_all`] and [`select_dominant`] keep the largest cave
//! 4. [`select_spawn`] places the spawn
//! 5. [`distribute`] scatters markers
//!
//! [`crate::pipeline`] sequences them and reports progress.
//!
//! [`Grid`]: crate::grid::Grid

mod automaton;
mod caves;
mod points;
mod spawn;

pub use automaton::{
    count_alive_neighbors, count_open_neighbors, seed_noise, simulate, step, AutomatonRules,
    MOORE_OFFSETS,
};
pub use caves::{
    cull_minor_caves, dominant_cave_index, flood_fill, label_all, select_dominant, Cave,
    VON_NEUMANN_OFFSETS,
};
pub use points::{distribute, grid_distance};
pub use spawn::{select_spawn, spawn_candidates};
