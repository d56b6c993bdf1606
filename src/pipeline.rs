//! Generation orchestrator
//!
//! Runs the phases in a fixed forward order and notifies an observer after
//! every transition:
//!
//! ```text
//! Uninitialized -> Seeded -> Simulating(1..=N) -> Labeling -> CaveSelected
//!               -> SpawnSelected -> Distributed -> Done
//! ```
//!
//! Any error moves the run to the terminal `Failed` state. Nothing is
//! retried; the same config and seed would fail the same way.

use glam::IVec2;
use log::{debug, info, trace, warn};
use rand::Rng;

use crate::cell::CellState;
use crate::config::CaveConfig;
use crate::error::{CaveError, Result};
use crate::generation::{distribute, label_all, seed_noise, select_dominant, select_spawn, simulate};
use crate::grid::Grid;
use crate::map::CaveMap;

/// Orchestrator state
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationPhase {
    /// Generator created, grid not yet seeded
    Uninitialized,
    /// Grid filled with random noise
    Seeded,
    /// Automaton step `step` of `of` applied
    Simulating {
        /// 1-based index of the step just applied
        step: usize,
        /// Total configured steps
        of: usize,
    },
    /// Simulation finished, caves are being labeled
    Labeling,
    /// Largest cave kept, the rest walled over
    CaveSelected {
        /// Number of caves found
        caves: usize,
        /// Cell count of the kept cave
        dominant_size: usize,
    },
    /// Spawn written to the grid
    SpawnSelected {
        /// Chosen spawn coordinate
        spawn: IVec2,
    },
    /// Markers written to the grid
    Distributed {
        /// Number of markers placed
        markers: usize,
    },
    /// Run finished successfully
    Done,
    /// Run aborted
    Failed(CaveError),
}

impl GenerationPhase {
    /// Position in the forward order; `Failed` sorts after everything
    fn ordinal(&self) -> usize {
        match self {
            GenerationPhase::Uninitialized => 0,
            GenerationPhase::Seeded => 1,
            GenerationPhase::Simulating { .. } => 2,
            GenerationPhase::Labeling => 3,
            GenerationPhase::CaveSelected { .. } => 4,
            GenerationPhase::SpawnSelected { .. } => 5,
            GenerationPhase::Distributed { .. } => 6,
            GenerationPhase::Done => 7,
            GenerationPhase::Failed(_) => 8,
        }
    }

    /// Check if no further transition can happen
    pub fn is_terminal(&self) -> bool {
        matches!(self, GenerationPhase::Done | GenerationPhase::Failed(_))
    }
}

/// Receives a read-only grid snapshot after every phase transition
///
/// Observers are advisory: the generated map is identical whether or not
/// anything is listening. Any `FnMut(&GenerationPhase, &Grid)` closure is an
/// observer.
pub trait ProgressObserver {
    /// Called after the orchestrator enters `phase`
    fn on_phase(&mut self, phase: &GenerationPhase, grid: &Grid);
}

impl<F> ProgressObserver for F
where
    F: FnMut(&GenerationPhase, &Grid),
{
    fn on_phase(&mut self, phase: &GenerationPhase, grid: &Grid) {
        (*self)(phase, grid)
    }
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_phase(&mut self, _phase: &GenerationPhase, _grid: &Grid) {}
}

/// One-shot cave generation run
///
/// The generator owns the grid for the whole run. [`run`](Self::run) consumes
/// it, so a generator can never be run twice. A fresh generator is always
/// `Uninitialized`; every later phase is reported to the run's
/// [`ProgressObserver`] instead of being readable from the generator.
///
/// # Example
///
/// ```
/// use cellular_caves::*;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let config = CaveConfigBuilder::new()
///     .map_size(MapSize::Small)
///     .build()
///     .unwrap();
///
/// let mut phases = Vec::new();
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let result = CaveGenerator::new(config)
///     .unwrap()
///     .run(&mut rng, &mut |phase: &GenerationPhase, _grid: &Grid| phases.push(phase.clone()));
///
/// assert!(phases.last().unwrap().is_terminal());
/// # let _ = result;
/// ```
#[derive(Debug, Clone)]
pub struct CaveGenerator {
    config: CaveConfig,
    phase: GenerationPhase,
    grid: Grid,
}

impl CaveGenerator {
    /// Create a generator, validating the configuration up front
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if any option is out of range
    pub fn new(config: CaveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            grid: Grid::try_new(config.width(), config.height(), CellState::Wall)?,
            config,
            phase: GenerationPhase::Uninitialized,
        })
    }

    /// Configuration of this run
    #[inline]
    pub fn config(&self) -> &CaveConfig {
        &self.config
    }

    /// Run every phase to completion
    ///
    /// All randomness comes from `rng`, drawn in a fixed order (noise, spawn,
    /// markers), so a seeded rng reproduces the same map bit for bit.
    ///
    /// # Errors
    ///
    /// - `EmptyMap` if no open cell survives the simulation
    /// - `NoCandidate` if the dominant cave has no valid spawn cell
    ///
    /// The observer sees `GenerationPhase::Failed` before the error returns.
    pub fn run<R, O>(mut self, rng: &mut R, observer: &mut O) -> Result<CaveMap>
    where
        R: Rng + ?Sized,
        O: ProgressObserver + ?Sized,
    {
        info!(
            "generating {}x{} cave map ({} steps, wall chance {})",
            self.config.width(),
            self.config.height(),
            self.config.number_of_steps,
            self.config.wall_chance
        );

        match self.execute(rng, observer) {
            Ok(map) => {
                info!(
                    "cave map done: {} caves, kept {} cells, spawn ({}, {}), {} markers",
                    map.cave_count(),
                    map.dominant_cave_size(),
                    map.spawn().x,
                    map.spawn().y,
                    map.marker_count()
                );
                Ok(map)
            }
            Err(err) => {
                warn!("cave generation failed: {}", err);
                transition(&mut self.phase, GenerationPhase::Failed(err.clone()), &self.grid, observer);
                Err(err)
            }
        }
    }

    fn execute<R, O>(&mut self, rng: &mut R, observer: &mut O) -> Result<CaveMap>
    where
        R: Rng + ?Sized,
        O: ProgressObserver + ?Sized,
    {
        let config = self.config;

        seed_noise(&mut self.grid, config.wall_chance, rng);
        transition(&mut self.phase, GenerationPhase::Seeded, &self.grid, observer);

        let steps = config.number_of_steps;
        let seeded = std::mem::replace(&mut self.grid, Grid::new(0, 0, CellState::Wall));
        let phase = &mut self.phase;
        self.grid = simulate(seeded, config.rules(), steps, |step, grid| {
            trace!("automaton step {}/{}: {} walls", step, steps, grid.count(CellState::Wall));
            transition(&mut *phase, GenerationPhase::Simulating { step, of: steps }, grid, &mut *observer);
        });

        transition(&mut self.phase, GenerationPhase::Labeling, &self.grid, observer);
        let caves = label_all(&mut self.grid);
        if caves.is_empty() {
            return Err(CaveError::EmptyMap);
        }
        let cave_count = caves.len();

        let dominant = select_dominant(&mut self.grid, caves)?;
        transition(
            &mut self.phase,
            GenerationPhase::CaveSelected {
                caves: cave_count,
                dominant_size: dominant.len(),
            },
            &self.grid,
            observer,
        );

        let spawn = select_spawn(&mut self.grid, &dominant, config.spawn_required_neighbors, rng)?;
        transition(&mut self.phase, GenerationPhase::SpawnSelected { spawn }, &self.grid, observer);

        let markers = distribute(
            &mut self.grid,
            &dominant,
            spawn,
            config.min_distance_from_spawn,
            config.point_distribution_chance,
            rng,
        );
        transition(
            &mut self.phase,
            GenerationPhase::Distributed { markers: markers.len() },
            &self.grid,
            observer,
        );

        transition(&mut self.phase, GenerationPhase::Done, &self.grid, observer);

        let grid = std::mem::replace(&mut self.grid, Grid::new(0, 0, CellState::Wall));
        Ok(CaveMap::from_parts(config, grid, spawn, markers, cave_count, dominant.len()))
    }
}

fn transition<O>(phase: &mut GenerationPhase, next: GenerationPhase, grid: &Grid, observer: &mut O)
where
    O: ProgressObserver + ?Sized,
{
    debug_assert!(
        next.ordinal() >= phase.ordinal() && !phase.is_terminal(),
        "illegal transition {:?} -> {:?}",
        phase,
        next
    );
    debug!("phase {:?} -> {:?}", phase, next);
    *phase = next;
    observer.on_phase(phase, grid);
}
