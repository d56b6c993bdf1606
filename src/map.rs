//! CaveMap main structure

use glam::IVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::cell::CellState;
use crate::config::CaveConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::pipeline::{CaveGenerator, NoProgress, ProgressObserver};

/// A finished, playable cave map
///
/// The grid holds exactly one open region, one `Spawn` cell and zero or more
/// `Marker` cells. Nothing mutates it after generation.
///
/// # Examples
///
/// ```
/// use cellular_caves::*;
///
/// let config = CaveConfigBuilder::new()
///     .map_size(MapSize::Small)
///     .spawn_required_neighbors(5)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let map = CaveMap::generate(&config, 42).unwrap();
/// println!("Spawn at {:?} with {} markers", map.spawn(), map.marker_count());
///
/// assert_eq!(map.grid().get(map.spawn()), CellState::Spawn);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CaveMap {
    /// Configuration used to generate this map
    config: CaveConfig,

    /// Final annotated grid
    grid: Grid,

    /// Player start
    spawn: IVec2,

    /// Item placement cells, row-major
    markers: Vec<IVec2>,

    /// Number of caves found before culling
    cave_count: usize,

    /// Cell count of the kept cave (spawn and markers included)
    dominant_cave_size: usize,

    /// Seed of the run, when it came from [`CaveMap::generate`]
    seed: Option<u64>,
}

impl CaveMap {
    /// Generate a map from a configuration and a seed
    ///
    /// The seed drives a `ChaCha8Rng`; the same configuration and seed always
    /// yield the same map.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if the configuration is out of range
    /// - `EmptyMap` if the simulation closes every cell
    /// - `NoCandidate` if no spawn cell qualifies
    pub fn generate(config: &CaveConfig, seed: u64) -> Result<Self> {
        Self::generate_with_observer(config, seed, &mut NoProgress)
    }

    /// Generate a map, reporting every phase transition to `observer`
    ///
    /// # Example
    ///
    /// ```
    /// use cellular_caves::*;
    ///
    /// let config = CaveConfigBuilder::new()
    ///     .map_size(MapSize::Small)
    ///     .spawn_required_neighbors(5)
    ///     .unwrap()
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut frames = 0;
    /// let map = CaveMap::generate_with_observer(&config, 42, &mut |_: &GenerationPhase, _grid: &Grid| {
    ///     // A renderer would redraw the snapshot here
    ///     frames += 1;
    /// });
    /// assert!(frames > 0);
    /// # let _ = map;
    /// ```
    pub fn generate_with_observer<O>(config: &CaveConfig, seed: u64, observer: &mut O) -> Result<Self>
    where
        O: ProgressObserver + ?Sized,
    {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut map = CaveGenerator::new(*config)?.run(&mut rng, observer)?;
        map.seed = Some(seed);
        Ok(map)
    }

    pub(crate) fn from_parts(
        config: CaveConfig,
        grid: Grid,
        spawn: IVec2,
        markers: Vec<IVec2>,
        cave_count: usize,
        dominant_cave_size: usize,
    ) -> Self {
        Self {
            config,
            grid,
            spawn,
            markers,
            cave_count,
            dominant_cave_size,
            seed: None,
        }
    }

    /// Get the configuration used to generate this map
    #[inline]
    pub fn config(&self) -> &CaveConfig {
        &self.config
    }

    /// Seed this map was generated from
    ///
    /// `None` when the map came from [`CaveGenerator::run`] with a caller rng.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Get the final grid
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the map, returning its grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Get the spawn coordinate
    #[inline]
    pub fn spawn(&self) -> IVec2 {
        self.spawn
    }

    /// Get all marker coordinates
    #[inline]
    pub fn markers(&self) -> &[IVec2] {
        &self.markers
    }

    /// Number of markers placed
    #[inline]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Number of separate caves the simulation produced
    #[inline]
    pub fn cave_count(&self) -> usize {
        self.cave_count
    }

    /// Size of the single remaining cave
    #[inline]
    pub fn dominant_cave_size(&self) -> usize {
        self.dominant_cave_size
    }

    /// Check if a player can stand at `pos`
    ///
    /// Out-of-bounds positions are never walkable.
    pub fn is_walkable(&self, pos: IVec2) -> bool {
        self.grid.get(pos).is_passable()
    }

    /// Fraction of the map that is walkable
    pub fn open_ratio(&self) -> f32 {
        self.dominant_cave_size as f32 / self.grid.len() as f32
    }

    /// Count cells in each state
    pub fn state_count(&self, state: CellState) -> usize {
        self.grid.count(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CaveConfigBuilder, MapSize};
    use crate::error::CaveError;
    use crate::generation::{grid_distance, label_all};

    fn config() -> CaveConfig {
        CaveConfigBuilder::new()
            .map_size(MapSize::Small)
            .spawn_required_neighbors(5)
            .unwrap()
            .min_distance_from_spawn(6.0)
            .unwrap()
            .point_distribution_chance(0.05)
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_map_generation() {
        let map = CaveMap::generate(&config(), 42).unwrap();

        assert!(map.cave_count() >= 1);
        assert!(map.dominant_cave_size() > 0);
        assert_eq!(map.state_count(CellState::Spawn), 1);
        assert_eq!(map.state_count(CellState::Marker), map.marker_count());
        assert_eq!(map.state_count(CellState::Filled), 0);
        assert_eq!(map.config(), &config());
    }

    #[test]
    fn test_single_connected_region() {
        let map = CaveMap::generate(&config(), 7).unwrap();

        // Turn the annotations back into floor and relabel
        let mut grid = map.grid().clone();
        for pos in grid.positions().collect::<Vec<_>>() {
            if grid.get(pos).is_passable() {
                grid.set(pos, CellState::Open);
            }
        }
        let caves = label_all(&mut grid);
        assert_eq!(caves.len(), 1);
        assert_eq!(caves[0].len(), map.dominant_cave_size());
    }

    #[test]
    fn test_markers_far_from_spawn() {
        let map = CaveMap::generate(&config(), 99).unwrap();
        for &marker in map.markers() {
            assert!(grid_distance(map.spawn(), marker) >= 6.0);
            assert!(map.is_walkable(marker));
        }
    }

    #[test]
    fn test_determinism() {
        let a = CaveMap::generate(&config(), 1234).unwrap();
        let b = CaveMap::generate(&config(), 1234).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_reproduces_map() {
        let map = CaveMap::generate(&config(), 555).unwrap();
        assert_eq!(map.seed(), Some(555));

        let again = CaveMap::generate(map.config(), map.seed().unwrap()).unwrap();
        assert_eq!(again, map);
    }

    #[test]
    fn test_caller_rng_map_has_no_seed() {
        let mut rng = ChaCha8Rng::seed_from_u64(555);
        let map = CaveGenerator::new(config())
            .unwrap()
            .run(&mut rng, &mut NoProgress)
            .unwrap();
        assert_eq!(map.seed(), None);
        assert_eq!(map.grid(), CaveMap::generate(&config(), 555).unwrap().grid());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = CaveMap::generate(&config(), 1).unwrap();
        let b = CaveMap::generate(&config(), 2).unwrap();
        assert_ne!(a.grid(), b.grid());
    }

    #[test]
    fn test_open_map_scenario() {
        // 10x10, no walls, no simulation: one 100-cell cave, interior spawn
        let config = CaveConfigBuilder::new()
            .map_size(MapSize::Custom { width: 10, height: 10 })
            .wall_chance(0.0)
            .unwrap()
            .number_of_steps(0)
            .spawn_required_neighbors(7)
            .unwrap()
            .build()
            .unwrap();

        let map = CaveMap::generate(&config, 0).unwrap();
        assert_eq!(map.cave_count(), 1);
        assert_eq!(map.dominant_cave_size(), 100);

        let spawn = map.spawn();
        assert!((1..9).contains(&spawn.x), "spawn {:?} on the edge", spawn);
        assert!((1..9).contains(&spawn.y), "spawn {:?} on the edge", spawn);
    }

    #[test]
    fn test_all_wall_scenario() {
        let config = CaveConfigBuilder::new()
            .map_size(MapSize::Custom { width: 10, height: 10 })
            .wall_chance(1.0)
            .unwrap()
            .number_of_steps(7)
            .build()
            .unwrap();

        assert_eq!(CaveMap::generate(&config, 0), Err(CaveError::EmptyMap));
    }

    #[test]
    fn test_out_of_bounds_not_walkable() {
        let map = CaveMap::generate(&config(), 42).unwrap();
        assert!(!map.is_walkable(IVec2::new(-1, 0)));
        assert!(!map.is_walkable(IVec2::new(0, map.grid().height() as i32)));
        assert!(map.is_walkable(map.spawn()));
        assert!(map.open_ratio() > 0.0 && map.open_ratio() <= 1.0);
    }
}
