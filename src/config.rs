//! Cave Generation Configuration and Builder
//!
//! This module provides configuration types for deterministic cave generation.
//! Every option is validated before a run starts; an invalid configuration is
//! never partially simulated.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{CaveError, Result};
use crate::generation::AutomatonRules;

/// Largest neighbor count a Moore neighborhood can produce
pub const MAX_NEIGHBORS: u8 = 8;

/// Map size presets
///
/// Presets use the 16:10 proportions of a typical game viewport.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapSize {
    /// 48 x 32 cells
    Small,
    /// 80 x 50 cells (default)
    Medium,
    /// 160 x 100 cells
    Large,
    /// Custom dimensions
    Custom {
        /// Width in cells
        width: usize,
        /// Height in cells
        height: usize,
    },
}

impl MapSize {
    /// Width in cells
    pub fn width(self) -> usize {
        match self {
            MapSize::Small => 48,
            MapSize::Medium => 80,
            MapSize::Large => 160,
            MapSize::Custom { width, .. } => width,
        }
    }

    /// Height in cells
    pub fn height(self) -> usize {
        match self {
            MapSize::Small => 32,
            MapSize::Medium => 50,
            MapSize::Large => 100,
            MapSize::Custom { height, .. } => height,
        }
    }

    /// Get a human-readable name for this map size
    pub fn name(self) -> &'static str {
        match self {
            MapSize::Small => "Small",
            MapSize::Medium => "Medium",
            MapSize::Large => "Large",
            MapSize::Custom { .. } => "Custom",
        }
    }
}

impl Default for MapSize {
    fn default() -> Self {
        MapSize::Medium
    }
}

/// Configuration for one cave generation run
///
/// The same configuration and seed always produce the identical map.
/// Fields are public for inspection and tweaking; [`CaveConfig::validate`] is
/// re-run by the generator so edited values are still checked.
///
/// # Example
///
/// ```rust
/// use cellular_caves::*;
///
/// let config = CaveConfigBuilder::new()
///     .map_size(MapSize::Small)
///     .wall_chance(0.45).unwrap()
///     .number_of_steps(4)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.width(), 48);
/// assert_eq!(config.number_of_steps, 4);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaveConfig {
    /// Grid dimensions
    pub map_size: MapSize,

    /// Probability that a cell starts as wall when the grid is seeded
    pub wall_chance: f64,

    /// Number of automaton transitions applied after seeding
    pub number_of_steps: usize,

    /// A wall with fewer than this many wall neighbors opens up
    pub death_limit: u8,

    /// An open cell with more than this many wall neighbors fills in
    pub birth_number: u8,

    /// A spawn candidate needs strictly more open neighbors than this
    ///
    /// - 8: no candidate can ever qualify
    /// - 7: only cells fully surrounded by open space
    /// - lower: spawn may sit closer to walls
    pub spawn_required_neighbors: u8,

    /// Markers are only placed at Euclidean distance >= this from the spawn
    pub min_distance_from_spawn: f32,

    /// Independent probability that an eligible cell receives a marker
    pub point_distribution_chance: f64,
}

impl CaveConfig {
    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.map_size.width()
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.map_size.height()
    }

    /// Automaton thresholds as a rule set
    #[inline]
    pub fn rules(&self) -> AutomatonRules {
        AutomatonRules {
            death_limit: self.death_limit,
            birth_number: self.birth_number,
        }
    }

    /// Check every option
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for non-positive or oversized dimensions,
    /// probabilities outside `[0, 1]`, thresholds above 8, or a negative or
    /// non-finite marker distance.
    pub fn validate(&self) -> Result<()> {
        check_dimension("width", self.width())?;
        check_dimension("height", self.height())?;
        check_probability("wall chance", self.wall_chance)?;
        check_threshold("death limit", self.death_limit)?;
        check_threshold("birth number", self.birth_number)?;
        check_threshold("spawn required neighbors", self.spawn_required_neighbors)?;
        check_distance(self.min_distance_from_spawn)?;
        check_probability("point distribution chance", self.point_distribution_chance)?;
        Ok(())
    }
}

impl Default for CaveConfig {
    fn default() -> Self {
        CaveConfigBuilder::new().defaults()
    }
}

fn check_dimension(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(CaveError::InvalidConfig(format!(
            "map {} must be positive (got 0)",
            name
        )));
    }
    // Coordinates are i32, so every index must fit
    if value > i32::MAX as usize {
        return Err(CaveError::InvalidConfig(format!(
            "map {} must be <= {} (got {})",
            name,
            i32::MAX,
            value
        )));
    }
    Ok(())
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(CaveError::InvalidConfig(format!(
            "{} must be within [0, 1] (got {})",
            name, value
        )));
    }
    Ok(())
}

fn check_threshold(name: &str, value: u8) -> Result<()> {
    if value > MAX_NEIGHBORS {
        return Err(CaveError::InvalidConfig(format!(
            "{} must be within 0..={} (got {})",
            name, MAX_NEIGHBORS, value
        )));
    }
    Ok(())
}

fn check_distance(value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CaveError::InvalidConfig(format!(
            "min distance from spawn must be finite and >= 0 (got {})",
            value
        )));
    }
    Ok(())
}

/// Builder for creating CaveConfig with validation
///
/// Range-checked setters fail as soon as a bad value is supplied;
/// [`build`](Self::build) validates the complete configuration.
///
/// # Example
///
/// ```rust
/// use cellular_caves::*;
///
/// // Use defaults
/// let config = CaveConfigBuilder::new().build().unwrap();
///
/// // Customize
/// let config = CaveConfigBuilder::new()
///     .map_size(MapSize::Custom { width: 64, height: 40 })
///     .death_limit(3)
///     .unwrap()
///     .birth_number(4)
///     .unwrap()
///     .point_distribution_chance(0.05)
///     .unwrap()
///     .build()
///     .unwrap();
/// assert_eq!(config.height(), 40);
/// ```
#[derive(Debug, Clone)]
pub struct CaveConfigBuilder {
    map_size: MapSize,
    wall_chance: f64,
    number_of_steps: usize,
    death_limit: u8,
    birth_number: u8,
    spawn_required_neighbors: u8,
    min_distance_from_spawn: f32,
    point_distribution_chance: f64,
}

impl CaveConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - map_size: Medium (80 x 50)
    /// - wall_chance: 0.45
    /// - number_of_steps: 5
    /// - death_limit: 4, birth_number: 4 (the classic 4-5 cave rule)
    /// - spawn_required_neighbors: 7 (spawn fully surrounded by floor)
    /// - min_distance_from_spawn: 10.0
    /// - point_distribution_chance: 0.02
    pub fn new() -> Self {
        Self {
            map_size: MapSize::default(),
            wall_chance: 0.45,
            number_of_steps: 5,
            death_limit: 4,
            birth_number: 4,
            spawn_required_neighbors: 7,
            min_distance_from_spawn: 10.0,
            point_distribution_chance: 0.02,
        }
    }

    /// Set the map dimensions
    pub fn map_size(mut self, size: MapSize) -> Self {
        self.map_size = size;
        self
    }

    /// Set the initial wall probability
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the chance is outside `[0, 1]`
    pub fn wall_chance(mut self, chance: f64) -> Result<Self> {
        check_probability("wall chance", chance)?;
        self.wall_chance = chance;
        Ok(self)
    }

    /// Set the number of automaton iterations
    ///
    /// 0 leaves the raw noise untouched.
    pub fn number_of_steps(mut self, steps: usize) -> Self {
        self.number_of_steps = steps;
        self
    }

    /// Set the wall death limit
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the limit is above 8
    pub fn death_limit(mut self, limit: u8) -> Result<Self> {
        check_threshold("death limit", limit)?;
        self.death_limit = limit;
        Ok(self)
    }

    /// Set the wall birth number
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the number is above 8
    pub fn birth_number(mut self, number: u8) -> Result<Self> {
        check_threshold("birth number", number)?;
        self.birth_number = number;
        Ok(self)
    }

    /// Set the open-neighbor threshold for spawn candidates
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the threshold is above 8
    pub fn spawn_required_neighbors(mut self, neighbors: u8) -> Result<Self> {
        check_threshold("spawn required neighbors", neighbors)?;
        self.spawn_required_neighbors = neighbors;
        Ok(self)
    }

    /// Set the marker exclusion radius around the spawn
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the distance is negative or not finite
    pub fn min_distance_from_spawn(mut self, distance: f32) -> Result<Self> {
        check_distance(distance)?;
        self.min_distance_from_spawn = distance;
        Ok(self)
    }

    /// Set the per-cell marker probability
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the chance is outside `[0, 1]`
    pub fn point_distribution_chance(mut self, chance: f64) -> Result<Self> {
        check_probability("point distribution chance", chance)?;
        self.point_distribution_chance = chance;
        Ok(self)
    }

    fn defaults(self) -> CaveConfig {
        CaveConfig {
            map_size: self.map_size,
            wall_chance: self.wall_chance,
            number_of_steps: self.number_of_steps,
            death_limit: self.death_limit,
            birth_number: self.birth_number,
            spawn_required_neighbors: self.spawn_required_neighbors,
            min_distance_from_spawn: self.min_distance_from_spawn,
            point_distribution_chance: self.point_distribution_chance,
        }
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if any option is out of range (for example a
    /// zero-sized custom map)
    pub fn build(self) -> Result<CaveConfig> {
        let config = self.defaults();
        config.validate()?;
        Ok(config)
    }
}

impl Default for CaveConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
