/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the flocking simulation, along with the spawn
 * region and the validation run once at simulation construction.
 *
 * Defaults reproduce the reference tank scene: 40 boids reacting to their
 * 6 nearest neighbors inside a radius-10 cylinder.
 */

use glam::Vec3;
use thiserror::Error;

// Axis-aligned cuboid the initial population is scattered in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for SpawnBounds {
    fn default() -> Self {
        Self {
            min: Vec3::new(-4.0, 1.0, -4.0),
            max: Vec3::new(4.0, 9.0, 4.0),
        }
    }
}

impl SpawnBounds {
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }
}

// Configuration mistakes are caught once, before the first tick; tick()
// itself has no failure paths.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("population must contain at least 2 boids, got {0}")]
    PopulationTooSmall(usize),
    #[error("neighborhood size must be at least 1")]
    EmptyNeighborhood,
    #[error("neighborhood size {neighborhood_size} must be smaller than population size {num_boids}")]
    NeighborhoodTooLarge {
        neighborhood_size: usize,
        num_boids: usize,
    },
    #[error("speed must be a positive finite number")]
    InvalidSpeed,
    #[error("spawn bounds must satisfy min <= max on every axis")]
    InvalidSpawnBounds,
}

// Parameters for the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    pub num_boids: usize,
    pub neighborhood_size: usize,      // number of nearest neighbors each boid reacts to
    pub speed: f32,                    // per-tick displacement along the heading
    pub environment_trigger: f32,      // boundary distance below which avoidance overrides flocking
    pub separation_trigger: f32,       // nearest-neighbor distance below which separation kicks in
    pub environment_strength: f32,
    pub separation_strength: f32,
    pub alignment_strength: f32,
    pub cohesion_strength: f32,
    pub spawn_bounds: SpawnBounds,
    pub rng_seed: Option<u64>,         // fixed seed for reproducible spawns; entropy if None
    // Performance settings
    pub enable_parallel: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: 40,
            neighborhood_size: 6,
            speed: 0.01,
            environment_trigger: 2.0,
            separation_trigger: 1.0,
            environment_strength: 0.1,
            separation_strength: 0.005,
            alignment_strength: 0.00125,
            cohesion_strength: 0.002,
            spawn_bounds: SpawnBounds::default(),
            rng_seed: None,
            enable_parallel: false,
        }
    }
}

impl SimulationParams {
    // Check the configuration invariants. The neighborhood bound matters
    // most: asking for more neighbors than the population can supply would
    // make the neighbor search come up short every tick.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.num_boids < 2 {
            return Err(ParamsError::PopulationTooSmall(self.num_boids));
        }
        if self.neighborhood_size == 0 {
            return Err(ParamsError::EmptyNeighborhood);
        }
        if self.neighborhood_size >= self.num_boids {
            return Err(ParamsError::NeighborhoodTooLarge {
                neighborhood_size: self.neighborhood_size,
                num_boids: self.num_boids,
            });
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ParamsError::InvalidSpeed);
        }
        if !self.spawn_bounds.is_valid() {
            return Err(ParamsError::InvalidSpawnBounds);
        }
        Ok(())
    }
}
