/*
 * Shoal - 3D Boid Flocking Simulation Core
 *
 * This file defines the module structure for the flocking simulation library.
 * It organizes the code into logical components for better maintainability.
 *
 * The simulation advances a fixed population of boids inside a bounded
 * cylindrical volume. Each tick, every boid either avoids a nearby boundary
 * or flocks with its nearest neighbors (alignment, separation, cohesion),
 * then moves along its heading at a fixed speed. All neighbor queries read
 * a snapshot of the previous tick, so the result is independent of update
 * order. Rendering and windowing are the caller's concern; the library only
 * exposes per-boid positions and headings.
 */

// Re-export key components for easier access
pub use behavior::BehaviorMode;
pub use boid::Boid;
pub use environment::Environment;
pub use neighbors::Neighbor;
pub use params::{ParamsError, SimulationParams, SpawnBounds};
pub use simulation::Simulation;
pub use stats::TickStats;

// Define modules
pub mod behavior;
pub mod boid;
pub mod environment;
pub mod math;
pub mod neighbors;
pub mod params;
pub mod simulation;
pub mod stats;

// Constants
pub const DISTANCE_EPSILON: f32 = 1e-6; // guards inverse-square denominators near zero distance
