/*
 * Boid Module
 *
 * This module defines the Boid struct, one simulated agent with a position
 * and a heading. The heading is kept at unit length after every mutation;
 * the behavior module renormalizes after each steering rule and the spawn
 * path normalizes the randomized initial heading.
 *
 * Boids are created once at simulation start and never destroyed during a
 * run; the population size is fixed.
 */

use glam::Vec3;
use rand::Rng;

use crate::math;
use crate::params::SpawnBounds;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boid {
    pub position: Vec3,
    pub heading: Vec3,
}

impl Boid {
    pub fn new(position: Vec3, heading: Vec3) -> Self {
        Self { position, heading }
    }

    // Spawn a boid at a random position inside the bounds with a random
    // normalized heading.
    pub fn spawn<R: Rng>(rng: &mut R, bounds: &SpawnBounds) -> Self {
        let position = Vec3::new(
            rng.gen_range(bounds.min.x..=bounds.max.x),
            rng.gen_range(bounds.min.y..=bounds.max.y),
            rng.gen_range(bounds.min.z..=bounds.max.z),
        );

        // Random initial heading, normalized. The all-zero draw is
        // vanishingly rare but would make normalization undefined, so it
        // falls back to a fixed default heading.
        let heading = Vec3::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>());
        let heading = math::normalize_safe(heading).unwrap_or(Vec3::X);

        Self { position, heading }
    }

    // Euclidean distance between two boids.
    #[inline]
    pub fn distance_to(&self, other: &Boid) -> f32 {
        self.position.distance(other.position)
    }
}
