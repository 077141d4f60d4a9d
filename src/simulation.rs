/*
 * Simulation Module
 *
 * This module defines the Simulation context that owns the two generation
 * buffers and drives one tick: behavior selection and steering for every
 * boid, position integration, then a full copy of the current generation
 * into the previous one.
 *
 * The double buffer is the synchronization boundary that makes a tick
 * order-independent: all neighbor and boundary decisions read only the
 * previous generation, all writes go to the boid's own slot in the current
 * generation. That discipline is also what makes the optional rayon path
 * safe without any locking; the buffer copy happens strictly after every
 * slot has been written.
 */

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::Instant;

use crate::behavior::{self, BehaviorMode};
use crate::boid::Boid;
use crate::environment::Environment;
use crate::params::{ParamsError, SimulationParams};
use crate::stats::TickStats;

pub struct Simulation {
    current: Vec<Boid>,
    previous: Vec<Boid>,
    params: SimulationParams,
    environment: Environment,
    stats: TickStats,
}

// Advance one boid's position along its finalized heading at fixed speed.
// Position is unconstrained, so no renormalization is involved.
#[inline]
fn integrate(boid: &mut Boid, speed: f32) {
    boid.position += boid.heading * speed;
}

impl Simulation {
    // Build a simulation with a randomized population. Parameters are
    // validated up front so configuration mistakes fail here rather than
    // on some later tick. The previous generation starts as an exact copy
    // of the spawned population, so it is ready for the first tick's reads.
    pub fn new(params: SimulationParams, environment: Environment) -> Result<Self, ParamsError> {
        params.validate()?;

        let mut rng = match params.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let current: Vec<Boid> = (0..params.num_boids)
            .map(|_| Boid::spawn(&mut rng, &params.spawn_bounds))
            .collect();
        let previous = current.clone();

        Ok(Self {
            current,
            previous,
            params,
            environment,
            stats: TickStats::default(),
        })
    }

    // Build a simulation from an explicit population instead of a random
    // one. num_boids follows the supplied population. Used by tests and
    // callers that need a reproducible starting arrangement.
    pub fn from_boids(
        boids: Vec<Boid>,
        params: SimulationParams,
        environment: Environment,
    ) -> Result<Self, ParamsError> {
        let params = SimulationParams {
            num_boids: boids.len(),
            ..params
        };
        params.validate()?;

        let previous = boids.clone();
        Ok(Self {
            current: boids,
            previous,
            params,
            environment,
            stats: TickStats::default(),
        })
    }

    // Advance the simulation by exactly one frame.
    pub fn tick(&mut self) {
        let started = Instant::now();

        let (avoidance_count, flocking_count) = if self.params.enable_parallel {
            self.update_current_parallel()
        } else {
            self.update_current_sequential()
        };

        // Snapshot for the next tick's neighbor queries. No tick reads the
        // previous generation until this copy has completed.
        self.previous.clone_from(&self.current);

        self.stats = TickStats {
            avoidance_count,
            flocking_count,
            tick_duration: started.elapsed(),
        };
    }

    fn update_current_sequential(&mut self) -> (usize, usize) {
        let previous = &self.previous;
        let environment = &self.environment;
        let params = &self.params;

        let mut avoidance_count = 0;
        let mut flocking_count = 0;

        for (index, boid) in self.current.iter_mut().enumerate() {
            match behavior::update_heading(index, boid, previous, environment, params) {
                BehaviorMode::Avoidance => avoidance_count += 1,
                BehaviorMode::Flocking => flocking_count += 1,
            }
            integrate(boid, params.speed);
        }

        (avoidance_count, flocking_count)
    }

    // Same per-boid work distributed over the rayon pool. Each closure
    // reads the shared previous generation and writes only its own slot,
    // so no synchronization is needed beyond the implicit join.
    fn update_current_parallel(&mut self) -> (usize, usize) {
        let previous = &self.previous;
        let environment = &self.environment;
        let params = &self.params;

        self.current
            .par_iter_mut()
            .enumerate()
            .map(|(index, boid)| {
                let mode = behavior::update_heading(index, boid, previous, environment, params);
                integrate(boid, params.speed);
                mode
            })
            .map(|mode| match mode {
                BehaviorMode::Avoidance => (1, 0),
                BehaviorMode::Flocking => (0, 1),
            })
            .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1))
    }

    // Read access for the rendering collaborator: the current generation's
    // positions and headings, one entry per boid.
    pub fn boids(&self) -> &[Boid] {
        &self.current
    }

    // The snapshot the next tick will read. Identical to boids() between
    // ticks; exposed for callers that interpolate between generations.
    pub fn previous_boids(&self) -> &[Boid] {
        &self.previous
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    // Diagnostics for the last completed tick.
    pub fn stats(&self) -> &TickStats {
        &self.stats
    }
}
