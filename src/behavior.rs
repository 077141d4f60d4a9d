/*
 * Behavior Module
 *
 * This module decides what a boid does each tick and applies the steering
 * rules that perturb its heading:
 * - Boundary avoidance: inverse-square repulsion from wall, floor, and
 *   ceiling when the boid is within the trigger distance of any of them.
 * - Alignment: steer towards the average heading of the nearest neighbors.
 * - Separation: steer away from the single closest neighbor if it is too
 *   close.
 * - Cohesion: steer towards the distance-weighted center of the neighbors.
 *
 * Avoidance and flocking are mutually exclusive within a tick. The choice
 * is recomputed fresh from the current position every tick with no
 * hysteresis, so a boid sitting near the trigger distance may alternate
 * between modes on consecutive ticks; that is accepted behavior.
 *
 * All peer data is read from the previous generation buffer, never from
 * the in-progress current generation. Every rule leaves the heading
 * normalized; zero-length steering deltas are skipped instead of
 * normalized.
 */

use glam::Vec3;

use crate::boid::Boid;
use crate::environment::Environment;
use crate::math;
use crate::neighbors::{self, Neighbor};
use crate::params::SimulationParams;
use crate::DISTANCE_EPSILON;

// Which of the two mutually exclusive behaviors a boid ran this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorMode {
    Avoidance,
    Flocking,
}

// Steer one boid for this tick: boundary avoidance if any boundary is
// within the trigger distance, neighbor flocking otherwise. Returns the
// mode that ran. Only the heading is mutated; integration happens in the
// tick driver afterwards.
pub fn update_heading(
    subject_index: usize,
    boid: &mut Boid,
    previous: &[Boid],
    environment: &Environment,
    params: &SimulationParams,
) -> BehaviorMode {
    if environment.min_distance(boid.position) < params.environment_trigger {
        avoid_environment(boid, environment, params);
        BehaviorMode::Avoidance
    } else {
        flock_with_neighbors(subject_index, boid, previous, params);
        BehaviorMode::Flocking
    }
}

// Blend a normalized target delta into the heading and renormalize.
// A degenerate sum (delta exactly cancelling the heading) leaves the
// heading unchanged rather than producing a zero vector.
fn blend_heading(boid: &mut Boid, target_delta: Vec3, strength: f32) {
    if let Some(heading) = math::normalize_safe(boid.heading + target_delta * strength) {
        boid.heading = heading;
    }
}

// Steer away from every boundary surface closer than the trigger distance.
// Repulsion per surface is environment_strength / (distance^2 + epsilon):
// towards the vertical axis for the wall, straight up off the floor,
// straight down off the ceiling.
pub fn avoid_environment(boid: &mut Boid, environment: &Environment, params: &SimulationParams) {
    let mut target = Vec3::ZERO;

    let wall_distance = environment.distance_to_wall(boid.position);
    if wall_distance < params.environment_trigger {
        let repulsion =
            params.environment_strength / (wall_distance * wall_distance + DISTANCE_EPSILON);
        target.x -= boid.position.x * repulsion;
        target.z -= boid.position.z * repulsion;
    }

    let floor_distance = environment.distance_to_floor(boid.position);
    if floor_distance < params.environment_trigger {
        let repulsion =
            params.environment_strength / (floor_distance * floor_distance + DISTANCE_EPSILON);
        target.y += repulsion;
    }

    let ceiling_distance = environment.distance_to_ceiling(boid.position);
    if ceiling_distance < params.environment_trigger {
        let repulsion =
            params.environment_strength / (ceiling_distance * ceiling_distance + DISTANCE_EPSILON);
        target.y -= repulsion;
    }

    if let Some(target_delta) = math::normalize_safe(target - boid.heading) {
        blend_heading(boid, target_delta, params.environment_strength);
    }
}

// Run the three neighbor rules in order: alignment, then separation against
// the closest of the found neighbors, then cohesion. Each rule sees the
// heading the previous rule produced; they are deliberately sequential, not
// blended from the pre-tick heading.
pub fn flock_with_neighbors(
    subject_index: usize,
    boid: &mut Boid,
    previous: &[Boid],
    params: &SimulationParams,
) {
    let neighbors = neighbors::nearest_neighbors(subject_index, previous, params.neighborhood_size);
    debug_assert!(!neighbors.is_empty());

    align(boid, &neighbors, previous, params);
    separate(boid, neighbors[0], previous, params);
    cohere(boid, &neighbors, previous, params);
}

// Alignment: steer towards the average heading of the neighbors.
fn align(boid: &mut Boid, neighbors: &[Neighbor], previous: &[Boid], params: &SimulationParams) {
    let mut sum = Vec3::ZERO;
    for neighbor in neighbors {
        sum += previous[neighbor.index].heading;
    }
    let average = sum / neighbors.len() as f32;

    if let Some(target_delta) = math::normalize_safe(average - boid.heading) {
        blend_heading(boid, target_delta, params.alignment_strength);
    }
}

// Separation: if the closest neighbor is within the separation trigger,
// push directly away from it with inverse-square strength. This rule acts
// on the single nearest neighbor only, not the whole neighbor set.
fn separate(boid: &mut Boid, closest: Neighbor, previous: &[Boid], params: &SimulationParams) {
    if closest.distance >= params.separation_trigger {
        return;
    }

    let neighbor = &previous[closest.index];
    // A co-located neighbor gives no usable direction to flee along; the
    // rule contributes nothing that tick.
    let Some(away) = math::normalize_safe(boid.position - neighbor.position) else {
        return;
    };

    let repulsion = params.separation_strength
        / (closest.distance * closest.distance + DISTANCE_EPSILON);

    if let Some(heading) = math::normalize_safe(boid.heading + away * repulsion) {
        boid.heading = heading;
    }
}

// Cohesion: steer towards the weighted average neighbor position, with
// closer neighbors weighted more strongly (cohesion_strength / (d^2 + eps)).
fn cohere(boid: &mut Boid, neighbors: &[Neighbor], previous: &[Boid], params: &SimulationParams) {
    let mut weighted_sum = Vec3::ZERO;
    let mut total_weight = 0.0f32;

    for neighbor in neighbors {
        let weight = params.cohesion_strength
            / (neighbor.distance * neighbor.distance + DISTANCE_EPSILON);
        weighted_sum += previous[neighbor.index].position * weight;
        total_weight += weight;
    }

    if total_weight <= 0.0 {
        return;
    }
    let center = weighted_sum / total_weight;

    if let Some(target_delta) = math::normalize_safe(center - boid.position) {
        blend_heading(boid, target_delta, params.cohesion_strength);
    }
}
