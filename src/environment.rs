/*
 * Environment Module
 *
 * This module defines the Environment struct describing the simulation
 * volume: a cylindrical wall in the XZ plane plus a floor and a ceiling.
 * The descriptor is fixed for the run and only answers distance queries;
 * boundary reactions live in the behavior module.
 *
 * All distances are signed: negative means the position is outside the
 * corresponding boundary.
 */

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub radius: f32,    // wall radius from the vertical axis in the XZ plane
    pub floor_y: f32,   // y coordinate of the floor
    pub ceiling_y: f32, // y coordinate of the ceiling
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            radius: 10.0,
            floor_y: -1.0,
            ceiling_y: 10.0,
        }
    }
}

impl Environment {
    // Signed distance from a position to the cylindrical wall.
    #[inline]
    pub fn distance_to_wall(&self, position: Vec3) -> f32 {
        let distance_to_axis =
            (position.x * position.x + position.z * position.z).sqrt();
        self.radius - distance_to_axis
    }

    // Signed distance from a position to the floor.
    #[inline]
    pub fn distance_to_floor(&self, position: Vec3) -> f32 {
        position.y - self.floor_y
    }

    // Signed distance from a position to the ceiling.
    #[inline]
    pub fn distance_to_ceiling(&self, position: Vec3) -> f32 {
        self.ceiling_y - position.y
    }

    // Minimum signed distance to any boundary surface. The behavior
    // selector compares this against the avoidance trigger each tick.
    pub fn min_distance(&self, position: Vec3) -> f32 {
        self.distance_to_wall(position)
            .min(self.distance_to_floor(position))
            .min(self.distance_to_ceiling(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_distance_shrinks_toward_the_rim() {
        let environment = Environment::default();
        assert_eq!(environment.distance_to_wall(Vec3::new(0.0, 4.0, 0.0)), 10.0);
        let near_rim = environment.distance_to_wall(Vec3::new(9.0, 4.0, 0.0));
        assert!((near_rim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn distances_are_negative_outside_the_volume() {
        let environment = Environment::default();
        assert!(environment.distance_to_wall(Vec3::new(12.0, 4.0, 0.0)) < 0.0);
        assert!(environment.distance_to_floor(Vec3::new(0.0, -3.0, 0.0)) < 0.0);
        assert!(environment.distance_to_ceiling(Vec3::new(0.0, 11.0, 0.0)) < 0.0);
    }

    #[test]
    fn min_distance_matches_componentwise_minimum() {
        let environment = Environment {
            radius: 7.5,
            floor_y: -2.0,
            ceiling_y: 6.0,
        };

        // Synthetic positions chosen so each surface is the closest in turn,
        // plus corner cases where two surfaces tie.
        let positions = [
            Vec3::new(7.0, 2.0, 0.0),
            Vec3::new(0.0, -1.5, 0.0),
            Vec3::new(0.0, 5.9, 0.0),
            Vec3::new(3.0, 3.0, 4.0),
            Vec3::new(-6.0, -1.9, 1.0),
            Vec3::new(0.0, 2.0, 7.4),
        ];

        for position in positions {
            let wall = 7.5 - (position.x * position.x + position.z * position.z).sqrt();
            let floor = position.y + 2.0;
            let ceiling = 6.0 - position.y;
            let expected = wall.min(floor).min(ceiling);
            assert_eq!(environment.min_distance(position), expected);
        }
    }
}
