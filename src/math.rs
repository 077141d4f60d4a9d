/*
 * Geometry Module
 *
 * Pure vector and angle helpers used by the simulation and by rendering
 * collaborators that need to orient a marker along a boid's heading.
 *
 * Vector primitives (length, cross product) come from glam; this module adds
 * the zero-length normalization guard, angle conversions, pitch/yaw
 * extraction from a direction vector, and triangle normal computation.
 */

use glam::Vec3;

// Normalize a vector to unit length.
// Returns None for zero-length (or non-finite) input, where normalization
// is undefined; callers skip the contribution instead of producing NaN.
#[inline]
pub fn normalize_safe(vector: Vec3) -> Option<Vec3> {
    vector.try_normalize()
}

// Convert an angle from degrees to radians.
#[inline]
pub fn degree_to_radian(degree: f32) -> f32 {
    degree.to_radians()
}

// Convert an angle from radians to degrees.
#[inline]
pub fn radian_to_degree(radian: f32) -> f32 {
    radian.to_degrees()
}

// Pitch of a unit direction vector in degrees: elevation above the
// horizontal XZ plane.
pub fn pitch_degrees(direction: Vec3) -> f32 {
    radian_to_degree(direction.y.clamp(-1.0, 1.0).asin())
}

// Yaw of a direction vector in degrees: rotation around the vertical axis,
// measured from +Z toward +X.
pub fn yaw_degrees(direction: Vec3) -> f32 {
    radian_to_degree(direction.x.atan2(direction.z))
}

// Build a unit direction vector from pitch and yaw angles in radians.
// Inverse of the pitch/yaw extraction above.
pub fn direction_from_angles(pitch: f32, yaw: f32) -> Vec3 {
    Vec3::new(
        pitch.cos() * yaw.sin(),
        pitch.sin(),
        pitch.cos() * yaw.cos(),
    )
}

// Normalized surface normal of the triangle (p1, p2, p3), right-hand rule.
// Returns None for degenerate (collinear) triangles.
pub fn surface_normal(p1: Vec3, p2: Vec3, p3: Vec3) -> Option<Vec3> {
    normalize_safe((p2 - p1).cross(p3 - p1))
}
