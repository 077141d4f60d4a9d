/*
 * Neighbor Finder Module
 *
 * This module finds the K nearest neighbors of a boid by brute force:
 * distance to every boid of the previous generation, a stable ascending
 * sort, then the first K entries that are not the subject itself.
 *
 * O(N log N) per boid is fine for the population sizes this core targets
 * (tens of boids). A spatial index could replace the scan behind the same
 * contract if that ever changes.
 */

use crate::boid::Boid;

// A neighbor reference: distance from the subject plus the index of the
// neighbor in the generation buffer. The index is a weak reference; it
// stays valid because the population is never resized after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub distance: f32,
    pub index: usize,
}

// Find the `count` nearest boids to `previous[subject_index]`, nearest
// first, the subject itself excluded.
//
// Requires count < previous.len(), enforced by parameter validation at
// simulation construction. Exclusion is by index rather than by dropping
// the first sorted entry, so a peer at exactly distance zero can never
// displace the subject's own record and leak it into the result.
pub fn nearest_neighbors(subject_index: usize, previous: &[Boid], count: usize) -> Vec<Neighbor> {
    debug_assert!(subject_index < previous.len());
    debug_assert!(count < previous.len());

    let subject = &previous[subject_index];

    let mut all: Vec<Neighbor> = previous
        .iter()
        .enumerate()
        .map(|(index, other)| Neighbor {
            distance: subject.distance_to(other),
            index,
        })
        .collect();

    // Stable sort: equal distances keep their index order. Distances are
    // never NaN (positions are finite), so total_cmp matches the usual
    // ascending order.
    all.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    all.into_iter()
        .filter(|neighbor| neighbor.index != subject_index)
        .take(count)
        .collect()
}
