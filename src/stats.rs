/*
 * Tick Diagnostics Module
 *
 * This module defines the TickStats struct with per-tick counters the
 * simulation refreshes after every step. Callers poll it to display or
 * record how the population split between boundary avoidance and flocking
 * and how long the step took.
 */

use std::time::Duration;

// Diagnostics for the most recent tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    pub avoidance_count: usize,   // boids that ran boundary avoidance
    pub flocking_count: usize,    // boids that ran neighbor flocking
    pub tick_duration: Duration,  // wall-clock time of the whole step
}
