//! Fitness-proportionate parent selection.
//!
//! Knapsack fitness is total utility, which is non-negative and larger is
//! better, so raw fitness values are used directly as roulette weights.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1

use rand::Rng;

/// Roulette wheel selection over a fitness vector.
///
/// Draws a threshold uniformly from `[0, sum(fitness))` and returns the first
/// index whose cumulative fitness reaches it. When every fitness is zero the
/// wheel collapses to the point 0 and index 0 is always returned. If the
/// plain sum overflows, weights are scaled by the largest fitness first.
///
/// # Complexity
/// O(n) per selection (linear scan)
///
/// # Panics
/// Panics if `fitness` is empty.
pub fn roulette<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    assert!(!fitness.is_empty(), "cannot select from empty population");

    let mut scale = 1.0;
    let mut total: f64 = fitness.iter().sum();
    if !total.is_finite() {
        let max = fitness.iter().copied().fold(0.0, f64::max);
        scale = 1.0 / max;
        total = fitness.iter().map(|&f| f * scale).sum();
    }

    let threshold = if total > 0.0 {
        rng.random_range(0.0..total)
    } else {
        0.0
    };

    let mut cumulative = 0.0;
    for (i, &f) in fitness.iter().enumerate() {
        cumulative += f * scale;
        if threshold <= cumulative {
            return i;
        }
    }

    fitness.len() - 1 // floating-point fallback
}
