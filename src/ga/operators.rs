//! Binary genetic operators and constraint repair.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: splice two parents at a random interior point
//! - [`crossover_at`]: the same splice at a caller-chosen point
//!
//! # Mutation
//!
//! - [`bit_flip_mutation`]: independent per-gene Bernoulli flips
//!
//! # Repair
//!
//! - [`repair`]: blind random removal of selected items until the capacity
//!   constraint holds
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Michalewicz (1996), *Genetic Algorithms + Data Structures = Evolution
//!   Programs*, ch. 4 (repair for the 0/1 knapsack)

use super::types::Chromosome;
use crate::instance::KnapsackInstance;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover.
///
/// The point is drawn uniformly from `1..=n-2`, so both offspring always
/// carry genes from both parents.
///
/// # Panics
/// Panics if the parents differ in length or are shorter than 3 genes.
pub fn single_point_crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    assert!(n >= 3, "crossover needs at least 3 genes, got {n}");

    let point = rng.random_range(1..n - 1);
    crossover_at(parent1, parent2, point)
}

/// Splices two parents at `point`.
///
/// Offspring A is `parent1[..point] ++ parent2[point..]`; offspring B is the
/// complementary `parent2[..point] ++ parent1[point..]`.
///
/// # Panics
/// Panics if the parents differ in length or `point > n`.
pub fn crossover_at(
    parent1: &Chromosome,
    parent2: &Chromosome,
    point: usize,
) -> (Chromosome, Chromosome) {
    let (a, b) = (parent1.genes(), parent2.genes());
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    assert!(point <= a.len(), "crossover point {point} out of range");

    let child1 = [&a[..point], &b[point..]].concat();
    let child2 = [&b[..point], &a[point..]].concat();

    (Chromosome::from(child1), Chromosome::from(child2))
}

// ============================================================================
// Mutation
// ============================================================================

/// Bit-flip mutation.
///
/// For every gene a value is drawn from `[0, 1)`; the gene flips when the
/// draw is `<= probability`. The expected number of flips is
/// `n * probability`.
///
/// Returns the number of flipped genes.
pub fn bit_flip_mutation<R: Rng>(
    chromosome: &mut Chromosome,
    probability: f64,
    rng: &mut R,
) -> usize {
    let mut flipped = 0;
    for i in 0..chromosome.len() {
        let chance: f64 = rng.random();
        if chance <= probability {
            chromosome.flip(i);
            flipped += 1;
        }
    }
    flipped
}

// ============================================================================
// Repair
// ============================================================================

/// Restores feasibility by deselecting random items.
///
/// While the selected weight exceeds the capacity, one currently selected
/// item is chosen uniformly at random and removed. The choice ignores item
/// weight and utility.
///
/// Returns the number of removed items (0 for an already feasible
/// chromosome).
pub fn repair<R: Rng>(
    chromosome: &mut Chromosome,
    instance: &KnapsackInstance,
    rng: &mut R,
) -> usize {
    let mut removed = 0;
    while instance.total_weight(chromosome) > instance.capacity() {
        let selected = chromosome.selected_indices();
        if selected.is_empty() {
            break;
        }
        let idx = selected[rng.random_range(0..selected.len())];
        chromosome.set(idx, false);
        removed += 1;
    }
    removed
}

// ============================================================================
// Tests
// ============================================================================
