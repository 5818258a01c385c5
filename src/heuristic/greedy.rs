//! Greedy utility/weight ratio heuristic.
//!
//! Items are visited in descending order of `utility / weight` and packed
//! whenever they still fit. O(n log n), deterministic, and usually a good
//! but not optimal answer.

use crate::ga::Chromosome;
use crate::instance::KnapsackInstance;
use std::cmp::Ordering;

/// A solved selection with its totals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub chromosome: Chromosome,
    pub total_weight: f64,
    pub total_utility: f64,
}

/// Item indices in the order the greedy fill visits them.
///
/// Sorted by descending utility/weight ratio; equal ratios put the higher
/// index first. A zero-weight item ranks first when it has positive utility
/// and last otherwise.
pub fn ratio_order(instance: &KnapsackInstance) -> Vec<usize> {
    let ratios: Vec<f64> = instance
        .weights()
        .iter()
        .zip(instance.utilities())
        .map(|(&w, &u)| match (w > 0.0, u > 0.0) {
            (true, _) => u / w,
            (false, true) => f64::INFINITY,
            (false, false) => 0.0,
        })
        .collect();

    let mut order: Vec<usize> = (0..instance.len()).collect();
    order.sort_by(|&a, &b| {
        ratios[b]
            .partial_cmp(&ratios[a])
            .unwrap_or(Ordering::Equal)
            .then(b.cmp(&a))
    });
    order
}

/// Packs items greedily by utility/weight ratio.
///
/// # Examples
///
/// ```
/// use u_knapsack::heuristic::greedy;
/// use u_knapsack::KnapsackInstance;
///
/// let instance = KnapsackInstance::new(
///     vec![10.0, 4.0, 3.0],
///     vec![10.0, 8.0, 9.0],
///     7.0,
/// )
/// .unwrap();
/// assert_eq!(greedy(&instance).to_string(), "011");
/// ```
pub fn greedy(instance: &KnapsackInstance) -> Chromosome {
    let mut chromosome = Chromosome::zeros(instance.len());
    let mut load = 0.0;

    for i in ratio_order(instance) {
        let w = instance.weights()[i];
        if load + w <= instance.capacity() {
            chromosome.set(i, true);
            load += w;
        }
    }
    chromosome
}

/// Runs [`greedy`] and reports the totals of its selection.
pub fn greedy_solution(instance: &KnapsackInstance) -> Solution {
    let chromosome = greedy(instance);
    Solution {
        total_weight: instance.total_weight(&chromosome),
        total_utility: instance.total_utility(&chromosome),
        chromosome,
    }
}
