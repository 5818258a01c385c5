//! Problem instance: item weights, utilities and the knapsack capacity.

use crate::error::{KnapsackError, Result};
use crate::ga::Chromosome;

/// A validated 0/1 knapsack instance.
///
/// Weights and utilities are parallel sequences; item `i` has weight
/// `weights[i]` and utility `utilities[i]`. The instance is immutable once
/// built and is only borrowed by the solvers.
///
/// # Examples
///
/// ```
/// use u_knapsack::{KnapsackError, KnapsackInstance};
///
/// let ok = KnapsackInstance::new(vec![2.0, 3.0, 4.0], vec![3.0, 4.0, 5.0], 5.0);
/// assert!(ok.is_ok());
///
/// let bad = KnapsackInstance::new(vec![2.0, 3.0], vec![3.0], 5.0);
/// assert_eq!(
///     bad.unwrap_err(),
///     KnapsackError::LengthMismatch { weights: 2, utilities: 1 }
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackInstance {
    weights: Vec<f64>,
    utilities: Vec<f64>,
    capacity: f64,
}

impl KnapsackInstance {
    /// Builds an instance, rejecting mismatched lengths, any negative or
    /// non-finite weight, utility or capacity, and item totals that overflow.
    pub fn new(weights: Vec<f64>, utilities: Vec<f64>, capacity: f64) -> Result<Self> {
        if weights.len() != utilities.len() {
            return Err(KnapsackError::LengthMismatch {
                weights: weights.len(),
                utilities: utilities.len(),
            });
        }
        if let Some((index, &value)) = weights.iter().enumerate().find(|(_, w)| !is_amount(**w)) {
            return Err(KnapsackError::InvalidWeight { index, value });
        }
        if let Some((index, &value)) = utilities.iter().enumerate().find(|(_, u)| !is_amount(**u)) {
            return Err(KnapsackError::InvalidUtility { index, value });
        }
        if !is_amount(capacity) {
            return Err(KnapsackError::InvalidCapacity(capacity));
        }
        if !weights.iter().sum::<f64>().is_finite() {
            return Err(KnapsackError::NonFiniteTotal("weight"));
        }
        if !utilities.iter().sum::<f64>().is_finite() {
            return Err(KnapsackError::NonFiniteTotal("utility"));
        }

        Ok(Self {
            weights,
            utilities,
            capacity,
        })
    }

    /// Number of items (the chromosome length).
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if the instance has no items.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn utilities(&self) -> &[f64] {
        &self.utilities
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Total weight of the items selected by `chromosome`.
    ///
    /// `chromosome` must have [`len`](Self::len) genes.
    pub fn total_weight(&self, chromosome: &Chromosome) -> f64 {
        selected_sum(chromosome, &self.weights)
    }

    /// Total utility of the items selected by `chromosome`.
    ///
    /// This is the GA fitness; it ignores the capacity constraint.
    pub fn total_utility(&self, chromosome: &Chromosome) -> f64 {
        selected_sum(chromosome, &self.utilities)
    }

    /// Returns `true` if the selected weight does not exceed the capacity.
    pub fn is_feasible(&self, chromosome: &Chromosome) -> bool {
        self.total_weight(chromosome) <= self.capacity
    }
}

fn is_amount(x: f64) -> bool {
    x.is_finite() && x >= 0.0
}

/// `chromosome` must have one gene per item.
fn selected_sum(chromosome: &Chromosome, values: &[f64]) -> f64 {
    debug_assert_eq!(
        chromosome.len(),
        values.len(),
        "chromosome length does not match item count"
    );
    chromosome
        .genes()
        .iter()
        .zip(values)
        .filter(|&(&selected, _)| selected)
        .map(|(_, &v)| v)
        .sum()
}
