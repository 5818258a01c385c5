//! GA configuration.
//!
//! [`KnapsackGaConfig`] holds the fixed parameters of a run. There is no
//! adaptive tuning: the values set here are used unchanged for every
//! generation.

use crate::error::{KnapsackError, Result};

/// Configuration for the knapsack Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_knapsack::ga::KnapsackGaConfig;
///
/// let config = KnapsackGaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 1000);
/// assert!((config.mutation_probability - 0.03).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_knapsack::ga::KnapsackGaConfig;
///
/// let config = KnapsackGaConfig::default()
///     .with_population_size(100)
///     .with_generations(250)
///     .with_mutation_probability(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackGaConfig {
    /// Number of chromosomes in the population. Must be positive and even,
    /// since offspring are produced in pairs.
    pub population_size: usize,

    /// Number of generations to run. Zero keeps the initial population.
    pub generations: usize,

    /// Per-gene flip probability applied to every offspring (0.0–1.0).
    pub mutation_probability: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for KnapsackGaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 1000,
            mutation_probability: 0.03,
            seed: None,
        }
    }
}

impl KnapsackGaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the per-gene mutation probability.
    ///
    /// Not clamped: out-of-range values are reported by
    /// [`validate`](Self::validate).
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 || self.population_size % 2 != 0 {
            return Err(KnapsackError::InvalidPopulationSize(self.population_size));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(KnapsackError::InvalidMutationProbability(
                self.mutation_probability,
            ));
        }
        Ok(())
    }
}
