//! Genetic Algorithm for the 0/1 knapsack problem.
//!
//! A classic Holland-style GA over binary chromosomes. Each generation
//! evaluates total utility, breeds a full replacement population through
//! roulette selection, single-point crossover and bit-flip mutation, then
//! repairs overweight offspring by removing random items.
//!
//! # Key Types
//!
//! - [`KnapsackGaConfig`]: Run parameters (population size, generations,
//!   mutation probability, seed)
//! - [`KnapsackGa`]: Validates inputs and executes the run on construction
//! - [`GaResult`]: Best chromosome, its fitness and the best-fitness history
//! - [`Chromosome`]: Binary item-selection vector
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover, bit-flip mutation and repair
//! - [`selection`]: Roulette wheel selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::KnapsackGaConfig;
pub use runner::{GaResult, KnapsackGa};
pub use types::Chromosome;
