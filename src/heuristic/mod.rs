//! Deterministic constructive heuristics.
//!
//! These solvers take the same [`KnapsackInstance`](crate::KnapsackInstance)
//! as the GA and return a [`Chromosome`](crate::ga::Chromosome), which makes
//! them convenient baselines for comparing GA runs.
//!
//! - [`greedy`]: utility/weight ratio fill (Dantzig, 1957)

mod greedy;

pub use greedy::{greedy, greedy_solution, ratio_order, Solution};
