//! Solvers for the 0/1 knapsack problem.
//!
//! Given items with a weight and a utility, pick a subset that maximizes
//! total utility while keeping total weight within a capacity.
//!
//! - **Genetic Algorithm (GA)**: Holland-style evolutionary search with
//!   roulette selection, single-point crossover, bit-flip mutation and
//!   random-removal repair. See [`ga`].
//! - **Greedy heuristic**: deterministic utility/weight ratio fill, useful
//!   as a baseline. See [`heuristic`].
//!
//! # Example
//!
//! ```
//! use u_knapsack::ga::{KnapsackGa, KnapsackGaConfig};
//! use u_knapsack::heuristic::greedy;
//! use u_knapsack::KnapsackInstance;
//!
//! let instance = KnapsackInstance::new(
//!     vec![5.0, 4.0, 4.0, 2.0, 4.0, 6.0],
//!     vec![3.0, 2.0, 8.0, 4.0, 6.0, 4.0],
//!     12.0,
//! )
//! .unwrap();
//!
//! let config = KnapsackGaConfig::default()
//!     .with_generations(100)
//!     .with_seed(7);
//! let ga = KnapsackGa::new(&instance, &config).unwrap();
//! assert!(ga.best_fitness() >= 0.0);
//!
//! let baseline = greedy(&instance);
//! assert!(instance.is_feasible(&baseline));
//! ```

pub mod error;
pub mod ga;
pub mod heuristic;
mod instance;

pub use error::{KnapsackError, Result};
pub use instance::KnapsackInstance;
