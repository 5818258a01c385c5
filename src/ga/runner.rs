//! GA evolutionary loop execution.
//!
//! [`KnapsackGa`] runs the complete evolutionary process at construction:
//! initialization → (evaluation → selection → crossover → mutation →
//! repair → best tracking) × generations.

use super::config::KnapsackGaConfig;
use super::operators::{bit_flip_mutation, repair, single_point_crossover};
use super::selection::roulette;
use super::types::Chromosome;
use crate::error::{KnapsackError, Result};
use crate::instance::KnapsackInstance;
use rand::Rng;
use tracing::{debug, info, trace};
use u_numflow::random::create_rng;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best chromosome recorded during the run.
    pub best: Chromosome,

    /// Fitness recorded together with `best`.
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best fitness of the initial population, then the best-so-far record
    /// after each generation.
    pub fitness_history: Vec<f64>,

    /// The population after the last generation (repaired unless no
    /// generation ran).
    pub final_population: Vec<Chromosome>,
}

/// Genetic Algorithm solver for a single knapsack instance.
///
/// Construction validates the inputs and executes the whole run; the
/// outcome is then read through [`best`](Self::best),
/// [`best_fitness`](Self::best_fitness) and [`result`](Self::result).
///
/// # Usage
///
/// ```
/// use u_knapsack::ga::{KnapsackGa, KnapsackGaConfig};
/// use u_knapsack::KnapsackInstance;
///
/// let instance = KnapsackInstance::new(
///     vec![5.0, 4.0, 4.0, 2.0],
///     vec![3.0, 2.0, 8.0, 4.0],
///     9.0,
/// )
/// .unwrap();
/// let config = KnapsackGaConfig::default().with_generations(50).with_seed(42);
///
/// let ga = KnapsackGa::new(&instance, &config).unwrap();
/// assert_eq!(ga.best().len(), 4);
/// assert_eq!(ga.result().fitness_history.len(), 51);
/// ```
#[derive(Debug, Clone)]
pub struct KnapsackGa<'a> {
    instance: &'a KnapsackInstance,
    config: KnapsackGaConfig,
    result: GaResult,
}

impl<'a> KnapsackGa<'a> {
    /// Validates the inputs and runs the GA.
    ///
    /// The random source is seeded from `config.seed`, or from entropy when
    /// no seed is set.
    pub fn new(instance: &'a KnapsackInstance, config: &KnapsackGaConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::with_rng(instance, config, &mut rng)
    }

    /// Validates the inputs and runs the GA drawing from `rng`.
    ///
    /// `config.seed` is ignored.
    #[tracing::instrument(level = "debug", skip_all, fields(items = instance.len()))]
    pub fn with_rng<R: Rng>(
        instance: &'a KnapsackInstance,
        config: &KnapsackGaConfig,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        if instance.len() < 3 {
            return Err(KnapsackError::TooFewItems(instance.len()));
        }

        debug!(
            population_size = config.population_size,
            generations = config.generations,
            mutation_probability = config.mutation_probability,
            capacity = instance.capacity(),
            "starting knapsack GA"
        );

        let mut evolution = Evolution::new(instance, config, rng);
        let mut fitness_history = Vec::with_capacity(config.generations + 1);

        let initial_fitness = evolution.evaluate();
        if config.generations == 0 {
            evolution.track_best(&initial_fitness);
        }
        fitness_history.push(initial_fitness.iter().copied().fold(0.0, f64::max));

        for gen in 0..config.generations {
            let repaired = evolution.step(rng);
            fitness_history.push(evolution.best_fitness);
            trace!(
                generation = gen + 1,
                best_fitness = evolution.best_fitness,
                repaired,
                "generation complete"
            );
        }

        info!(
            best_fitness = evolution.best_fitness,
            best = %evolution.best,
            generations = config.generations,
            "knapsack GA finished"
        );

        let result = GaResult {
            best: evolution.best,
            best_fitness: evolution.best_fitness,
            generations: config.generations,
            fitness_history,
            final_population: evolution.population,
        };

        Ok(Self {
            instance,
            config: config.clone(),
            result,
        })
    }

    /// The best chromosome found.
    pub fn best(&self) -> &Chromosome {
        &self.result.best
    }

    /// The fitness recorded with [`best`](Self::best).
    pub fn best_fitness(&self) -> f64 {
        self.result.best_fitness
    }

    /// Selected weight of [`best`](Self::best).
    pub fn best_total_weight(&self) -> f64 {
        self.instance.total_weight(&self.result.best)
    }

    /// Selected utility of [`best`](Self::best), evaluated on the chromosome
    /// as stored.
    pub fn best_total_utility(&self) -> f64 {
        self.instance.total_utility(&self.result.best)
    }

    pub fn instance(&self) -> &KnapsackInstance {
        self.instance
    }

    pub fn config(&self) -> &KnapsackGaConfig {
        &self.config
    }

    /// Full run outcome including history and final population.
    pub fn result(&self) -> &GaResult {
        &self.result
    }

    /// Consumes the solver and returns the run outcome.
    pub fn into_result(self) -> GaResult {
        self.result
    }
}

/// Mutable state of one run: population plus best-so-far record.
struct Evolution<'a> {
    instance: &'a KnapsackInstance,
    mutation_probability: f64,
    population: Vec<Chromosome>,
    best: Chromosome,
    best_fitness: f64,
}

impl<'a> Evolution<'a> {
    /// Random initial population, no repair. The best record starts as the
    /// empty selection with fitness 0.
    fn new<R: Rng>(instance: &'a KnapsackInstance, config: &KnapsackGaConfig, rng: &mut R) -> Self {
        let n = instance.len();
        let population = (0..config.population_size)
            .map(|_| Chromosome::random(n, rng))
            .collect();

        Self {
            instance,
            mutation_probability: config.mutation_probability,
            population,
            best: Chromosome::zeros(n),
            best_fitness: 0.0,
        }
    }

    /// Total utility of every chromosome, feasible or not.
    fn evaluate(&self) -> Vec<f64> {
        self.population
            .iter()
            .map(|c| self.instance.total_utility(c))
            .collect()
    }

    /// Runs one generation and returns how many offspring needed repair.
    ///
    /// Best tracking uses the fitness vector evaluated at the start of the
    /// generation, indexed into the repaired offspring population.
    fn step<R: Rng>(&mut self, rng: &mut R) -> usize {
        let fitness = self.evaluate();
        let size = self.population.len();

        let mut next_gen = Vec::with_capacity(size);
        while next_gen.len() < size {
            let p1 = &self.population[roulette(&fitness, rng)];
            let p2 = &self.population[roulette(&fitness, rng)];
            let (mut c1, mut c2) = single_point_crossover(p1, p2, rng);

            bit_flip_mutation(&mut c1, self.mutation_probability, rng);
            bit_flip_mutation(&mut c2, self.mutation_probability, rng);

            next_gen.push(c1);
            next_gen.push(c2);
        }
        self.population = next_gen;

        let mut repaired = 0;
        for chromosome in &mut self.population {
            if repair(chromosome, self.instance, rng) > 0 {
                repaired += 1;
            }
        }

        self.track_best(&fitness);
        repaired
    }

    /// Replaces the record if the highest fitness (first index on ties)
    /// strictly exceeds it.
    fn track_best(&mut self, fitness: &[f64]) {
        let mut best_idx = 0;
        for (i, &f) in fitness.iter().enumerate() {
            if f > fitness[best_idx] {
                best_idx = i;
            }
        }

        if fitness[best_idx] > self.best_fitness {
            self.best_fitness = fitness[best_idx];
            self.best = self.population[best_idx].clone();
            debug!(
                best_fitness = self.best_fitness,
                best = %self.best,
                "new best chromosome"
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::greedy;

    fn textbook() -> KnapsackInstance {
        KnapsackInstance::new(
            vec![5.0, 4.0, 4.0, 2.0, 4.0, 6.0, 10.0, 4.0, 2.0, 8.0, 12.0, 5.0],
            vec![3.0, 2.0, 8.0, 4.0, 6.0, 4.0, 12.0, 2.0, 6.0, 10.0, 15.0, 9.0],
            36.0,
        )
        .unwrap()
    }

    #[test]
    fn test_textbook_ga_reaches_greedy() {
        let inst = textbook();
        let baseline = greedy(&inst);
        let baseline_utility = inst.total_utility(&baseline);
        assert!(inst.total_weight(&baseline) <= 36.0);

        let config = KnapsackGaConfig::default().with_seed(42);
        let ga = KnapsackGa::new(&inst, &config).unwrap();

        assert!(
            ga.best_fitness() >= baseline_utility,
            "GA best fitness {} below greedy utility {}",
            ga.best_fitness(),
            baseline_utility
        );
        assert_eq!(ga.result().generations, 1000);
        assert_eq!(ga.result().fitness_history.len(), 1001);
    }

    #[test]
    fn test_feasibility_after_every_generation() {
        let inst = textbook();
        let config = KnapsackGaConfig::default()
            .with_population_size(20)
            .with_mutation_probability(0.2);
        let mut rng = create_rng(42);
        let mut evolution = Evolution::new(&inst, &config, &mut rng);

        for gen in 0..200 {
            evolution.step(&mut rng);
            assert_eq!(evolution.population.len(), 20);
            for c in &evolution.population {
                assert_eq!(c.len(), inst.len());
                assert!(
                    inst.is_feasible(c),
                    "generation {gen}: infeasible chromosome {c}"
                );
            }
        }
    }

    #[test]
    fn test_best_fitness_is_monotonic() {
        let inst = textbook();
        let config = KnapsackGaConfig::default()
            .with_generations(300)
            .with_mutation_probability(0.1)
            .with_seed(5);
        let ga = KnapsackGa::new(&inst, &config).unwrap();

        for window in ga.result().fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best fitness decreased: {} -> {}",
                window[0],
                window[1]
            );
        }
        assert_eq!(
            ga.result().fitness_history.last().copied(),
            Some(ga.best_fitness())
        );
    }

    #[test]
    fn test_best_is_feasible_after_generations() {
        let inst = textbook();
        for seed in 0..10 {
            let config = KnapsackGaConfig::default()
                .with_generations(20)
                .with_seed(seed);
            let ga = KnapsackGa::new(&inst, &config).unwrap();
            assert!(ga.best_total_weight() <= inst.capacity());
            assert!(ga.best_fitness() > 0.0);
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let inst = textbook();
        let config = KnapsackGaConfig::default().with_generations(200).with_seed(123);

        let a = KnapsackGa::new(&inst, &config).unwrap();
        let b = KnapsackGa::new(&inst, &config).unwrap();

        assert_eq!(a.best(), b.best());
        assert_eq!(a.best_fitness(), b.best_fitness());
        assert_eq!(a.result().fitness_history, b.result().fitness_history);
        assert_eq!(a.result().final_population, b.result().final_population);
    }

    #[test]
    fn test_injected_rng_matches_seeded_run() {
        let inst = textbook();
        let config = KnapsackGaConfig::default().with_generations(50).with_seed(77);

        let seeded = KnapsackGa::new(&inst, &config).unwrap();
        let mut rng = create_rng(77);
        let injected = KnapsackGa::with_rng(&inst, &config, &mut rng).unwrap();

        assert_eq!(seeded.best(), injected.best());
        assert_eq!(seeded.best_fitness(), injected.best_fitness());
    }

    #[test]
    fn test_zero_generations_returns_initial_best() {
        let inst = textbook();
        let config = KnapsackGaConfig::default().with_generations(0).with_seed(3);
        let ga = KnapsackGa::new(&inst, &config).unwrap();
        let result = ga.result();

        assert_eq!(result.generations, 0);
        assert_eq!(result.fitness_history, vec![result.best_fitness]);

        let initial_max = result
            .final_population
            .iter()
            .map(|c| inst.total_utility(c))
            .fold(0.0, f64::max);
        assert_eq!(result.best_fitness, initial_max);
        assert_eq!(inst.total_utility(&result.best), result.best_fitness);
        assert!(result.final_population.contains(&result.best));
    }

    #[test]
    fn test_history_starts_with_initial_best() {
        let inst = textbook();
        let base = KnapsackGaConfig::default().with_seed(3);

        let none = KnapsackGa::new(&inst, &base.clone().with_generations(0)).unwrap();
        let one = KnapsackGa::new(&inst, &base.with_generations(1)).unwrap();

        let initial_best = none.result().fitness_history[0];
        assert!(initial_best > 0.0);
        assert_eq!(one.result().fitness_history[0], initial_best);
        // The first generation tracks against the initial fitness vector.
        assert_eq!(one.result().fitness_history, vec![initial_best, initial_best]);
    }

    #[test]
    fn test_best_fitness_precedes_breeding_and_repair() {
        let inst = textbook();
        let config = KnapsackGaConfig::default();
        let mut rng = create_rng(3);
        let mut evolution = Evolution::new(&inst, &config, &mut rng);

        let before = evolution.evaluate();
        let mut expected_idx = 0;
        for (i, &f) in before.iter().enumerate() {
            if f > before[expected_idx] {
                expected_idx = i;
            }
        }

        evolution.step(&mut rng);

        // Fitness comes from the population scored before breeding; the
        // chromosome is whatever repaired offspring sits at that index.
        assert_eq!(evolution.best_fitness, before[expected_idx]);
        assert_eq!(evolution.best, evolution.population[expected_idx]);
        assert!(inst.is_feasible(&evolution.best));
        assert!(
            inst.total_utility(&evolution.best) < evolution.best_fitness,
            "stored chromosome should not carry its own utility as fitness"
        );
    }

    #[test]
    fn test_minimum_population() {
        let inst = textbook();
        let config = KnapsackGaConfig::default()
            .with_population_size(2)
            .with_generations(100)
            .with_seed(42);
        let ga = KnapsackGa::new(&inst, &config).unwrap();

        assert_eq!(ga.result().final_population.len(), 2);
        for c in &ga.result().final_population {
            assert!(inst.is_feasible(c));
        }
    }

    #[test]
    fn test_all_zero_utilities_keeps_empty_best() {
        let inst = KnapsackInstance::new(vec![1.0; 5], vec![0.0; 5], 2.0).unwrap();
        let config = KnapsackGaConfig::default().with_generations(30).with_seed(1);
        let ga = KnapsackGa::new(&inst, &config).unwrap();

        assert_eq!(ga.best_fitness(), 0.0);
        assert_eq!(ga.best(), &Chromosome::zeros(5));
    }

    #[test]
    fn test_everything_fits() {
        let inst = KnapsackInstance::new(vec![1.0; 6], vec![2.0; 6], 100.0).unwrap();
        let config = KnapsackGaConfig::default().with_generations(200).with_seed(8);
        let ga = KnapsackGa::new(&inst, &config).unwrap();

        assert_eq!(ga.best_fitness(), 12.0);
        assert!(inst.is_feasible(ga.best()));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let inst = textbook();
        let odd = KnapsackGaConfig::default().with_population_size(7);
        assert_eq!(
            KnapsackGa::new(&inst, &odd).unwrap_err(),
            KnapsackError::InvalidPopulationSize(7)
        );

        let bad_mutation = KnapsackGaConfig::default().with_mutation_probability(1.5);
        assert_eq!(
            KnapsackGa::new(&inst, &bad_mutation).unwrap_err(),
            KnapsackError::InvalidMutationProbability(1.5)
        );

        let tiny = KnapsackInstance::new(vec![1.0, 2.0], vec![1.0, 2.0], 2.0).unwrap();
        assert_eq!(
            KnapsackGa::new(&tiny, &KnapsackGaConfig::default()).unwrap_err(),
            KnapsackError::TooFewItems(2)
        );
    }
}
