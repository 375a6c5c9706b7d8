//! GA evolutionary loop execution.
//!
//! [`GaOptimizer`] orchestrates the evolutionary process:
//! evaluation → selection → crossover → mutation → elitist truncation → repeat.

use super::config::GaConfig;
use super::operators::{bit_flip_mutation, one_point_crossover, uniform_crossover};
use super::types::Chromosome;
use crate::error::{PricingError, SolveError};
use crate::optimizer::{Deadline, Optimizer, SolveOptions};
use crate::pricing::{price_or_zero, PricingSolver, SimplexPricer};
use crate::problem::{Bounds, ProblemState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of one evolutionary run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best chromosome found during the entire run (evaluated).
    pub best: Chromosome,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Number of stagnation restarts performed.
    pub restarts: usize,

    /// Best fitness after initialization and at the end of each generation.
    pub fitness_history: Vec<f64>,
}

/// Bitstring genetic algorithm over serve / don't-serve decisions.
///
/// # Examples
///
/// ```
/// use u_pricing::ga::{GaConfig, GaOptimizer};
/// use u_pricing::optimizer::{Optimizer, SolveOptions};
/// use u_pricing::problem::{Client, Instance, ProblemState};
///
/// let instance = Instance::new(1, vec![
///     Client::new(100.0, [0]),
///     Client::new(50.0, [0]),
/// ]).unwrap();
/// let mut state = ProblemState::new(&instance);
///
/// let ga = GaOptimizer::new(GaConfig::default().with_num_generations(10));
/// let result = ga.solve(&mut state, &SolveOptions::default()).unwrap();
/// assert!((result.lower_bound - 100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct GaOptimizer<P = SimplexPricer> {
    config: GaConfig,
    pricer: P,
}

impl GaOptimizer {
    /// Creates a GA optimizer using the built-in simplex pricer.
    pub fn new(config: GaConfig) -> Self {
        Self::with_pricer(config, SimplexPricer::default())
    }
}

impl<P: PricingSolver> GaOptimizer<P> {
    /// Creates a GA optimizer with a custom pricing solver.
    pub fn with_pricer(config: GaConfig, pricer: P) -> Self {
        Self { config, pricer }
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs the evolutionary loop without touching the state's decisions
    /// or prices.
    ///
    /// Stops after `num_generations` or once the deadline in `options`
    /// expires, whichever comes first. The returned best chromosome is
    /// always evaluated.
    pub fn evolve(
        &self,
        state: &ProblemState,
        options: &SolveOptions,
    ) -> Result<GaResult, SolveError> {
        self.config.validate().map_err(SolveError::InvalidConfig)?;

        let config = &self.config;
        let deadline = Deadline::after(options.timeout);
        let mut rng = StdRng::seed_from_u64(options.seed);
        let n_genes = state.n_clients();

        // 1. Initialize and evaluate
        let mut population: Vec<Chromosome> = (0..config.pop_size)
            .map(|_| Chromosome::random(n_genes, &mut rng))
            .collect();
        self.evaluate_all(state, &mut population)?;
        sort_descending(&mut population);

        let mut best = population[0].clone();
        let mut best_fitness = fitness_of(&best);
        let mut fitness_history = Vec::with_capacity(config.num_generations + 1);
        fitness_history.push(best_fitness);

        let mut stagnation_counter = 0usize;
        let mut restarts = 0usize;
        let mut generations = 0usize;

        // 2. Evolutionary loop
        for gen in 0..config.num_generations {
            if deadline.expired() {
                break;
            }

            // Restarted chromosomes come back unevaluated.
            self.evaluate_all(state, &mut population)?;

            let mut offspring = self.breed(&population, &mut rng);
            self.evaluate_all(state, &mut offspring)?;

            // Elitist truncation over parents + offspring
            population.append(&mut offspring);
            sort_descending(&mut population);
            population.truncate(config.pop_size);
            generations = gen + 1;

            let gen_best = fitness_of(&population[0]);
            if gen_best > best_fitness {
                best = population[0].clone();
                best_fitness = gen_best;
                stagnation_counter = 0;
                if options.summary() {
                    tracing::info!(generation = gen, best = best_fitness, "GA: new incumbent");
                }
            } else {
                stagnation_counter += 1;
            }
            fitness_history.push(best_fitness);

            if options.debug() {
                let mean =
                    population.iter().map(fitness_of).sum::<f64>() / population.len() as f64;
                tracing::debug!(
                    generation = gen,
                    best = gen_best,
                    mean,
                    stagnation_counter,
                    "GA generation"
                );
            }

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                let k = config.restart_count.min(config.pop_size - 1);
                let start = population.len() - k;
                for chromosome in &mut population[start..] {
                    *chromosome = Chromosome::random(n_genes, &mut rng);
                }
                restarts += 1;
                stagnation_counter = 0;
                if options.debug() {
                    tracing::debug!(generation = gen, restarted = k, "GA: stagnation restart");
                }
            }
        }

        if options.summary() && generations < config.num_generations {
            tracing::info!(
                generations,
                planned = config.num_generations,
                "GA stopped at the deadline"
            );
        }

        Ok(GaResult {
            best,
            best_fitness,
            generations,
            restarts,
            fitness_history,
        })
    }

    /// Selects `pop_size` parents, pairs them in draw order and produces two
    /// mutated children per pair.
    fn breed<R: Rng>(&self, population: &[Chromosome], rng: &mut R) -> Vec<Chromosome> {
        let config = &self.config;
        let fitness: Vec<f64> = population.iter().map(fitness_of).collect();
        let parents: Vec<usize> = (0..config.pop_size)
            .map(|_| config.selection.select(&fitness, rng))
            .collect();

        let mut offspring = Vec::with_capacity(config.pop_size + 1);
        for pair in parents.chunks(2) {
            // An odd parent out is paired with the first draw.
            let a = population[pair[0]].genes();
            let b = population[pair.get(1).copied().unwrap_or(parents[0])].genes();

            let (mut c1, mut c2) = if config.uniform_cross {
                uniform_crossover(a, b, rng)
            } else {
                one_point_crossover(a, b, rng)
            };
            bit_flip_mutation(&mut c1, config.mut_rate, rng);
            bit_flip_mutation(&mut c2, config.mut_rate, rng);

            offspring.push(Chromosome::from_genes(c1));
            offspring.push(Chromosome::from_genes(c2));
        }
        offspring.truncate(config.pop_size);
        offspring
    }

    /// Evaluates every chromosome whose fitness is not cached.
    #[cfg(not(feature = "parallel"))]
    fn evaluate_all(
        &self,
        state: &ProblemState,
        population: &mut [Chromosome],
    ) -> Result<(), PricingError> {
        population
            .iter_mut()
            .try_for_each(|c| c.evaluate(&self.pricer, state).map(drop))
    }

    /// Evaluates every chromosome whose fitness is not cached, in parallel.
    #[cfg(feature = "parallel")]
    fn evaluate_all(
        &self,
        state: &ProblemState,
        population: &mut [Chromosome],
    ) -> Result<(), PricingError> {
        use rayon::prelude::*;

        population
            .par_iter_mut()
            .try_for_each(|c| c.evaluate(&self.pricer, state).map(drop))
    }
}

impl<P: PricingSolver> Optimizer for GaOptimizer<P> {
    fn name(&self) -> &str {
        "GeneticAlgorithmOptimizer"
    }

    fn optimize(
        &self,
        state: &mut ProblemState,
        options: &SolveOptions,
    ) -> Result<Bounds, SolveError> {
        state.reset();
        let result = self.evolve(state, options)?;

        if options.summary() {
            tracing::info!(
                best = result.best_fitness,
                generations = result.generations,
                restarts = result.restarts,
                "GA finished"
            );
        }

        // Fitness keeps only revenue; re-price the winner for its prices.
        let pricing = price_or_zero(&self.pricer, state, result.best.genes())?;
        state.set_all_decisions(result.best.genes());
        state.set_prices(&pricing.prices);

        Ok(Bounds {
            lower_bound: result.best_fitness,
            upper_bound: state.maximum_revenue(),
        })
    }
}

/// Fitness of an evaluated chromosome; unevaluated ones rank last.
fn fitness_of(chromosome: &Chromosome) -> f64 {
    chromosome.fitness().unwrap_or(f64::NEG_INFINITY)
}

/// Best first. Stable, so parents win ties against offspring.
fn sort_descending(population: &mut [Chromosome]) {
    population.sort_by(|a, b| fitness_of(b).total_cmp(&fitness_of(a)));
}
