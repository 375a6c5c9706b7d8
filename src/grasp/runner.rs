//! GRASP execution loop.
//!
//! # Algorithm
//!
//! For each iteration, until the iteration cap or the deadline:
//!
//! 1. **Construction**: starting from nobody served, price every remaining
//!    candidate `e` with `S ∪ {e}` served to get its marginal revenue
//!    `Δ(e)`. Build the RCL `{e : Δ(e) >= Δmin + α(Δmax − Δmin)}`, pick one
//!    member uniformly at random and add it. Stop when the best marginal
//!    revenue is negative or no candidates remain.
//! 2. **Local search**: first-improvement descent over add, remove and
//!    exchange moves (see [`local_search`](super::local_search)).
//! 3. Keep the solution if it beats the incumbent.
//!
//! # Reference
//!
//! Feo, T. A. & Resende, M. G. C. (1995). "Greedy Randomized Adaptive
//! Search Procedures", *Journal of Global Optimization* 6, 109-133.

use super::config::GraspConfig;
use super::local_search::{local_search, Solution};
use crate::error::{PricingError, SolveError};
use crate::optimizer::{Deadline, Optimizer, SolveOptions};
use crate::pricing::{price_or_zero, PricingSolver, SimplexPricer};
use crate::problem::{Bounds, ProblemState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Slack when testing RCL membership, so the best candidate is never lost
/// to rounding in `Δmin + α(Δmax − Δmin)`.
const RCL_EPS: f64 = 1e-9;

/// Greedy Randomized Adaptive Search Procedure.
///
/// # Examples
///
/// ```
/// use u_pricing::grasp::{GraspConfig, GraspOptimizer};
/// use u_pricing::optimizer::{Optimizer, SolveOptions};
/// use u_pricing::problem::{Client, Instance, ProblemState};
///
/// let instance = Instance::new(1, vec![
///     Client::new(100.0, [0]),
///     Client::new(50.0, [0]),
/// ]).unwrap();
/// let mut state = ProblemState::new(&instance);
///
/// let grasp = GraspOptimizer::new(GraspConfig::default().with_iterations(5));
/// let result = grasp.solve(&mut state, &SolveOptions::default().with_seed(1)).unwrap();
/// assert!((result.lower_bound - 100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct GraspOptimizer<P = SimplexPricer> {
    config: GraspConfig,
    pricer: P,
}

impl GraspOptimizer {
    /// Creates a GRASP optimizer using the built-in simplex pricer.
    pub fn new(config: GraspConfig) -> Self {
        Self::with_pricer(config, SimplexPricer::default())
    }
}

impl<P: PricingSolver> GraspOptimizer<P> {
    /// Creates a GRASP optimizer with a custom pricing solver.
    pub fn with_pricer(config: GraspConfig, pricer: P) -> Self {
        Self { config, pricer }
    }

    pub fn config(&self) -> &GraspConfig {
        &self.config
    }

    /// Randomized greedy construction.
    fn construct<R: Rng>(
        &self,
        state: &ProblemState,
        deadline: &Deadline,
        rng: &mut R,
    ) -> Result<Solution, PricingError> {
        let mut solution = Solution::empty(state.n_clients(), state.n_products());
        let mut candidates: Vec<usize> = (0..state.n_clients()).collect();
        let mut decisions = solution.decisions.clone();

        while !candidates.is_empty() && !deadline.expired() {
            // Marginal revenue of every remaining candidate.
            let mut evaluated = Vec::with_capacity(candidates.len());
            for &e in &candidates {
                decisions[e] = true;
                let pricing = price_or_zero(&self.pricer, state, &decisions)?;
                decisions[e] = false;
                evaluated.push((pricing.revenue - solution.cost, pricing.prices));
            }

            let (delta_min, delta_max) = evaluated
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (d, _)| {
                    (lo.min(*d), hi.max(*d))
                });
            if delta_max < 0.0 {
                break;
            }

            let threshold = delta_min + self.config.alpha * (delta_max - delta_min);
            let rcl: Vec<usize> = (0..evaluated.len())
                .filter(|&k| evaluated[k].0 + RCL_EPS >= threshold)
                .collect();
            if rcl.is_empty() {
                break;
            }

            let k = rcl[rng.random_range(0..rcl.len())];
            let e = candidates.remove(k);
            let (delta, prices) = evaluated.swap_remove(k);
            decisions[e] = true;
            solution.decisions[e] = true;
            solution.cost += delta;
            solution.prices = prices;
        }

        Ok(solution)
    }
}

impl<P: PricingSolver> Optimizer for GraspOptimizer<P> {
    fn name(&self) -> &str {
        "GRASPOptimizer"
    }

    fn optimize(
        &self,
        state: &mut ProblemState,
        options: &SolveOptions,
    ) -> Result<Bounds, SolveError> {
        self.config.validate().map_err(SolveError::InvalidConfig)?;

        state.reset();
        let deadline = Deadline::after(options.timeout);
        let mut rng = StdRng::seed_from_u64(options.seed);

        let mut best = Solution::empty(state.n_clients(), state.n_products());
        let mut iterations_run = 0usize;

        for iteration in 0..self.config.iterations {
            if deadline.expired() {
                break;
            }
            iterations_run += 1;

            let constructed = self.construct(state, &deadline, &mut rng)?;
            let constructed_cost = constructed.cost;
            let outcome = local_search(&self.pricer, state, constructed, &deadline)?;

            if options.debug() {
                tracing::debug!(
                    iteration,
                    constructed = constructed_cost,
                    improved = outcome.solution.cost,
                    moves = outcome.moves.len(),
                    "GRASP iteration"
                );
            }

            if outcome.solution.cost > best.cost {
                best = outcome.solution;
                if options.summary() {
                    tracing::info!(iteration, best = best.cost, "GRASP: new incumbent");
                }
            }
        }

        if options.summary() && iterations_run < self.config.iterations {
            tracing::info!(
                iterations_run,
                planned = self.config.iterations,
                "GRASP stopped at the deadline"
            );
        }

        state.set_all_decisions(&best.decisions);
        state.set_prices(&best.prices);

        Ok(Bounds {
            lower_bound: best.cost,
            upper_bound: state.maximum_revenue(),
        })
    }
}
