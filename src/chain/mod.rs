//! Warm-start chaining: greedy first, then branch and bound seeded with
//! the greedy solution.
//!
//! The chain's own work is bookkeeping: the greedy stage runs silently, its
//! decisions and prices become the exact stage's [`WarmStart`], and the
//! exact stage gets whatever is left of the timeout.

use crate::error::SolveError;
use crate::exact::{ExactConfig, ExactOptimizer, WarmStart};
use crate::greedy::GreedyOptimizer;
use crate::optimizer::{Optimizer, SolveOptions, Verbosity};
use crate::pricing::{PricingSolver, SimplexPricer};
use crate::problem::{Bounds, ProblemState};

/// Greedy heuristic followed by a warm-started exact search.
///
/// # Examples
///
/// ```
/// use u_pricing::chain::WarmStartChain;
/// use u_pricing::exact::ExactConfig;
/// use u_pricing::optimizer::{Optimizer, SolveOptions};
/// use u_pricing::problem::{Client, Instance, ProblemState};
///
/// let instance = Instance::new(2, vec![
///     Client::new(30.0, [0, 1]),
///     Client::new(20.0, [1]),
/// ]).unwrap();
/// let mut state = ProblemState::new(&instance);
///
/// let result = WarmStartChain::new(ExactConfig::default())
///     .solve(&mut state, &SolveOptions::default())
///     .unwrap();
/// assert_eq!(result.name, "WarmStartChain");
/// assert!(result.is_valid);
/// ```
#[derive(Debug, Clone)]
pub struct WarmStartChain<P = SimplexPricer> {
    greedy: GreedyOptimizer<P>,
    exact: ExactOptimizer<P>,
}

impl WarmStartChain {
    /// Creates a chain using the built-in simplex pricer for both stages.
    pub fn new(config: ExactConfig) -> Self {
        Self::with_pricer(config, SimplexPricer::default())
    }
}

impl<P: PricingSolver + Clone> WarmStartChain<P> {
    /// Creates a chain whose stages share a custom pricing solver.
    pub fn with_pricer(config: ExactConfig, pricer: P) -> Self {
        Self {
            greedy: GreedyOptimizer::with_pricer(pricer.clone()),
            exact: ExactOptimizer::with_pricer(config, pricer),
        }
    }
}

impl<P: PricingSolver + Clone> Optimizer for WarmStartChain<P> {
    fn name(&self) -> &str {
        "WarmStartChain"
    }

    fn optimize(
        &self,
        state: &mut ProblemState,
        options: &SolveOptions,
    ) -> Result<Bounds, SolveError> {
        let silent = options.clone().with_verbose(Verbosity::Silent);
        let greedy = self.greedy.solve(state, &silent)?;

        // Greedy reorders the state's clients; the warm start is indexed by
        // that order and the exact stage keeps it.
        let warm_start = WarmStart::new(state.decisions().to_vec(), state.prices().to_vec());
        let remaining = options.timeout.saturating_sub(greedy.elapsed_time);

        if options.summary() {
            tracing::info!(
                greedy = greedy.lower_bound,
                greedy_secs = greedy.elapsed_time.as_secs_f64(),
                remaining_secs = remaining.as_secs_f64(),
                "warm-start chain: greedy stage done"
            );
        }

        let exact = self.exact.clone().with_warm_start(warm_start);
        exact.optimize(state, &options.clone().with_timeout(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{Client, Instance};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    #[test]
    fn test_single_product_two_clients() {
        let instance =
            Instance::new(1, vec![Client::new(100.0, [0]), Client::new(50.0, [0])]).unwrap();
        let mut state = ProblemState::new(&instance);
        let result = WarmStartChain::new(ExactConfig::default())
            .solve(&mut state, &SolveOptions::default())
            .unwrap();
        assert_eq!(result.name, "WarmStartChain");
        assert!((result.lower_bound - 100.0).abs() < 1e-9);
        assert!((result.upper_bound - 100.0).abs() < 1e-9);
        assert!(result.is_valid);
    }

    #[test]
    fn test_never_below_greedy() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..4 {
            let instance = Instance::generate(5, 12, &mut rng).unwrap();

            let mut greedy_state = ProblemState::new(&instance);
            let greedy = GreedyOptimizer::new()
                .solve(&mut greedy_state, &SolveOptions::default())
                .unwrap();

            // A node limit of 1 leaves the chain almost nothing but the warm start.
            let mut state = ProblemState::new(&instance);
            let chain = WarmStartChain::new(ExactConfig::default().with_max_nodes(1))
                .solve(&mut state, &SolveOptions::default())
                .unwrap();

            assert!(chain.is_valid);
            assert!(chain.lower_bound >= greedy.lower_bound - 1e-6);
            assert!(chain.lower_bound <= chain.upper_bound + 1e-9);
        }
    }

    #[test]
    fn test_not_below_cold_exact_under_node_limit() {
        for seed in 0..20 {
            let instance = Instance::generate(6, 14, &mut StdRng::seed_from_u64(seed)).unwrap();
            for max_nodes in [2, 5, 10, 20, 40] {
                let config = ExactConfig::default().with_max_nodes(max_nodes);

                let mut cold_state = ProblemState::new(&instance);
                cold_state.sort_clients_by_budget_desc();
                let cold = ExactOptimizer::new(config.clone())
                    .solve(&mut cold_state, &SolveOptions::default())
                    .unwrap();

                let mut state = ProblemState::new(&instance);
                let chain = WarmStartChain::new(config)
                    .solve(&mut state, &SolveOptions::default())
                    .unwrap();

                assert!(
                    chain.lower_bound >= cold.lower_bound - 1e-6,
                    "seed {seed}, max_nodes {max_nodes}: chain {} < cold {}",
                    chain.lower_bound,
                    cold.lower_bound
                );
            }
        }
    }

    #[test]
    fn test_zero_timeout_returns_greedy_solution() {
        let instance = Instance::generate(4, 10, &mut StdRng::seed_from_u64(3)).unwrap();

        let mut greedy_state = ProblemState::new(&instance);
        let greedy = GreedyOptimizer::new()
            .solve(&mut greedy_state, &SolveOptions::default())
            .unwrap();

        let mut state = ProblemState::new(&instance);
        let chain = WarmStartChain::new(ExactConfig::default())
            .solve(&mut state, &SolveOptions::default().with_timeout(Duration::ZERO))
            .unwrap();

        assert!((chain.lower_bound - greedy.lower_bound).abs() < 1e-9);
        assert_eq!(state.decisions(), greedy_state.decisions());
        assert!(chain.is_valid);
    }

    #[test]
    fn test_optimal_when_unrestricted() {
        let instance = Instance::generate(4, 9, &mut StdRng::seed_from_u64(6)).unwrap();

        let mut exact_state = ProblemState::new(&instance);
        let exact = ExactOptimizer::new(ExactConfig::default())
            .solve(&mut exact_state, &SolveOptions::default())
            .unwrap();

        let mut state = ProblemState::new(&instance);
        let chain = WarmStartChain::new(ExactConfig::default())
            .solve(&mut state, &SolveOptions::default())
            .unwrap();

        assert!((chain.lower_bound - exact.lower_bound).abs() < 1e-6);
        assert!(chain.gap().abs() < 1e-9);
    }
}
