//! Greedy construction by descending budget.
//!
//! # Algorithm
//!
//! 1. Sort clients by descending budget
//! 2. For each client j in that order, tentatively serve j:
//!    a. If j is first, or j cannot afford its bundle at the current
//!    prices (`bundle_cost >= budget`), re-solve the pricing subproblem;
//!    keep j and the new prices only if revenue strictly improves,
//!    otherwise un-serve j
//!    b. Otherwise j already affords its bundle: keep j and the current
//!    prices, and recompute revenue without a pricing call
//! 3. Lower bound = final revenue, upper bound = sum of budgets
//!
//! Step 2b keeps prices that may be suboptimal for the enlarged served set;
//! re-pricing there could raise revenue. Left as is pending review.

use crate::error::SolveError;
use crate::optimizer::{Optimizer, SolveOptions};
use crate::pricing::{price_or_zero, PricingSolver, SimplexPricer};
use crate::problem::{Bounds, ProblemState};

/// Deterministic single-pass greedy heuristic.
///
/// # Examples
///
/// ```
/// use u_pricing::greedy::GreedyOptimizer;
/// use u_pricing::optimizer::{Optimizer, SolveOptions};
/// use u_pricing::problem::{Client, Instance, ProblemState};
///
/// let instance = Instance::new(1, vec![
///     Client::new(100.0, [0]),
///     Client::new(50.0, [0]),
/// ]).unwrap();
/// let mut state = ProblemState::new(&instance);
///
/// let result = GreedyOptimizer::new().solve(&mut state, &SolveOptions::default()).unwrap();
/// assert!((result.lower_bound - 100.0).abs() < 1e-9);
/// assert!(result.is_valid);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyOptimizer<P = SimplexPricer> {
    pricer: P,
}

impl GreedyOptimizer {
    /// Creates a greedy optimizer using the built-in simplex pricer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: PricingSolver> GreedyOptimizer<P> {
    /// Creates a greedy optimizer with a custom pricing solver.
    pub fn with_pricer(pricer: P) -> Self {
        Self { pricer }
    }
}

impl<P: PricingSolver> Optimizer for GreedyOptimizer<P> {
    fn name(&self) -> &str {
        "GreedyHeuristicOptimizer"
    }

    fn optimize(
        &self,
        state: &mut ProblemState,
        options: &SolveOptions,
    ) -> Result<Bounds, SolveError> {
        state.reset();
        state.sort_clients_by_budget_desc();

        let mut best_cost = 0.0;
        let mut pricing_calls = 0usize;

        for j in 0..state.n_clients() {
            state.set_decision(j, true);

            let client = &state.clients()[j];
            let current_cost = ProblemState::bundle_cost(state.prices(), client);

            if j == 0 || current_cost >= client.budget {
                let pricing = price_or_zero(&self.pricer, state, state.decisions())?;
                pricing_calls += 1;
                if pricing.revenue > best_cost {
                    best_cost = pricing.revenue;
                    state.set_prices(&pricing.prices);
                    if options.debug() {
                        tracing::debug!(client = j, revenue = best_cost, "greedy: re-priced");
                    }
                } else {
                    state.set_decision(j, false);
                }
            } else {
                // Current prices already fit this client's budget; its
                // payment is added without re-solving.
                best_cost = state.current_revenue();
                if options.debug() {
                    tracing::debug!(client = j, revenue = best_cost, "greedy: accepted at current prices");
                }
            }
        }

        if options.summary() {
            let served = state.decisions().iter().filter(|&&x| x).count();
            tracing::info!(
                revenue = best_cost,
                served,
                pricing_calls,
                "greedy construction finished"
            );
        }

        Ok(Bounds {
            lower_bound: best_cost,
            upper_bound: state.maximum_revenue(),
        })
    }
}
