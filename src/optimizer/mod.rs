//! The optimizer contract shared by every strategy.
//!
//! A strategy implements [`Optimizer::optimize`]: it mutates the
//! [`ProblemState`] to hold its final decisions and prices and reports
//! [`Bounds`]. The provided [`Optimizer::solve`] wraps that call with
//! timing and an independent feasibility check, producing a
//! [`SolveResult`].
//!
//! Strategies are independent types selected statically by the caller:
//! [`GreedyOptimizer`](crate::greedy::GreedyOptimizer),
//! [`GraspOptimizer`](crate::grasp::GraspOptimizer),
//! [`GaOptimizer`](crate::ga::GaOptimizer),
//! [`ExactOptimizer`](crate::exact::ExactOptimizer) and
//! [`WarmStartChain`](crate::chain::WarmStartChain).

mod config;

pub use config::{Deadline, SolveOptions, Verbosity};

use crate::error::SolveError;
use crate::problem::{Bounds, ProblemState, SolveResult};
use std::time::Instant;

/// A bundle-pricing optimization strategy.
///
/// # Contract
///
/// When `optimize` returns `Ok`, the state's decisions and prices must be
/// the solution the reported lower bound refers to. `solve` never trusts
/// the strategy's notion of feasibility: `is_valid` is recomputed from the
/// state.
///
/// Errors from `optimize` propagate out of `solve` unchanged; no partial
/// result is synthesized.
pub trait Optimizer {
    /// Name recorded in results.
    fn name(&self) -> &str;

    /// Runs the strategy, leaving its solution in `state`.
    fn optimize(
        &self,
        state: &mut ProblemState,
        options: &SolveOptions,
    ) -> Result<Bounds, SolveError>;

    /// Runs the strategy and returns a timed, validated result.
    fn solve(
        &self,
        state: &mut ProblemState,
        options: &SolveOptions,
    ) -> Result<SolveResult, SolveError> {
        let span = tracing::debug_span!("solve", optimizer = self.name());
        let _guard = span.enter();

        let start = Instant::now();
        let bounds = self.optimize(state, options)?;
        let elapsed_time = start.elapsed();
        let is_valid = state.validate_current();

        let result = SolveResult {
            name: self.name().to_string(),
            lower_bound: bounds.lower_bound,
            upper_bound: bounds.upper_bound,
            elapsed_time,
            is_valid,
        };

        if options.summary() {
            tracing::info!("{result}");
        }
        if !is_valid {
            tracing::warn!(
                optimizer = self.name(),
                "final solution violates a budget constraint"
            );
        }
        Ok(result)
    }
}
