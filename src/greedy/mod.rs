//! Greedy heuristic.
//!
//! Serves clients in order of descending budget, re-solving the pricing
//! subproblem only when a newcomer cannot afford its bundle at the current
//! prices. Deterministic and cheap; used standalone and as the warm-start
//! stage of [`WarmStartChain`](crate::chain::WarmStartChain).

mod runner;

pub use runner::GreedyOptimizer;
