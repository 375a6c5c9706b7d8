//! Exact solver: depth-first branch and bound over client decisions.
//!
//! Every node's served set is priced by the pricing subproblem and is itself
//! a feasible solution, so the incumbent improves as the tree is walked. A
//! [`WarmStart`] may seed the incumbent; the search stops cooperatively at
//! the deadline or node limit and then reports the best bound it has proven.
//!
//! # Key Types
//!
//! - [`ExactConfig`]: node limit
//! - [`WarmStart`]: initial decisions and prices
//! - [`ExactOptimizer`]: the [`Optimizer`](crate::optimizer::Optimizer) implementation
//! - [`ExactOutcome`] / [`ExactStatus`]: search statistics

mod config;
mod search;

pub use config::{ExactConfig, WarmStart};
pub use search::{ExactOptimizer, ExactOutcome, ExactStatus};
