//! Greedy Randomized Adaptive Search Procedure (GRASP).
//!
//! Each iteration builds a served set with a randomized greedy rule
//! (restricted candidate list controlled by `alpha`) and then descends to a
//! local optimum with first-improvement add / remove / exchange moves. The
//! best local optimum across iterations is returned.
//!
//! # Key Types
//!
//! - [`GraspConfig`]: iteration count and RCL threshold
//! - [`GraspOptimizer`]: the [`Optimizer`](crate::optimizer::Optimizer) implementation
//! - [`local_search`]: the improvement phase, usable on its own

mod config;
mod local_search;
mod runner;

pub use config::GraspConfig;
pub use local_search::{local_search, LocalSearchOutcome, Move, Solution, IMPROVEMENT_EPS};
pub use runner::GraspOptimizer;
