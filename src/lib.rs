//! Heuristic and exact optimization for the Stackelberg minimum bundle
//! pricing problem.
//!
//! A seller (leader) sets one price per product. Each client (follower)
//! wants a fixed bundle of products and buys it when the bundle's total
//! price fits its budget. The seller chooses which clients to serve and the
//! prices that keep every served client within budget, maximizing revenue.
//!
//! Every strategy reduces the problem to a search over serve / don't-serve
//! decisions; for fixed decisions the optimal prices come from a linear
//! pricing subproblem.
//!
//! - **Greedy**: single pass by descending budget, re-pricing only when the
//!   newcomer cannot afford its bundle.
//! - **GRASP**: randomized greedy construction with a restricted candidate
//!   list, followed by add / remove / exchange local search.
//! - **Genetic Algorithm (GA)**: bitstring population with roulette,
//!   tournament or rank selection and elitist truncation.
//! - **Branch and bound**: exact search with a budget-based bound, optionally
//!   warm-started.
//! - **Warm-start chain**: greedy, then branch and bound seeded with the
//!   greedy solution.
//!
//! # Architecture
//!
//! [`problem`] holds the instance and the mutable problem state, [`pricing`]
//! solves the subproblem, and [`optimizer`] defines the contract every
//! strategy implements. Strategies are plain types chosen by the caller; none
//! of them shares state with another run.
//!
//! # Example
//!
//! ```
//! use u_pricing::greedy::GreedyOptimizer;
//! use u_pricing::optimizer::{Optimizer, SolveOptions};
//! use u_pricing::problem::{Client, Instance, ProblemState};
//!
//! let instance = Instance::new(2, vec![
//!     Client::new(30.0, [0, 1]),
//!     Client::new(25.0, [1]),
//! ]).unwrap();
//! let mut state = ProblemState::new(&instance);
//! let result = GreedyOptimizer::new()
//!     .solve(&mut state, &SolveOptions::default())
//!     .unwrap();
//! assert!(result.is_valid);
//! assert!(result.lower_bound <= result.upper_bound);
//! ```

pub mod chain;
pub mod error;
pub mod exact;
pub mod ga;
pub mod grasp;
pub mod greedy;
pub mod optimizer;
pub mod pricing;
pub mod problem;
