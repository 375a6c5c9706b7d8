//! Genetic Algorithm over serve / don't-serve bitstrings.
//!
//! A chromosome holds one gene per client; its fitness is the pricing
//! optimum with exactly the clients whose gene is set being served.
//! Fitness is cached on the chromosome and cleared on any gene write.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, selection, operators)
//! - [`GaOptimizer`]: Executes the evolutionary loop
//! - [`GaResult`]: Best chromosome and per-generation statistics
//! - [`Chromosome`]: Bitstring with cached fitness
//!
//! # Submodules
//!
//! - [`operators`]: One-point / uniform crossover and bit-flip mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaOptimizer, GaResult};
pub use selection::Selection;
pub use types::Chromosome;
