//! Bundle-pricing problem model.
//!
//! A seller sets one price per product and chooses which clients to serve.
//! Each client wants a fixed bundle of products and has a budget; a served
//! client pays the sum of its bundle's prices, which must not exceed the
//! budget. The goal is to maximize total revenue.
//!
//! # Key Types
//!
//! - [`Instance`]: immutable products, clients, bundles, budgets
//! - [`ProblemState`]: decisions and prices of one optimizer run, with
//!   objective, constraint and validation logic
//! - [`SolveResult`]: bounds, timing and validity of a finished run

mod instance;
mod result;
mod state;

pub use instance::{Client, Instance};
pub use result::{Bounds, SolveResult};
pub use state::{Affordability, ProblemState, VALIDATION_TOLERANCE};
