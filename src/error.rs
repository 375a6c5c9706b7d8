//! Error types shared by the problem model, the pricing subproblem and the
//! optimizers.

use thiserror::Error;

/// Violations of the instance invariants, detected at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstanceError {
    /// No products or no clients.
    #[error("instance must contain at least one product and one client")]
    Empty,

    /// A client budget is zero, negative or not a number.
    #[error("client {client} has non-positive budget {budget}")]
    NonPositiveBudget { client: usize, budget: f64 },

    /// A bundle refers to a product outside `[0, n_products)`.
    #[error("client {client} wants product {product}, but only {n_products} products exist")]
    ProductOutOfRange {
        client: usize,
        product: usize,
        n_products: usize,
    },

    /// The declared client count disagrees with the client list.
    #[error("instance declares {declared} clients but lists {actual}")]
    ClientCountMismatch { declared: usize, actual: usize },
}

/// Failures reported by a pricing subproblem solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// No price vector satisfies the affordability constraints.
    #[error("pricing subproblem is infeasible")]
    Infeasible,

    /// The objective can grow without limit.
    #[error("pricing subproblem is unbounded")]
    Unbounded,

    /// The solver gave up after the configured number of pivots.
    #[error("pricing subproblem hit the iteration limit ({iterations})")]
    IterationLimit { iterations: usize },

    /// The solver exceeded its own time limit.
    #[error("pricing subproblem hit its time limit")]
    TimeLimit,

    /// The decision vector does not match the number of clients.
    #[error("decision vector has length {found}, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Errors that abort a `solve` call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("invalid instance: {0}")]
    InvalidInstance(#[from] InstanceError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}
