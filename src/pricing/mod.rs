//! Pricing subproblem: optimal prices for a fixed set of served clients.
//!
//! Every heuristic in this crate evaluates a candidate decision vector by
//! asking a [`PricingSolver`] for the revenue-maximizing prices under that
//! vector. The built-in [`SimplexPricer`] solves the LP directly; an
//! external LP/MILP backend can be plugged in by implementing the trait.
//!
//! # Key Types
//!
//! - [`PricingSolver`]: the call contract
//! - [`Pricing`]: optimal revenue and the prices achieving it
//! - [`SimplexPricer`]: dense primal simplex implementation

mod simplex;

pub use simplex::SimplexPricer;

use crate::error::PricingError;
use crate::problem::ProblemState;

/// Optimal prices for one decision vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Pricing {
    /// Revenue of the served clients at `prices`.
    pub revenue: f64,
    /// One price per product.
    pub prices: Vec<f64>,
}

impl Pricing {
    /// No revenue, every price zero.
    pub fn zero(n_products: usize) -> Self {
        Self {
            revenue: 0.0,
            prices: vec![0.0; n_products],
        }
    }
}

/// Solves the pricing subproblem.
///
/// Given the state's clients and a decision vector, returns prices that
/// maximize `Σ bundle_cost(p, j) * x_j` subject to one affordability
/// constraint per served client, or a [`PricingError`].
///
/// Implementations only read the state; the decision vector is passed
/// separately so candidates can be priced without mutating it.
pub trait PricingSolver: Send + Sync {
    fn price(&self, state: &ProblemState, decisions: &[bool]) -> Result<Pricing, PricingError>;
}

impl<P: PricingSolver + ?Sized> PricingSolver for &P {
    fn price(&self, state: &ProblemState, decisions: &[bool]) -> Result<Pricing, PricingError> {
        (**self).price(state, decisions)
    }
}

/// Prices `decisions`, reading an infeasible subproblem as zero revenue.
///
/// Any other solver failure is returned unchanged.
pub fn price_or_zero<P: PricingSolver + ?Sized>(
    pricer: &P,
    state: &ProblemState,
    decisions: &[bool],
) -> Result<Pricing, PricingError> {
    match pricer.price(state, decisions) {
        Err(PricingError::Infeasible) => Ok(Pricing::zero(state.n_products())),
        other => other,
    }
}
