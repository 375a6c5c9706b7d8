//! First-improvement local search over add / remove / exchange moves.

use crate::error::PricingError;
use crate::optimizer::Deadline;
use crate::pricing::{price_or_zero, Pricing, PricingSolver};
use crate::problem::ProblemState;

/// Minimum revenue gain for a move to count as an improvement.
///
/// Every accepted move raises revenue by at least this much, and revenue is
/// bounded by the sum of budgets, so the search always terminates.
pub const IMPROVEMENT_EPS: f64 = 1e-7;

/// A served set together with its optimal prices.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub decisions: Vec<bool>,
    pub cost: f64,
    pub prices: Vec<f64>,
}

impl Solution {
    /// Nobody served, zero revenue.
    pub fn empty(n_clients: usize, n_products: usize) -> Self {
        Self {
            decisions: vec![false; n_clients],
            cost: 0.0,
            prices: vec![0.0; n_products],
        }
    }

    fn with(decisions: Vec<bool>, pricing: Pricing) -> Self {
        Self {
            decisions,
            cost: pricing.revenue,
            prices: pricing.prices,
        }
    }
}

/// A move accepted by the local search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Serve a previously unserved client.
    Add(usize),
    /// Stop serving a client.
    Remove(usize),
    /// Serve `add` and stop serving `remove` at the same time.
    Exchange { add: usize, remove: usize },
}

/// Result of one local search descent.
#[derive(Debug, Clone)]
pub struct LocalSearchOutcome {
    /// The local optimum (or the last solution reached before the deadline).
    pub solution: Solution,
    /// Accepted moves in order.
    pub moves: Vec<Move>,
    /// Cost after each accepted move, starting with the initial cost.
    pub cost_history: Vec<f64>,
}

/// Improves `start` until no add, remove or exchange move helps.
///
/// Each round scans the neighborhoods in fixed order (add, remove,
/// exchange) and applies the first strictly improving move found. The
/// deadline is checked between rounds.
pub fn local_search<P: PricingSolver + ?Sized>(
    pricer: &P,
    state: &ProblemState,
    start: Solution,
    deadline: &Deadline,
) -> Result<LocalSearchOutcome, PricingError> {
    let mut current = start;
    let mut moves = Vec::new();
    let mut cost_history = vec![current.cost];

    while !deadline.expired() {
        let Some((mv, next)) = first_improvement(pricer, state, &current)? else {
            break;
        };
        tracing::trace!(?mv, cost = next.cost, "local search move");
        current = next;
        moves.push(mv);
        cost_history.push(current.cost);
    }

    Ok(LocalSearchOutcome {
        solution: current,
        moves,
        cost_history,
    })
}

fn first_improvement<P: PricingSolver + ?Sized>(
    pricer: &P,
    state: &ProblemState,
    current: &Solution,
) -> Result<Option<(Move, Solution)>, PricingError> {
    let served: Vec<usize> = (0..current.decisions.len())
        .filter(|&j| current.decisions[j])
        .collect();
    let unserved: Vec<usize> = (0..current.decisions.len())
        .filter(|&j| !current.decisions[j])
        .collect();

    let mut candidate = current.decisions.clone();

    // Add
    for &add in &unserved {
        candidate[add] = true;
        if let Some(found) = try_candidate(pricer, state, current, &candidate)? {
            return Ok(Some((Move::Add(add), found)));
        }
        candidate[add] = false;
    }

    // Remove
    for &remove in &served {
        candidate[remove] = false;
        if let Some(found) = try_candidate(pricer, state, current, &candidate)? {
            return Ok(Some((Move::Remove(remove), found)));
        }
        candidate[remove] = true;
    }

    // Exchange
    for &add in &unserved {
        candidate[add] = true;
        for &remove in &served {
            candidate[remove] = false;
            if let Some(found) = try_candidate(pricer, state, current, &candidate)? {
                return Ok(Some((Move::Exchange { add, remove }, found)));
            }
            candidate[remove] = true;
        }
        candidate[add] = false;
    }

    Ok(None)
}

fn try_candidate<P: PricingSolver + ?Sized>(
    pricer: &P,
    state: &ProblemState,
    current: &Solution,
    candidate: &[bool],
) -> Result<Option<Solution>, PricingError> {
    let pricing = price_or_zero(pricer, state, candidate)?;
    if pricing.revenue > current.cost + IMPROVEMENT_EPS {
        Ok(Some(Solution::with(candidate.to_vec(), pricing)))
    } else {
        Ok(None)
    }
}
