//! Dense primal simplex for the pricing LP.
//!
//! With the served set fixed, optimal prices solve
//!
//! ```text
//! max  Σ_{j served} Σ_{i ∈ S_j} p_i
//! s.t. Σ_{i ∈ S_j} p_i <= b_j     for every served j
//!      p >= 0
//! ```
//!
//! Every right-hand side is a positive budget, so the origin is a basic
//! feasible solution with all slacks basic and no phase 1 is needed. Only
//! products that occur in some served bundle become columns; every other
//! price stays at zero.

use super::{Pricing, PricingSolver};
use crate::error::PricingError;
use crate::problem::{Affordability, ProblemState};
use std::time::{Duration, Instant};

/// Simplex solver for the pricing subproblem.
///
/// Uses Bland's rule (lowest-index entering column, lowest-index leaving
/// basic variable on ratio ties), which cannot cycle on the highly
/// degenerate LPs produced by overlapping bundles.
///
/// # Examples
///
/// ```
/// use u_pricing::pricing::{PricingSolver, SimplexPricer};
/// use u_pricing::problem::{Client, Instance, ProblemState};
///
/// let instance = Instance::new(2, vec![Client::new(30.0, [0, 1])]).unwrap();
/// let state = ProblemState::new(&instance);
///
/// let pricing = SimplexPricer::new().price(&state, &[true]).unwrap();
/// assert!((pricing.revenue - 30.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct SimplexPricer {
    /// Maximum number of pivots before giving up.
    max_iterations: usize,
    /// Tolerance for floating point comparisons.
    tolerance: f64,
    /// Optional wall-clock limit per LP.
    time_limit: Option<Duration>,
}

impl Default for SimplexPricer {
    fn default() -> Self {
        Self {
            max_iterations: 100_000,
            tolerance: 1e-9,
            time_limit: None,
        }
    }
}

struct Tableau {
    /// Constraint rows followed by the reduced-cost row; last column is the RHS.
    data: Vec<Vec<f64>>,
    basic_vars: Vec<usize>,
}

impl SimplexPricer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    fn build_tableau(rows: &[Affordability<'_>], n_products: usize) -> (Tableau, Vec<usize>) {
        // Map products to LP columns in order of first appearance.
        let mut column = vec![usize::MAX; n_products];
        let mut products = Vec::new();
        for row in rows {
            for &i in row.bundle {
                if column[i] == usize::MAX {
                    column[i] = products.len();
                    products.push(i);
                }
            }
        }

        let n_vars = products.len();
        let m = rows.len();
        let n_cols = n_vars + m + 1;
        let rhs = n_cols - 1;

        let mut data = vec![vec![0.0; n_cols]; m + 1];
        for (r, row) in rows.iter().enumerate() {
            for &i in row.bundle {
                data[r][column[i]] = 1.0;
                // Each served bundle containing i adds p_i to the objective.
                data[m][column[i]] += 1.0;
            }
            data[r][n_vars + r] = 1.0;
            data[r][rhs] = row.budget;
        }

        let tableau = Tableau {
            data,
            basic_vars: (n_vars..n_vars + m).collect(),
        };
        (tableau, products)
    }

    fn find_pivot_column(&self, tableau: &Tableau) -> Option<usize> {
        let obj_row = tableau.data.len() - 1;
        let n_cols = tableau.data[obj_row].len() - 1;
        (0..n_cols).find(|&j| tableau.data[obj_row][j] > self.tolerance)
    }

    fn find_pivot_row(&self, tableau: &Tableau, col: usize) -> Option<usize> {
        let n_constraints = tableau.data.len() - 1;
        let rhs_col = tableau.data[0].len() - 1;

        let mut best: Option<(usize, f64)> = None;
        for i in 0..n_constraints {
            let val = tableau.data[i][col];
            if val <= self.tolerance {
                continue;
            }
            let ratio = tableau.data[i][rhs_col] / val;
            best = match best {
                None => Some((i, ratio)),
                Some((row, min_ratio)) => {
                    if ratio < min_ratio - self.tolerance
                        || (ratio <= min_ratio + self.tolerance
                            && tableau.basic_vars[i] < tableau.basic_vars[row])
                    {
                        Some((i, ratio))
                    } else {
                        Some((row, min_ratio))
                    }
                }
            };
        }
        best.map(|(row, _)| row)
    }

    fn pivot(tableau: &mut Tableau, row: usize, col: usize) {
        tableau.basic_vars[row] = col;

        let pivot_val = tableau.data[row][col];
        for v in tableau.data[row].iter_mut() {
            *v /= pivot_val;
        }

        let pivot_row = tableau.data[row].clone();
        for (i, other) in tableau.data.iter_mut().enumerate() {
            if i == row {
                continue;
            }
            let factor = other[col];
            if factor != 0.0 {
                for (v, p) in other.iter_mut().zip(&pivot_row) {
                    *v -= factor * p;
                }
            }
        }
    }
}

impl PricingSolver for SimplexPricer {
    fn price(&self, state: &ProblemState, decisions: &[bool]) -> Result<Pricing, PricingError> {
        if decisions.len() != state.n_clients() {
            return Err(PricingError::DimensionMismatch {
                expected: state.n_clients(),
                found: decisions.len(),
            });
        }

        let n_products = state.n_products();
        let rows: Vec<Affordability<'_>> = state.constraints(decisions, true).collect();
        if rows.is_empty() {
            return Ok(Pricing::zero(n_products));
        }

        let started = Instant::now();
        let (mut tableau, products) = Self::build_tableau(&rows, n_products);

        let mut optimal = false;
        for _ in 0..self.max_iterations {
            if self.time_limit.is_some_and(|limit| started.elapsed() > limit) {
                return Err(PricingError::TimeLimit);
            }
            let Some(pivot_col) = self.find_pivot_column(&tableau) else {
                optimal = true;
                break;
            };
            let Some(pivot_row) = self.find_pivot_row(&tableau, pivot_col) else {
                return Err(PricingError::Unbounded);
            };
            Self::pivot(&mut tableau, pivot_row, pivot_col);
        }
        if !optimal && self.find_pivot_column(&tableau).is_some() {
            return Err(PricingError::IterationLimit {
                iterations: self.max_iterations,
            });
        }

        let rhs_col = tableau.data[0].len() - 1;
        let mut prices = vec![0.0; n_products];
        for (r, &basic) in tableau.basic_vars.iter().enumerate() {
            if basic < products.len() {
                prices[products[basic]] = tableau.data[r][rhs_col].max(0.0);
            }
        }

        let revenue = state.objective(&prices, decisions);
        Ok(Pricing { revenue, prices })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{Client, Instance};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn price(instance: &Instance, decisions: &[bool]) -> Pricing {
        let state = ProblemState::new(instance);
        SimplexPricer::new().price(&state, decisions).unwrap()
    }

    #[test]
    fn test_single_product_two_clients() {
        let instance =
            Instance::new(1, vec![Client::new(100.0, [0]), Client::new(50.0, [0])]).unwrap();

        let only_rich = price(&instance, &[true, false]);
        assert!((only_rich.revenue - 100.0).abs() < 1e-9);
        assert!((only_rich.prices[0] - 100.0).abs() < 1e-9);

        let both = price(&instance, &[true, true]);
        assert!((both.revenue - 100.0).abs() < 1e-9);
        assert!((both.prices[0] - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_split_bundle_reaches_budget() {
        let instance = Instance::new(2, vec![Client::new(30.0, [0, 1])]).unwrap();
        let pricing = price(&instance, &[true]);
        assert!((pricing.revenue - 30.0).abs() < 1e-9);
        assert!((pricing.prices.iter().sum::<f64>() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_nobody_served_is_zero() {
        let instance = Instance::new(3, vec![Client::new(30.0, [0, 1])]).unwrap();
        let pricing = price(&instance, &[false]);
        assert_eq!(pricing.revenue, 0.0);
        assert_eq!(pricing.prices, vec![0.0; 3]);
    }

    #[test]
    fn test_overlapping_bundles() {
        // max 2a + 2b + c  s.t. a + b <= 10, b + c <= 6, a <= 8
        // Optimum: a = 8, b = 2, c = 4 → 2*8 + 2*2 + 4 = 24, i.e. 10 + 6 + 8.
        let instance = Instance::new(
            3,
            vec![
                Client::new(10.0, [0, 1]),
                Client::new(6.0, [1, 2]),
                Client::new(8.0, [0]),
            ],
        )
        .unwrap();
        let pricing = price(&instance, &[true, true, true]);
        assert!((pricing.revenue - 24.0).abs() < 1e-9, "got {}", pricing.revenue);

        let state = ProblemState::new(&instance);
        assert!(state.validate(&pricing.prices, &[true, true, true]));
    }

    #[test]
    fn test_unrequested_products_stay_zero() {
        let instance = Instance::new(
            4,
            vec![Client::new(10.0, [1]), Client::new(20.0, [3])],
        )
        .unwrap();
        let pricing = price(&instance, &[true, false]);
        assert_eq!(pricing.prices[0], 0.0);
        assert!((pricing.prices[1] - 10.0).abs() < 1e-9);
        assert_eq!(pricing.prices[2], 0.0);
        assert_eq!(pricing.prices[3], 0.0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let instance = Instance::new(1, vec![Client::new(10.0, [0])]).unwrap();
        let state = ProblemState::new(&instance);
        let err = SimplexPricer::new().price(&state, &[true, true]);
        assert_eq!(
            err,
            Err(PricingError::DimensionMismatch {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn test_iteration_limit() {
        let instance = Instance::new(2, vec![Client::new(10.0, [0]), Client::new(5.0, [1])]).unwrap();
        let state = ProblemState::new(&instance);
        let err = SimplexPricer::new()
            .with_max_iterations(0)
            .price(&state, &[true, true]);
        assert_eq!(err, Err(PricingError::IterationLimit { iterations: 0 }));
    }

    #[test]
    fn test_generated_instances_are_feasible_and_bounded() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..5 {
            let instance = Instance::generate(8, 15, &mut rng).unwrap();
            let state = ProblemState::new(&instance);
            let decisions = vec![true; instance.n_clients()];
            let pricing = SimplexPricer::new().price(&state, &decisions).unwrap();
            assert!(state.validate(&pricing.prices, &decisions));
            assert!(pricing.revenue >= 0.0);
            assert!(pricing.revenue <= state.maximum_revenue() + 1e-6);
            // Pricing one product of the poorest client at its budget is
            // feasible for everyone, so the optimum earns at least that much.
            let min_budget = instance
                .clients()
                .iter()
                .map(|c| c.budget)
                .fold(f64::INFINITY, f64::min);
            assert!(pricing.revenue >= min_budget - 1e-6);
        }
    }
}
