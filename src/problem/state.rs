//! Mutable decision state over an [`Instance`].

use super::instance::{Client, Instance};

/// Absolute tolerance used when checking affordability of served clients.
///
/// Matches the precision of floating-point LP solver output.
pub const VALIDATION_TOLERANCE: f64 = 1e-6;

/// The working state of one optimizer run.
///
/// Holds a private copy of the clients (so the greedy heuristic can reorder
/// them), the serve/don't-serve decision per client, the current price per
/// product, and the per-product price bound used by bounding logic.
///
/// A state belongs to exactly one running optimizer. Chained optimizers
/// hand it on explicitly by `&mut`.
#[derive(Debug, Clone)]
pub struct ProblemState {
    n_products: usize,
    clients: Vec<Client>,
    decisions: Vec<bool>,
    prices: Vec<f64>,
    price_upper_bound: Vec<f64>,
}

/// One affordability constraint `(bundle_cost(p) - budget) * x <= 0`.
///
/// Yielded by [`ProblemState::constraints`]. The constraint is symbolic in
/// the prices: evaluate it with [`lhs`](Self::lhs), or read `bundle` and
/// `budget` directly to build a solver row.
#[derive(Debug, Clone, Copy)]
pub struct Affordability<'a> {
    /// Client index in the state's current order.
    pub client: usize,
    /// Products whose prices make up the left-hand side.
    pub bundle: &'a [usize],
    /// Right-hand side.
    pub budget: f64,
    /// The decision multiplying the constraint.
    pub served: bool,
}

impl Affordability<'_> {
    /// Evaluates `(bundle_cost(prices) - budget) * x`.
    pub fn lhs(&self, prices: &[f64]) -> f64 {
        if self.served {
            self.bundle.iter().map(|&i| prices[i]).sum::<f64>() - self.budget
        } else {
            0.0
        }
    }

    /// Whether the constraint holds within `tolerance`.
    pub fn is_satisfied(&self, prices: &[f64], tolerance: f64) -> bool {
        self.lhs(prices) <= tolerance
    }
}

impl ProblemState {
    /// Creates a state with nobody served and every price at zero.
    pub fn new(instance: &Instance) -> Self {
        let mut state = Self {
            n_products: instance.n_products(),
            clients: instance.clients().to_vec(),
            decisions: Vec::new(),
            prices: Vec::new(),
            price_upper_bound: Vec::new(),
        };
        state.reset();
        state
    }

    /// Clears all decisions and prices and recomputes the price bounds.
    pub fn reset(&mut self) {
        self.decisions = vec![false; self.clients.len()];
        self.prices = vec![0.0; self.n_products];
        self.price_upper_bound = vec![0.0; self.n_products];
        for client in &self.clients {
            for &i in &client.bundle {
                self.price_upper_bound[i] = self.price_upper_bound[i].max(client.budget);
            }
        }
    }

    pub fn n_products(&self) -> usize {
        self.n_products
    }

    pub fn n_clients(&self) -> usize {
        self.clients.len()
    }

    /// Clients in the state's current order.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Marks client `client` as served or not.
    pub fn set_decision(&mut self, client: usize, served: bool) {
        self.decisions[client] = served;
    }

    /// Replaces the whole decision vector.
    ///
    /// # Panics
    /// Panics if `decisions.len() != n_clients()`.
    pub fn set_all_decisions(&mut self, decisions: &[bool]) {
        assert_eq!(
            decisions.len(),
            self.clients.len(),
            "decision vector length must equal client count"
        );
        self.decisions.copy_from_slice(decisions);
    }

    pub fn decisions(&self) -> &[bool] {
        &self.decisions
    }

    /// Replaces the price vector.
    ///
    /// # Panics
    /// Panics if `prices.len() != n_products()`.
    pub fn set_prices(&mut self, prices: &[f64]) {
        assert_eq!(
            prices.len(),
            self.n_products,
            "price vector length must equal product count"
        );
        self.prices.copy_from_slice(prices);
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Per product: the largest budget among clients wanting it.
    pub fn price_upper_bound(&self) -> &[f64] {
        &self.price_upper_bound
    }

    /// Total price of `client`'s bundle under `prices`.
    pub fn bundle_cost(prices: &[f64], client: &Client) -> f64 {
        client.bundle.iter().map(|&i| prices[i]).sum()
    }

    /// Revenue realised by `decisions` at `prices`.
    pub fn objective(&self, prices: &[f64], decisions: &[bool]) -> f64 {
        self.clients
            .iter()
            .zip(decisions)
            .filter(|(_, &served)| served)
            .map(|(client, _)| Self::bundle_cost(prices, client))
            .sum()
    }

    /// Revenue of the state's own decisions and prices.
    pub fn current_revenue(&self) -> f64 {
        self.objective(&self.prices, &self.decisions)
    }

    /// Upper bound on what client `client` can contribute when served:
    /// the sum of the price bounds over its bundle.
    pub fn bundle_cost_bound(&self, client: usize) -> f64 {
        self.clients[client]
            .bundle
            .iter()
            .map(|&i| self.price_upper_bound[i])
            .sum()
    }

    /// Lazily yields the affordability constraint of every client.
    ///
    /// With `only_served`, unserved clients are skipped; their constraints
    /// are trivially `0 <= 0` once decisions are fixed.
    pub fn constraints<'a>(
        &'a self,
        decisions: &'a [bool],
        only_served: bool,
    ) -> impl Iterator<Item = Affordability<'a>> + 'a {
        self.clients
            .iter()
            .zip(decisions)
            .enumerate()
            .filter(move |(_, (_, &served))| served || !only_served)
            .map(|(j, (client, &served))| Affordability {
                client: j,
                bundle: &client.bundle,
                budget: client.budget,
                served,
            })
    }

    /// Whether every served client can afford its bundle at `prices`.
    ///
    /// Returns `false` on the first violation, and for vectors whose length
    /// does not match the instance.
    pub fn validate(&self, prices: &[f64], decisions: &[bool]) -> bool {
        if prices.len() != self.n_products || decisions.len() != self.clients.len() {
            return false;
        }
        self.constraints(decisions, true)
            .all(|c| c.is_satisfied(prices, VALIDATION_TOLERANCE))
    }

    /// [`validate`](Self::validate) applied to the state's own vectors.
    pub fn validate_current(&self) -> bool {
        self.validate(&self.prices, &self.decisions)
    }

    /// Reorders clients by descending budget (stable).
    ///
    /// Decisions move with their clients. Client indices taken before this
    /// call no longer refer to the same clients afterwards.
    pub fn sort_clients_by_budget_desc(&mut self) {
        let mut order: Vec<usize> = (0..self.clients.len()).collect();
        order.sort_by(|&a, &b| {
            self.clients[b]
                .budget
                .partial_cmp(&self.clients[a].budget)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        self.clients = order.iter().map(|&j| self.clients[j].clone()).collect();
        self.decisions = order.iter().map(|&j| self.decisions[j]).collect();
    }

    /// Sum of all budgets, independent of feasibility.
    pub fn maximum_revenue(&self) -> f64 {
        self.clients.iter().map(|c| c.budget).sum()
    }
}
