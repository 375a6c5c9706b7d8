//! Immutable problem instances.

use crate::error::InstanceError;
use rand::Rng;

/// A client: the bundle of products it wants and the most it will pay.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Client {
    /// Maximum total price the client pays for its bundle.
    pub budget: f64,
    /// Product indices, sorted and free of duplicates.
    pub bundle: Vec<usize>,
}

impl Client {
    /// Creates a client. The bundle is treated as a set.
    pub fn new(budget: f64, bundle: impl IntoIterator<Item = usize>) -> Self {
        let mut bundle: Vec<usize> = bundle.into_iter().collect();
        bundle.sort_unstable();
        bundle.dedup();
        Self { budget, bundle }
    }
}

/// A bundle-pricing instance: products, clients, bundles and budgets.
///
/// Instances are validated once and never change afterwards. Every
/// optimizer run works on its own [`ProblemState`](super::ProblemState)
/// built from a shared `&Instance`.
///
/// # Examples
///
/// ```
/// use u_pricing::problem::{Client, Instance};
///
/// let instance = Instance::new(1, vec![
///     Client::new(100.0, [0]),
///     Client::new(50.0, [0]),
/// ]).unwrap();
/// assert_eq!(instance.n_clients(), 2);
/// assert_eq!(instance.maximum_revenue(), 150.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    n_products: usize,
    clients: Vec<Client>,
}

impl Instance {
    /// Builds an instance, checking every data-model invariant.
    ///
    /// Bundles are normalized to sorted sets, so clients built directly
    /// from their public fields behave like those from [`Client::new`].
    pub fn new(n_products: usize, mut clients: Vec<Client>) -> Result<Self, InstanceError> {
        if n_products == 0 || clients.is_empty() {
            return Err(InstanceError::Empty);
        }
        for (j, client) in clients.iter_mut().enumerate() {
            if !(client.budget.is_finite() && client.budget > 0.0) {
                return Err(InstanceError::NonPositiveBudget {
                    client: j,
                    budget: client.budget,
                });
            }
            if let Some(&product) = client.bundle.iter().find(|&&i| i >= n_products) {
                return Err(InstanceError::ProductOutOfRange {
                    client: j,
                    product,
                    n_products,
                });
            }
            client.bundle.sort_unstable();
            client.bundle.dedup();
        }
        Ok(Self {
            n_products,
            clients,
        })
    }

    /// Builds an instance from the `(n_products, n_clients, clients)` triple
    /// produced by instance loaders.
    pub fn from_parts(
        n_products: usize,
        n_clients: usize,
        clients: Vec<Client>,
    ) -> Result<Self, InstanceError> {
        if n_clients != clients.len() {
            return Err(InstanceError::ClientCountMismatch {
                declared: n_clients,
                actual: clients.len(),
            });
        }
        Self::new(n_products, clients)
    }

    /// Generates a random instance.
    ///
    /// Budgets are integers drawn uniformly from `[1000, 20000)`. Each
    /// bundle holds `k` distinct products, `k` uniform in `[1, n_products)`
    /// (one product when `n_products == 1`).
    ///
    /// Fails with [`InstanceError::Empty`] if either size is zero.
    pub fn generate<R: Rng>(
        n_products: usize,
        n_clients: usize,
        rng: &mut R,
    ) -> Result<Self, InstanceError> {
        if n_products == 0 || n_clients == 0 {
            return Err(InstanceError::Empty);
        }
        let clients = (0..n_clients)
            .map(|_| {
                let budget = rng.random_range(1000..20000) as f64;
                let size = if n_products > 1 {
                    rng.random_range(1..n_products)
                } else {
                    1
                };
                let bundle = rand::seq::index::sample(rng, n_products, size).into_vec();
                Client::new(budget, bundle)
            })
            .collect();
        Ok(Self {
            n_products,
            clients,
        })
    }

    /// Number of products.
    pub fn n_products(&self) -> usize {
        self.n_products
    }

    /// Number of clients.
    pub fn n_clients(&self) -> usize {
        self.clients.len()
    }

    /// Clients in load order.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Sum of all budgets: the revenue of serving everyone at their budget.
    pub fn maximum_revenue(&self) -> f64 {
        self.clients.iter().map(|c| c.budget).sum()
    }
}
