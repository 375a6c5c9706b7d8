//! Depth-first branch and bound over serve / don't-serve decisions.
//!
//! # Algorithm
//!
//! Clients are branched on in order of descending budget. A node fixes the
//! decisions of the first `depth` clients in that order; its served set is
//! always a complete, feasible solution whose value is the pricing optimum.
//!
//! For a node with fixed-in set `S` and undecided set `U`:
//!
//! ```text
//! bound(node) = opt(S) + Σ_{k ∈ U} min(b_k, bundle_cost_bound(k))
//! ```
//!
//! Any prices feasible for `S ∪ T` are feasible for `S`, so the part of the
//! revenue paid by `S` never exceeds `opt(S)`, and each `k ∈ T` pays at most
//! its budget. Nodes whose bound does not beat the incumbent are pruned.
//!
//! Excluding a client keeps the parent's prices, so only the include child
//! costs a pricing call. The include child is always explored first; a warm
//! start changes the initial incumbent and nothing else.

use super::config::{ExactConfig, WarmStart};
use crate::error::SolveError;
use crate::optimizer::{Deadline, Optimizer, SolveOptions};
use crate::pricing::{price_or_zero, PricingSolver, SimplexPricer};
use crate::problem::{Bounds, ProblemState};

/// Pruning slack on bound comparisons.
const PRUNE_EPS: f64 = 1e-9;

/// Status of the search after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExactStatus {
    /// The tree was exhausted; the incumbent is optimal.
    Optimal,
    /// Stopped by the node limit or the deadline; the incumbent is feasible
    /// and `upper_bound` is the best bound proven.
    Feasible,
}

/// Outcome of one branch-and-bound search.
#[derive(Debug, Clone)]
pub struct ExactOutcome {
    pub status: ExactStatus,
    pub decisions: Vec<bool>,
    pub prices: Vec<f64>,
    pub revenue: f64,
    pub upper_bound: f64,
    /// Nodes expanded.
    pub nodes: usize,
    /// Whether the warm start was accepted as initial incumbent.
    pub warm_start_used: bool,
}

#[derive(Debug, Clone)]
struct Node {
    depth: usize,
    decisions: Vec<bool>,
    prices: Vec<f64>,
    revenue: f64,
    bound: f64,
}

#[derive(Debug, Clone)]
struct Incumbent {
    decisions: Vec<bool>,
    prices: Vec<f64>,
    revenue: f64,
}

/// Exact optimizer: proves optimality when the search finishes in time.
///
/// # Examples
///
/// ```
/// use u_pricing::exact::{ExactConfig, ExactOptimizer};
/// use u_pricing::optimizer::{Optimizer, SolveOptions};
/// use u_pricing::problem::{Client, Instance, ProblemState};
///
/// let instance = Instance::new(1, vec![
///     Client::new(100.0, [0]),
///     Client::new(80.0, [0]),
/// ]).unwrap();
/// let mut state = ProblemState::new(&instance);
///
/// let exact = ExactOptimizer::new(ExactConfig::default());
/// let result = exact.solve(&mut state, &SolveOptions::default()).unwrap();
/// assert!((result.lower_bound - 160.0).abs() < 1e-9);
/// assert!((result.upper_bound - 160.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct ExactOptimizer<P = SimplexPricer> {
    config: ExactConfig,
    pricer: P,
    warm_start: Option<WarmStart>,
}

impl ExactOptimizer {
    /// Creates an exact optimizer using the built-in simplex pricer.
    pub fn new(config: ExactConfig) -> Self {
        Self::with_pricer(config, SimplexPricer::default())
    }
}

impl<P: PricingSolver> ExactOptimizer<P> {
    /// Creates an exact optimizer with a custom pricing solver.
    pub fn with_pricer(config: ExactConfig, pricer: P) -> Self {
        Self {
            config,
            pricer,
            warm_start: None,
        }
    }

    /// Sets the initial assignment tried as first incumbent.
    pub fn with_warm_start(mut self, warm_start: WarmStart) -> Self {
        self.warm_start = Some(warm_start);
        self
    }

    pub fn warm_start(&self) -> Option<&WarmStart> {
        self.warm_start.as_ref()
    }

    /// Runs the search without touching the state's decisions or prices.
    pub fn search(
        &self,
        state: &ProblemState,
        options: &SolveOptions,
    ) -> Result<ExactOutcome, SolveError> {
        self.config.validate().map_err(SolveError::InvalidConfig)?;

        let deadline = Deadline::after(options.timeout);
        let n_clients = state.n_clients();
        let clients = state.clients();

        let mut order: Vec<usize> = (0..n_clients).collect();
        order.sort_by(|&a, &b| clients[b].budget.total_cmp(&clients[a].budget));

        // suffix[d]: optimistic revenue of the clients at order[d..].
        let mut suffix = vec![0.0; n_clients + 1];
        for d in (0..n_clients).rev() {
            let k = order[d];
            suffix[d] = suffix[d + 1] + clients[k].budget.min(state.bundle_cost_bound(k));
        }

        let warm = self.accepted_warm_start(state, options);
        let warm_start_used = warm.is_some();
        let mut incumbent = warm.unwrap_or_else(|| Incumbent {
            decisions: vec![false; n_clients],
            prices: vec![0.0; state.n_products()],
            revenue: 0.0,
        });
        let mut stack = vec![Node {
            depth: 0,
            decisions: vec![false; n_clients],
            prices: vec![0.0; state.n_products()],
            revenue: 0.0,
            bound: suffix[0],
        }];
        let mut nodes = 0usize;
        let mut stopped = false;

        while let Some(node) = stack.pop() {
            if nodes >= self.config.max_nodes || deadline.expired() {
                stack.push(node);
                stopped = true;
                break;
            }
            if node.bound <= incumbent.revenue + PRUNE_EPS || node.depth == n_clients {
                continue;
            }
            nodes += 1;

            let k = order[node.depth];
            let rest = suffix[node.depth + 1];

            let mut include = node.decisions.clone();
            include[k] = true;
            let pricing = price_or_zero(&self.pricer, state, &include)?;
            let include_child = Node {
                depth: node.depth + 1,
                decisions: include,
                bound: pricing.revenue + rest,
                revenue: pricing.revenue,
                prices: pricing.prices,
            };
            if include_child.revenue > incumbent.revenue + PRUNE_EPS {
                incumbent = Incumbent {
                    decisions: include_child.decisions.clone(),
                    prices: include_child.prices.clone(),
                    revenue: include_child.revenue,
                };
                if options.summary() {
                    tracing::info!(nodes, revenue = incumbent.revenue, "B&B: new incumbent");
                }
            }

            let exclude_child = Node {
                depth: node.depth + 1,
                bound: node.revenue + rest,
                decisions: node.decisions,
                prices: node.prices,
                revenue: node.revenue,
            };

            if options.debug() {
                tracing::debug!(
                    depth = node.depth,
                    client = k,
                    include_bound = include_child.bound,
                    exclude_bound = exclude_child.bound,
                    incumbent = incumbent.revenue,
                    "B&B branch"
                );
            }

            // Include is pushed last so it is explored first. A warm start
            // only raises the incumbent, so it expands a subsequence of the
            // cold run's nodes.
            for child in [exclude_child, include_child] {
                if child.bound > incumbent.revenue + PRUNE_EPS && child.depth < n_clients {
                    stack.push(child);
                }
            }
        }

        let (status, upper_bound) = if stopped {
            let open = stack
                .iter()
                .map(|n| n.bound)
                .fold(f64::NEG_INFINITY, f64::max);
            (ExactStatus::Feasible, incumbent.revenue.max(open))
        } else {
            (ExactStatus::Optimal, incumbent.revenue)
        };

        if options.summary() {
            tracing::info!(
                ?status,
                nodes,
                revenue = incumbent.revenue,
                upper_bound,
                warm_start_used,
                "branch and bound finished"
            );
        }

        Ok(ExactOutcome {
            status,
            decisions: incumbent.decisions,
            prices: incumbent.prices,
            revenue: incumbent.revenue,
            upper_bound,
            nodes,
            warm_start_used,
        })
    }

    fn accepted_warm_start(
        &self,
        state: &ProblemState,
        options: &SolveOptions,
    ) -> Option<Incumbent> {
        let warm = self.warm_start.as_ref()?;
        if !state.validate(&warm.prices, &warm.decisions) {
            if options.summary() {
                tracing::warn!("warm start does not fit the instance or is unaffordable; ignored");
            }
            return None;
        }
        Some(Incumbent {
            decisions: warm.decisions.clone(),
            prices: warm.prices.clone(),
            revenue: state.objective(&warm.prices, &warm.decisions),
        })
    }
}

impl<P: PricingSolver> Optimizer for ExactOptimizer<P> {
    fn name(&self) -> &str {
        "BranchAndBoundOptimizer"
    }

    fn optimize(
        &self,
        state: &mut ProblemState,
        options: &SolveOptions,
    ) -> Result<Bounds, SolveError> {
        state.reset();
        let outcome = self.search(state, options)?;

        state.set_all_decisions(&outcome.decisions);
        state.set_prices(&outcome.prices);

        Ok(Bounds {
            lower_bound: outcome.revenue,
            upper_bound: outcome.upper_bound,
        })
    }
}
