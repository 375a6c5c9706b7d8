//! Branch-and-bound configuration and warm-start input.

/// Configuration for [`ExactOptimizer`](super::ExactOptimizer).
///
/// ```
/// use u_pricing::exact::ExactConfig;
///
/// let config = ExactConfig::default().with_max_nodes(5_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactConfig {
    /// Maximum number of search nodes expanded before stopping with the
    /// best bound proven so far.
    pub max_nodes: usize,
}

impl Default for ExactConfig {
    fn default() -> Self {
        Self { max_nodes: 100_000 }
    }
}

impl ExactConfig {
    /// Sets the node limit.
    pub fn with_max_nodes(mut self, n: usize) -> Self {
        self.max_nodes = n;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_nodes == 0 {
            return Err("max_nodes must be at least 1".into());
        }
        Ok(())
    }
}

/// An initial assignment handed to the exact solver.
///
/// Decisions are indexed by the state's current client order. A warm start
/// that does not fit the state, or whose prices some served client cannot
/// afford, is not used as incumbent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WarmStart {
    pub decisions: Vec<bool>,
    pub prices: Vec<f64>,
}

impl WarmStart {
    pub fn new(decisions: Vec<bool>, prices: Vec<f64>) -> Self {
        Self { decisions, prices }
    }
}
