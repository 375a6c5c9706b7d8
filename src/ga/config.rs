//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, selection strategy, operator choice and the
/// stagnation restart.
///
/// # Defaults
///
/// ```
/// use u_pricing::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default();
/// assert_eq!(config.pop_size, 20);
/// assert_eq!(config.num_generations, 100);
/// assert_eq!(config.selection, Selection::Roulette);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_pricing::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_pop_size(50)
///     .with_selection(Selection::Tournament(3))
///     .with_uniform_cross(true)
///     .with_mut_rate(0.02);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Maximum number of generations before termination.
    pub num_generations: usize,

    /// Number of chromosomes kept after each truncation.
    pub pop_size: usize,

    /// Per-gene bit-flip probability applied to every child (0.0–1.0).
    pub mut_rate: f64,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Uniform crossover when `true`, one-point crossover otherwise.
    pub uniform_cross: bool,

    /// Generations without a new best before a partial restart.
    ///
    /// Set to 0 to disable restarts.
    pub stagnation_limit: usize,

    /// Number of worst chromosomes re-randomized on restart.
    ///
    /// Capped at `pop_size - 1` so the best chromosome always survives.
    pub restart_count: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            num_generations: 100,
            pop_size: 20,
            mut_rate: 0.05,
            selection: Selection::default(),
            uniform_cross: false,
            stagnation_limit: 10,
            restart_count: 10,
        }
    }
}

impl GaConfig {
    /// Sets the maximum number of generations.
    pub fn with_num_generations(mut self, n: usize) -> Self {
        self.num_generations = n;
        self
    }

    /// Sets the population size.
    pub fn with_pop_size(mut self, n: usize) -> Self {
        self.pop_size = n;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mut_rate(mut self, rate: f64) -> Self {
        self.mut_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for setting tournament size.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Chooses uniform (`true`) or one-point (`false`) crossover.
    pub fn with_uniform_cross(mut self, uniform: bool) -> Self {
        self.uniform_cross = uniform;
        self
    }

    /// Sets the stagnation limit (0 to disable restarts).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets how many chromosomes a restart re-randomizes.
    pub fn with_restart_count(mut self, n: usize) -> Self {
        self.restart_count = n;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.pop_size < 2 {
            return Err("pop_size must be at least 2".into());
        }
        if self.num_generations == 0 {
            return Err("num_generations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mut_rate) {
            return Err(format!("mut_rate must lie in [0, 1], got {}", self.mut_rate));
        }
        if self.selection == Selection::Tournament(0) {
            return Err("tournament size must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.num_generations, 100);
        assert_eq!(config.pop_size, 20);
        assert!((config.mut_rate - 0.05).abs() < 1e-12);
        assert_eq!(config.selection, Selection::Roulette);
        assert!(!config.uniform_cross);
        assert_eq!(config.stagnation_limit, 10);
        assert_eq!(config.restart_count, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_num_generations(300)
            .with_pop_size(40)
            .with_mut_rate(0.1)
            .with_selection(Selection::Rank)
            .with_uniform_cross(true)
            .with_stagnation_limit(0)
            .with_restart_count(5);

        assert_eq!(config.num_generations, 300);
        assert_eq!(config.pop_size, 40);
        assert!((config.mut_rate - 0.1).abs() < 1e-12);
        assert_eq!(config.selection, Selection::Rank);
        assert!(config.uniform_cross);
        assert_eq!(config.stagnation_limit, 0);
        assert_eq!(config.restart_count, 5);
    }

    #[test]
    fn test_clamp_mut_rate() {
        assert_eq!(GaConfig::default().with_mut_rate(1.5).mut_rate, 1.0);
        assert_eq!(GaConfig::default().with_mut_rate(-0.5).mut_rate, 0.0);
    }

    #[test]
    fn test_validate_population_too_small() {
        assert!(GaConfig::default().with_pop_size(1).validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        assert!(GaConfig::default().with_num_generations(0).validate().is_err());
    }

    #[test]
    fn test_validate_nan_mut_rate() {
        let config = GaConfig {
            mut_rate: f64::NAN,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_tournament() {
        assert!(GaConfig::default().with_tournament_size(0).validate().is_err());
        assert!(GaConfig::default().with_tournament_size(2).validate().is_ok());
    }
}
