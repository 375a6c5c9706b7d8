//! GRASP configuration.

/// Configuration for the GRASP optimizer.
///
/// # Examples
///
/// ```
/// use u_pricing::grasp::GraspConfig;
///
/// let config = GraspConfig::default()
///     .with_iterations(20)
///     .with_alpha(0.1);
/// assert_eq!(config.iterations, 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspConfig {
    /// Number of construct + local-search iterations.
    pub iterations: usize,

    /// RCL threshold in `[0, 1]`.
    ///
    /// A candidate enters the restricted candidate list when its marginal
    /// revenue is at least `Δmin + alpha · (Δmax − Δmin)`. `alpha = 1`
    /// keeps only the best candidates (pure greedy); `alpha = 0` admits
    /// every candidate (pure random).
    pub alpha: f64,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            alpha: 0.3,
        }
    }
}

impl GraspConfig {
    /// Sets the number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the RCL threshold. Not clamped; see [`validate`](Self::validate).
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.iterations == 0 {
            return Err("iterations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(format!("alpha must lie in [0, 1], got {}", self.alpha));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraspConfig::default();
        assert_eq!(config.iterations, 100);
        assert!((config.alpha - 0.3).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_alpha_out_of_range() {
        assert!(GraspConfig::default().with_alpha(-0.1).validate().is_err());
        assert!(GraspConfig::default().with_alpha(1.5).validate().is_err());
        assert!(GraspConfig::default().with_alpha(f64::NAN).validate().is_err());
        assert!(GraspConfig::default().with_alpha(0.0).validate().is_ok());
        assert!(GraspConfig::default().with_alpha(1.0).validate().is_ok());
    }

    #[test]
    fn test_zero_iterations() {
        assert!(GraspConfig::default().with_iterations(0).validate().is_err());
    }
}
