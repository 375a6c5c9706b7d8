//! The outcome of one `solve` call.

use std::fmt;
use std::time::Duration;

/// Bounds reported by a strategy before timing and validation are added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Revenue actually achieved by the decision/price pair left in the state.
    pub lower_bound: f64,
    /// Revenue no solution can exceed.
    pub upper_bound: f64,
}

/// Result of an optimizer run.
///
/// Created once per [`Optimizer::solve`](crate::optimizer::Optimizer::solve)
/// and never modified afterwards. `is_valid` is always recomputed from the
/// final problem state, never taken from the strategy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    /// Name of the producing optimizer.
    pub name: String,
    /// Achieved revenue.
    pub lower_bound: f64,
    /// Best known upper bound on revenue.
    pub upper_bound: f64,
    /// Wall-clock time spent inside `solve`.
    pub elapsed_time: Duration,
    /// Whether every served client can afford its bundle.
    pub is_valid: bool,
}

impl SolveResult {
    /// Relative optimality gap `(ub - lb) / ub`, or 0 when `ub == 0`.
    pub fn gap(&self) -> f64 {
        if self.upper_bound.abs() < f64::EPSILON {
            0.0
        } else {
            (self.upper_bound - self.lower_bound) / self.upper_bound
        }
    }
}

impl fmt::Display for SolveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: LB={:.2} UB={:.2} gap={:.2}% time={:.3}s valid={}",
            self.name,
            self.lower_bound,
            self.upper_bound,
            self.gap() * 100.0,
            self.elapsed_time.as_secs_f64(),
            self.is_valid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(lower_bound: f64, upper_bound: f64) -> SolveResult {
        SolveResult {
            name: "Test".into(),
            lower_bound,
            upper_bound,
            elapsed_time: Duration::from_millis(1500),
            is_valid: true,
        }
    }

    #[test]
    fn test_gap() {
        assert!((result(100.0, 150.0).gap() - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(result(0.0, 0.0).gap(), 0.0);
        assert_eq!(result(80.0, 80.0).gap(), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            result(100.0, 200.0).to_string(),
            "Test: LB=100.00 UB=200.00 gap=50.00% time=1.500s valid=true"
        );
    }
}
