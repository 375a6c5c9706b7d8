//! Options shared by every optimizer.

use std::time::{Duration, Instant};

/// How much an optimizer reports through `tracing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verbosity {
    /// Nothing above `trace!`.
    #[default]
    Silent,
    /// `info!` summaries: stage timings and incumbent improvements.
    Summary,
    /// `debug!` detail: individual moves and generations.
    Debug,
}

impl From<u8> for Verbosity {
    fn from(level: u8) -> Self {
        match level {
            0 => Verbosity::Silent,
            1 => Verbosity::Summary,
            _ => Verbosity::Debug,
        }
    }
}

/// Run-level options passed to [`Optimizer::solve`](super::Optimizer::solve).
///
/// Strategy parameters (GRASP's `alpha`, GA population size, ...) live in
/// each optimizer's own config; these are the knobs common to all of them.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_pricing::optimizer::{SolveOptions, Verbosity};
///
/// let options = SolveOptions::default()
///     .with_timeout(Duration::from_secs(30))
///     .with_seed(7)
///     .with_verbose(Verbosity::Summary);
/// assert_eq!(options.seed, 7);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveOptions {
    /// Wall-clock budget. Checked between units of work, never preemptive.
    pub timeout: Duration,
    /// Seed for randomized strategies.
    pub seed: u64,
    /// Reporting level.
    pub verbose: Verbosity,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            seed: 42,
            verbose: Verbosity::Silent,
        }
    }
}

impl SolveOptions {
    /// Sets the wall-clock budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the reporting level.
    pub fn with_verbose(mut self, verbose: impl Into<Verbosity>) -> Self {
        self.verbose = verbose.into();
        self
    }

    /// Whether summaries should be logged.
    pub fn summary(&self) -> bool {
        self.verbose >= Verbosity::Summary
    }

    /// Whether per-move detail should be logged.
    pub fn debug(&self) -> bool {
        self.verbose >= Verbosity::Debug
    }
}

/// A cooperative wall-clock deadline.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    timeout: Duration,
}

impl Deadline {
    /// Starts the clock now.
    pub fn after(timeout: Duration) -> Self {
        Self {
            start: Instant::now(),
            timeout,
        }
    }

    /// Whether the budget is used up.
    pub fn expired(&self) -> bool {
        self.start.elapsed() >= self.timeout
    }

    /// Time left, zero once expired.
    pub fn remaining(&self) -> Duration {
        self.timeout.saturating_sub(self.start.elapsed())
    }
}
