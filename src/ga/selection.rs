//! Parent selection strategies.
//!
//! Selection determines which chromosomes are chosen as parents for
//! crossover. Different strategies provide different selection pressure.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;

/// Selection strategy for choosing parents.
///
/// All strategies assume **maximization** (higher fitness = better).
/// Fitness is revenue, so it is never negative.
///
/// # Examples
///
/// ```
/// use u_pricing::ga::Selection;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let fitness = [10.0, 0.0, 0.0];
/// // Roulette never picks a zero-fitness parent while some fitness is positive.
/// assert_eq!(Selection::Roulette.select(&fitness, &mut rng), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Probability of selection is proportional to fitness. When every
    /// fitness is zero, selection is uniform.
    ///
    /// # Complexity
    /// O(n) per selection (linear scan)
    #[default]
    Roulette,

    /// Tournament selection: pick `k` chromosomes at random, select the best.
    ///
    /// Higher `k` = stronger selection pressure.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Linear rank-based selection: weight `n - rank`, best rank 0.
    ///
    /// Reference: Baker (1985), "Adaptive Selection Methods for Genetic
    /// Algorithms"
    ///
    /// # Complexity
    /// O(n log n) per selection
    Rank,
}

impl Selection {
    /// Select a parent index given the population's fitness values.
    ///
    /// # Panics
    /// Panics if `fitness` is empty.
    pub fn select<R: Rng>(&self, fitness: &[f64], rng: &mut R) -> usize {
        assert!(!fitness.is_empty(), "cannot select from empty population");

        match self {
            Selection::Roulette => roulette(fitness, rng),
            Selection::Tournament(k) => tournament(fitness, *k, rng),
            Selection::Rank => rank(fitness, rng),
        }
    }
}

fn roulette<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    let n = fitness.len();
    if n == 1 {
        return 0;
    }

    let total: f64 = fitness.iter().map(|f| f.max(0.0)).sum();
    if total <= 0.0 {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, f) in fitness.iter().enumerate() {
        cumulative += f.max(0.0);
        if cumulative > threshold {
            return i;
        }
    }

    // Rounding can leave the threshold past the last partial sum.
    fitness.iter().rposition(|&f| f > 0.0).unwrap_or(n - 1)
}

fn tournament<R: Rng>(fitness: &[f64], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = fitness.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if fitness[idx] > fitness[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

fn rank<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    let n = fitness.len();
    if n == 1 {
        return 0;
    }

    // Best first.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| fitness[b].total_cmp(&fitness[a]));

    let total = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (rank, &idx) in order.iter().enumerate() {
        cumulative += (n - rank) as f64;
        if cumulative > threshold {
            return idx;
        }
    }

    order[n - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn counts(selection: Selection, fitness: &[f64], draws: usize) -> Vec<u32> {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = vec![0u32; fitness.len()];
        for _ in 0..draws {
            counts[selection.select(fitness, &mut rng)] += 1;
        }
        counts
    }

    #[test]
    fn test_roulette_proportional() {
        let counts = counts(Selection::Roulette, &[10.0, 30.0, 60.0], 10_000);
        assert!(counts[2] > counts[1] && counts[1] > counts[0], "{counts:?}");
        // Expected share of the best is 60%.
        assert!((5_500..6_500).contains(&counts[2]), "{counts:?}");
    }

    #[test]
    fn test_roulette_skips_zero_fitness() {
        let counts = counts(Selection::Roulette, &[0.0, 5.0, 0.0, 5.0], 2_000);
        assert_eq!(counts[0], 0);
        assert_eq!(counts[2], 0);
    }

    #[test]
    fn test_roulette_all_zero_is_uniform() {
        let counts = counts(Selection::Roulette, &[0.0; 4], 10_000);
        for &c in &counts {
            assert!(c > 2_000, "expected uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let counts = counts(Selection::Tournament(4), &[10.0, 5.0, 100.0, 8.0], 10_000);
        assert!(counts[2] > 6_000, "{counts:?}");
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let counts = counts(Selection::Tournament(1), &[10.0, 5.0, 100.0, 8.0], 10_000);
        for &c in &counts {
            assert!(c > 2_000, "expected uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_rank_favors_best() {
        let counts = counts(Selection::Rank, &[100.0, 50.0, 1.0, 80.0], 10_000);
        assert!(counts[0] > counts[3]);
        assert!(counts[3] > counts[1]);
        assert!(counts[1] > counts[2]);
    }

    #[test]
    fn test_single_individual() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(Selection::Tournament(3).select(&[5.0], &mut rng), 0);
        assert_eq!(Selection::Roulette.select(&[5.0], &mut rng), 0);
        assert_eq!(Selection::Rank.select(&[5.0], &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        Selection::Roulette.select(&[], &mut rng);
    }
}
