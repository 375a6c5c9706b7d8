//! Chromosome representation.

use crate::error::PricingError;
use crate::pricing::{price_or_zero, PricingSolver};
use crate::problem::ProblemState;
use rand::Rng;

/// A serve / don't-serve bitstring over the clients, with cached fitness.
///
/// Fitness is the pricing optimum for the served set encoded by the genes.
/// It is computed at most once per gene configuration: every method that
/// writes genes clears the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    genes: Vec<bool>,
    fitness: Option<f64>,
}

impl Chromosome {
    /// Each gene set independently with probability 1/2.
    pub fn random<R: Rng>(n_genes: usize, rng: &mut R) -> Self {
        Self::from_genes((0..n_genes).map(|_| rng.random_bool(0.5)).collect())
    }

    /// Unevaluated chromosome with the given genes.
    pub fn from_genes(genes: Vec<bool>) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Cached fitness, `None` until evaluated or after any gene write.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    pub fn set_gene(&mut self, index: usize, value: bool) {
        self.genes[index] = value;
        self.fitness = None;
    }

    pub fn flip(&mut self, index: usize) {
        self.genes[index] = !self.genes[index];
        self.fitness = None;
    }

    /// Returns the cached fitness or prices the genes and caches the result.
    ///
    /// An infeasible pricing subproblem scores zero.
    pub fn evaluate<P: PricingSolver + ?Sized>(
        &mut self,
        pricer: &P,
        state: &ProblemState,
    ) -> Result<f64, PricingError> {
        if let Some(fitness) = self.fitness {
            return Ok(fitness);
        }
        let fitness = price_or_zero(pricer, state, &self.genes)?.revenue;
        self.fitness = Some(fitness);
        Ok(fitness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::Pricing;
    use crate::problem::{Client, Instance};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingPricer {
        calls: AtomicUsize,
    }

    impl PricingSolver for CountingPricer {
        fn price(&self, state: &ProblemState, decisions: &[bool]) -> Result<Pricing, PricingError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            Ok(Pricing {
                revenue: decisions.iter().filter(|&&x| x).count() as f64,
                prices: vec![0.0; state.n_products()],
            })
        }
    }

    fn state() -> ProblemState {
        let instance = Instance::new(
            1,
            vec![Client::new(1.0, [0]), Client::new(2.0, [0]), Client::new(3.0, [0])],
        )
        .unwrap();
        ProblemState::new(&instance)
    }

    #[test]
    fn test_fitness_cached() {
        let state = state();
        let pricer = CountingPricer {
            calls: AtomicUsize::new(0),
        };
        let mut c = Chromosome::from_genes(vec![true, false, true]);
        assert_eq!(c.fitness(), None);

        assert_eq!(c.evaluate(&pricer, &state).unwrap(), 2.0);
        assert_eq!(c.evaluate(&pricer, &state).unwrap(), 2.0);
        assert_eq!(pricer.calls.load(Ordering::Relaxed), 1);
        assert_eq!(c.fitness(), Some(2.0));
    }

    #[test]
    fn test_gene_writes_invalidate_fitness() {
        let state = state();
        let pricer = CountingPricer {
            calls: AtomicUsize::new(0),
        };
        let mut c = Chromosome::from_genes(vec![false, false, false]);
        c.evaluate(&pricer, &state).unwrap();

        c.set_gene(1, true);
        assert_eq!(c.fitness(), None);
        assert_eq!(c.evaluate(&pricer, &state).unwrap(), 1.0);

        c.flip(0);
        assert_eq!(c.fitness(), None);
        assert_eq!(c.evaluate(&pricer, &state).unwrap(), 2.0);
        assert_eq!(pricer.calls.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_random_reproducible() {
        let a = Chromosome::random(32, &mut StdRng::seed_from_u64(11));
        let b = Chromosome::random(32, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.fitness().is_none());
    }
}
