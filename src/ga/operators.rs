//! Bitstring crossover and mutation operators.
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1

use rand::Rng;

/// One-point crossover.
///
/// Draws a cut point `c` in `1..n` and returns `(a[..c] + b[c..], b[..c] + a[c..])`.
/// Parents shorter than two genes are returned as copies.
///
/// # Panics
/// Panics if the parents differ in length.
pub fn one_point_crossover<R: Rng>(a: &[bool], b: &[bool], rng: &mut R) -> (Vec<bool>, Vec<bool>) {
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    let n = a.len();
    if n < 2 {
        return (a.to_vec(), b.to_vec());
    }

    let cut = rng.random_range(1..n);
    let mut c1 = Vec::with_capacity(n);
    c1.extend_from_slice(&a[..cut]);
    c1.extend_from_slice(&b[cut..]);
    let mut c2 = Vec::with_capacity(n);
    c2.extend_from_slice(&b[..cut]);
    c2.extend_from_slice(&a[cut..]);
    (c1, c2)
}

/// Uniform crossover: each gene position swaps between the children with
/// probability 1/2.
///
/// # Panics
/// Panics if the parents differ in length.
pub fn uniform_crossover<R: Rng>(a: &[bool], b: &[bool], rng: &mut R) -> (Vec<bool>, Vec<bool>) {
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    a.iter()
        .zip(b)
        .map(|(&x, &y)| if rng.random_bool(0.5) { (y, x) } else { (x, y) })
        .unzip()
}

/// Flips each gene independently with probability `rate`. Returns the
/// number of flipped genes.
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn bit_flip_mutation<R: Rng>(genes: &mut [bool], rate: f64, rng: &mut R) -> usize {
    let mut flipped = 0;
    for gene in genes.iter_mut() {
        if rng.random_bool(rate) {
            *gene = !*gene;
            flipped += 1;
        }
    }
    flipped
}
