//! Random vectors over a finite field.
//!
//! The PRNG is always an explicit `&mut impl Rng` handle owned by the
//! caller: the demo binary hands in `thread_rng` (or a seeded `StdRng` when
//! reproducibility is wanted) and the tests always seed. Nothing here needs
//! cryptographic randomness, only a uniform one.

use crate::error::Error;
use crate::gf::Field;
use num_traits::Zero;
use rand::seq::SliceRandom;
use rand::Rng;

/// A length-`len` vector with every entry drawn uniformly from F.
pub fn random_vector<F: Field, R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<F> {
    (0..len).map(|_| F::random(rng)).collect()
}

/// A length-`len` vector with exactly `weight` non-zero entries, each drawn
/// uniformly from F\{0}.
///
/// The non-zero draws are placed in the first `weight` slots and the whole
/// vector is then shuffled in place (Fisher–Yates, via `SliceRandom`), which
/// makes every support set equally likely.
pub fn random_weighted_vector<F: Field, R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    weight: usize,
) -> Result<Vec<F>, Error> {
    if weight > len {
        return Err(Error::ImpossibleHammingWeight { weight, len });
    }
    let mut v: Vec<F> = (0..len)
        .map(|i| {
            if i < weight {
                F::random_nonzero(rng)
            } else {
                F::zero()
            }
        })
        .collect();
    v.shuffle(rng);
    Ok(v)
}

/// Number of non-zero entries.
pub fn hamming_weight<F: Field>(v: &[F]) -> usize {
    v.iter().filter(|c| !c.is_zero()).count()
}
