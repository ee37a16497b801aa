//! Key generation, encoding, and syndrome decoding for the QC-MDPC
//! McEliece-style scheme.
//!
//! Key material lives in the quotient ring R = F[x]/(x^r − 1): a private
//! pair (h0, h1) of weight-w ring elements defines the parity-check matrix
//! H = [rot(h0) | rot(h1)], and the public block g = −h0·h1⁻¹ defines the
//! generator G = [I | rot(g)ᵀ]. Neither circulant matrix is ever
//! materialised — every matrix-vector product below is a convolution
//! indexed cyclically into the length-r vectors.
//!
//! One indexing convention runs through everything and is load-bearing:
//! both the parity block of a codeword and the syndrome are produced with
//! the outer index i running from r down to 1, the result landing in slot
//! r − i. Encoder, syndrome, and the decoder's column view all use the
//! same range, which is exactly what makes a flip of position j by value a
//! act on the syndrome as the subtraction of a·h_col(·).

use crate::error::Error;
use crate::gf::Field;
use crate::poly::Polynomial;
use crate::sampling::{hamming_weight, random_weighted_vector};
use itertools::Itertools;
use num_traits::{One, Zero};
use rand::Rng;
use tracing::{debug, trace};

/// Public half of a key pair: the generator block g and the block size.
#[derive(Debug, Clone)]
pub struct EncodingContext<F: Field> {
    g: Vec<F>,
    r: usize,
}

/// Private half of a key pair: the two parity-check rows, the block size,
/// and the row weight.
#[derive(Debug, Clone)]
pub struct DecodingContext<F: Field> {
    h0: Vec<F>,
    h1: Vec<F>,
    r: usize,
    w: usize,
}

/// Samples a key pair for block size `r` and row weight `w`.
///
/// h0 is a single weighted draw. h1 is drawn until it is invertible in R;
/// candidates whose coefficient sum vanishes are rejected outright (they
/// evaluate to zero at x = 1, so x − 1 divides them and no inverse can
/// exist). The loop runs until it succeeds — the density of invertible
/// elements keeps the expected number of attempts small.
///
/// Every successful inversion is re-checked by multiplication; a failed
/// check means the inverter itself is broken and surfaces as
/// [`Error::InverterBug`].
pub fn generate_keypair<F: Field, R: Rng + ?Sized>(
    rng: &mut R,
    r: usize,
    w: usize,
) -> Result<(EncodingContext<F>, DecodingContext<F>), Error> {
    if w == 0 {
        // A weight-0 row sums to zero, so the rejection loop below could
        // never terminate.
        return Err(Error::ImpossibleHammingWeight { weight: w, len: r });
    }

    // f(x) = x^r − 1, the implicit modulus of all key material.
    let mut modulus = Polynomial::with_expected_degree(r);
    modulus.set_coefficient(0, F::zero() - F::one());
    modulus.set_coefficient(r, F::one());

    let h0 = random_weighted_vector::<F, _>(rng, r, w)?;
    let h0_poly = Polynomial::from_coefficients(h0.clone());

    let mut attempts = 0usize;
    let (h1, inverse) = loop {
        attempts += 1;
        let h1 = random_weighted_vector::<F, _>(rng, r, w)?;
        let sum = h1.iter().fold(F::zero(), |acc, &c| acc + c);
        if sum.is_zero() {
            trace!(attempts, "h1 vanishes at x = 1, redrawing");
            continue;
        }
        let h1_poly = Polynomial::from_coefficients(h1.clone());
        match h1_poly.invert(&modulus)? {
            Some(inverse) => {
                let check = (&h1_poly * &inverse).div_rem(&modulus)?.1;
                if !check.is_one() {
                    return Err(Error::InverterBug);
                }
                debug!(attempts, "h1 inverted modulo x^r - 1");
                break (h1, inverse);
            }
            None => trace!(attempts, "h1 shares a factor with x^r - 1, redrawing"),
        }
    };

    let g = (&h0_poly * &inverse).div_rem(&modulus)?.1.neg();
    Ok((
        EncodingContext {
            g: g.to_vector(r),
            r,
        },
        DecodingContext { h0, h1, r, w },
    ))
}

impl<F: Field> EncodingContext<F> {
    pub fn block_size(&self) -> usize {
        self.r
    }

    /// The public generator block g.
    pub fn generator_block(&self) -> &[F] {
        &self.g
    }

    /// Systematic encoding: the message is the first block of the
    /// codeword, the second block is the circulant convolution m ⊛ g.
    pub fn encode(&self, message: &[F]) -> Result<Vec<F>, Error> {
        let r = self.r;
        if message.len() != r {
            return Err(Error::IncorrectInputVectorLength {
                expected: r,
                got: message.len(),
            });
        }
        let mut codeword = message.to_vec();
        codeword.resize(2 * r, F::zero());
        for i in (1..=r).rev() {
            let mut acc = F::zero();
            for (j, &m) in message.iter().enumerate() {
                acc = acc + m * self.g[(i + j) % r];
            }
            codeword[r + (r - i)] = acc;
        }
        Ok(codeword)
    }
}

impl<F: Field> DecodingContext<F> {
    pub fn block_size(&self) -> usize {
        self.r
    }

    pub fn row_weight(&self) -> usize {
        self.w
    }

    /// s = v·Hᵀ, with h0 correlated against the first block of `vector`
    /// and h1 against the second. Zero exactly when `vector` is a
    /// codeword.
    pub fn syndrome(&self, vector: &[F]) -> Result<Vec<F>, Error> {
        let r = self.r;
        if vector.len() != 2 * r {
            return Err(Error::IncorrectInputVectorLength {
                expected: 2 * r,
                got: vector.len(),
            });
        }
        let mut syndrome = vec![F::zero(); r];
        for i in (1..=r).rev() {
            let mut acc = F::zero();
            for j in 0..r {
                acc = acc + self.h0[(i + j) % r] * vector[j] + self.h1[(i + j) % r] * vector[r + j];
            }
            syndrome[r - i] = acc;
        }
        Ok(syndrome)
    }

    /// Iterative symbol-flipping decoder.
    ///
    /// Each pass scores every (position, non-zero value) pair by σ = how
    /// many syndrome entries the flip would zero, net of those already
    /// zero, and applies the best flip. The sentinel starts unreachably
    /// low, so a flip is applied even when nothing strictly improves the
    /// syndrome; among equal scores the latest-scanned pair wins. Returns
    /// the accumulated error vector once the syndrome vanishes, or `None`
    /// when the iteration budget runs out — a normal outcome for a
    /// probabilistic decoder, not an error.
    pub fn decode(
        &self,
        ciphertext: &[F],
        max_iterations: usize,
    ) -> Result<Option<Vec<F>>, Error> {
        let r = self.r;
        let n = 2 * r;
        if ciphertext.len() != n {
            return Err(Error::IncorrectInputVectorLength {
                expected: n,
                got: ciphertext.len(),
            });
        }
        let mut syndrome = self.syndrome(ciphertext)?;
        let mut error = vec![F::zero(); n];
        let candidates = F::nonzero_elements();
        let mut weight = hamming_weight(&syndrome);

        for iteration in 0..max_iterations {
            if weight == 0 {
                return Ok(Some(error));
            }
            trace!(iteration, weight, "symbol-flipping pass");
            let zeros_before = (r - weight) as i64;

            let mut best_sigma = -((n + 1) as i64);
            let mut best = (0, candidates[0]);
            for (j, &a) in (0..n).cartesian_product(candidates.iter()) {
                let (h, k) = self.column(j);
                let mut zeros_after = 0i64;
                for i in (1..=r).rev() {
                    if (syndrome[r - i] - a * h[(i + k) % r]).is_zero() {
                        zeros_after += 1;
                    }
                }
                let sigma = zeros_after - zeros_before;
                if sigma >= best_sigma {
                    best_sigma = sigma;
                    best = (j, a);
                }
            }

            let (j, a) = best;
            let (h, k) = self.column(j);
            for i in (1..=r).rev() {
                syndrome[r - i] = syndrome[r - i] - a * h[(i + k) % r];
            }
            error[j] = error[j] + a;
            weight = hamming_weight(&syndrome);
        }

        if weight == 0 {
            Ok(Some(error))
        } else {
            debug!(weight, "iteration budget exhausted with a non-zero syndrome");
            Ok(None)
        }
    }

    /// The parity-check column of codeword position j, as the row block it
    /// falls in plus the cyclic offset into it.
    fn column(&self, j: usize) -> (&[F], usize) {
        if j < self.r {
            (&self.h0, j)
        } else {
            (&self.h1, j - self.r)
        }
    }
}
