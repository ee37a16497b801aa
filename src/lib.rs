//! A McEliece-style public-key cryptosystem over non-binary quasi-cyclic
//! moderate-density parity-check codes, following the Baldi et al.
//! construction for LDPC/MDPC codes over GF(2^N), with GF(4) as the
//! concrete field.
//!
//! This is a research implementation: plain `rand` randomness, no
//! side-channel hardening, no key serialisation. What it does carry is the
//! full algebraic engine the scheme stands on:
//!
//! - [`gf`]: GF(2^N) field arithmetic behind the [`Field`] trait, with the
//!   table-driven [`Gf4`] instance;
//! - [`sampling`]: uniform and fixed-weight random vectors over a field;
//! - [`poly`]: canonical-form polynomials, Euclidean division, and the
//!   half-GCD extended Euclidean algorithm used for inversion in
//!   F[x]/(x^r − 1);
//! - [`mdpc`]: key generation, systematic circulant encoding, and the
//!   iterative symbol-flipping decoder.
//!
//! The three entry points are [`generate_keypair`],
//! [`EncodingContext::encode`], and [`DecodingContext::decode`]; decode
//! returning `Ok(None)` means the decoder ran out of iterations, which is a
//! normal outcome for a probabilistic decoder — retry with a larger budget.
//!
//! ```no_run
//! use qcmdpc::{generate_keypair, sampling, Gf4};
//!
//! let mut rng = rand::thread_rng();
//! let (public, private) = generate_keypair::<Gf4, _>(&mut rng, 2339, 37)?;
//! let message = sampling::random_vector::<Gf4, _>(&mut rng, 2339);
//! let codeword = public.encode(&message)?;
//! let error = private.decode(&codeword, 100)?;
//! assert!(error.is_some());
//! # Ok::<(), qcmdpc::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod gf;
pub mod mdpc;
pub mod poly;
pub mod sampling;

pub use error::Error;
pub use gf::{Field, Gf4};
pub use mdpc::{generate_keypair, DecodingContext, EncodingContext};
pub use poly::{Polynomial, Transform};
