//! Arithmetic in GF(2^N), with GF(4) as the concrete instance.
//!
//! Elements of GF(2^N) are represented by their integer form: the bits of
//! the integer are the coefficients of a polynomial over GF(2), so addition
//! is plain XOR and every element is its own additive inverse. For GF(4)
//! the four elements are {0, 1, α, α+1} with α² = α + 1, represented as
//! 0..=3, and multiplication/division are small lookup tables.
//!
//! Everything downstream (polynomials, key generation, the decoder) is
//! generic over [`Field`], so swapping in a wider GF(2^N) only means
//! providing another instance of this trait. The one behavioural contract
//! beyond the algebra is that [`Field::nonzero_elements`] enumerates in a
//! fixed order: the decoder's tie-breaking depends on a stable scan order.

use crate::error::Error;
use num_traits::{One, Zero};
use rand::Rng;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Capability set required of a coefficient field.
///
/// Zero/one construction and tests come from `num_traits`; addition,
/// subtraction and multiplication from the standard operator traits.
/// Division is explicit and checked because dividing by zero is a caller
/// error, not a value.
pub trait Field:
    Copy
    + Eq
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Zero
    + One
{
    /// Number of elements in the field; valid representations are
    /// `0..ORDER`.
    const ORDER: usize;

    /// Builds an element from its integer representation.
    fn from_repr(repr: u8) -> Result<Self, Error>;

    /// The integer representation of this element.
    fn repr(self) -> u8;

    /// `self / rhs`, failing on a zero divisor.
    fn checked_div(self, rhs: Self) -> Result<Self, Error>;

    /// All non-zero elements, in a fixed order that is identical across
    /// calls.
    fn nonzero_elements() -> Vec<Self>;

    /// Uniform draw over the whole field.
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Uniform draw over the non-zero elements.
    fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

/// An element of GF(4) = GF(2)[α]/(α² + α + 1).
///
/// 0 and 1 are themselves, 2 is α, 3 is α + 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gf4(u8);

// MUL[a][b] = a·b. Row 2 is multiplication by α: α·α = α+1, α·(α+1) = 1.
const MUL: [[u8; 4]; 4] = [
    [0, 0, 0, 0],
    [0, 1, 2, 3],
    [0, 2, 3, 1],
    [0, 3, 1, 2],
];

// DIV[a][b - 1] = a/b for b ≠ 0, i.e. a·b⁻¹ with 2⁻¹ = 3 and 3⁻¹ = 2.
const DIV: [[u8; 3]; 4] = [
    [0, 0, 0],
    [1, 3, 2],
    [2, 1, 3],
    [3, 2, 1],
];

impl Add for Gf4 {
    type Output = Self;

    // Characteristic 2: addition is XOR of the GF(2) coefficient vectors.
    fn add(self, rhs: Self) -> Self {
        Gf4(self.0 ^ rhs.0)
    }
}

impl Sub for Gf4 {
    type Output = Self;

    // Every element is its own additive inverse, so a - b = a + b.
    fn sub(self, rhs: Self) -> Self {
        Gf4(self.0 ^ rhs.0)
    }
}

impl Mul for Gf4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Gf4(MUL[self.0 as usize][rhs.0 as usize])
    }
}

impl Zero for Gf4 {
    fn zero() -> Self {
        Gf4(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl One for Gf4 {
    fn one() -> Self {
        Gf4(1)
    }

    fn is_one(&self) -> bool {
        self.0 == 1
    }
}

impl fmt::Display for Gf4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Field for Gf4 {
    const ORDER: usize = 4;

    fn from_repr(repr: u8) -> Result<Self, Error> {
        if repr as usize >= Self::ORDER {
            return Err(Error::IncorrectValueRange(repr));
        }
        Ok(Gf4(repr))
    }

    fn repr(self) -> u8 {
        self.0
    }

    fn checked_div(self, rhs: Self) -> Result<Self, Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Gf4(DIV[self.0 as usize][rhs.0 as usize - 1]))
    }

    fn nonzero_elements() -> Vec<Self> {
        vec![Gf4(1), Gf4(2), Gf4(3)]
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Gf4(rng.gen_range(0..=3))
    }

    fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Gf4(rng.gen_range(1..=3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> Vec<Gf4> {
        (0..4).map(|i| Gf4::from_repr(i).unwrap()).collect()
    }

    #[test]
    fn known_products() {
        // α · (α+1) = α² + α = 1
        assert_eq!(Gf4(2) * Gf4(3), Gf4(1));
        // α · α = α + 1
        assert_eq!(Gf4(2) * Gf4(2), Gf4(3));
        assert_eq!(Gf4(2) + Gf4(3), Gf4(1));
        assert_eq!(Gf4(1).checked_div(Gf4(2)).unwrap(), Gf4(3));
    }

    #[test]
    fn addition_is_subtraction() {
        for &a in &all() {
            for &b in &all() {
                assert_eq!(a + b, b + a);
                assert_eq!(a - b, a + b);
            }
        }
    }

    #[test]
    fn distributivity() {
        for &a in &all() {
            for &b in &all() {
                for &c in &all() {
                    assert_eq!(a * (b + c), a * b + a * c);
                    assert_eq!((a * b) * c, a * (b * c));
                }
            }
        }
    }

    #[test]
    fn division_inverts_multiplication() {
        for &a in &Gf4::nonzero_elements() {
            assert_eq!(a.checked_div(a).unwrap(), Gf4(1));
            let inv = Gf4(1).checked_div(a).unwrap();
            assert_eq!(inv * a, Gf4(1));
            for &b in &all() {
                assert_eq!((b * a).checked_div(a).unwrap(), b);
            }
        }
    }

    #[test]
    fn identity_laws() {
        for &a in &all() {
            assert_eq!(a + Gf4(0), a);
            assert_eq!(a * Gf4(1), a);
            assert_eq!(a * Gf4(0), Gf4(0));
            assert_eq!(a - a, Gf4(0));
        }
    }

    #[test]
    fn division_by_zero_fails() {
        assert_eq!(Gf4(3).checked_div(Gf4(0)), Err(Error::DivisionByZero));
    }

    #[test]
    fn nonzero_enumeration_is_stable() {
        let first = Gf4::nonzero_elements();
        assert_eq!(first.len(), Gf4::ORDER - 1);
        assert_eq!(first, Gf4::nonzero_elements());
        for (idx, &a) in first.iter().enumerate() {
            assert!(!a.is_zero());
            for &b in &first[idx + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn repr_round_trip() {
        for i in 0..4 {
            assert_eq!(Gf4::from_repr(i).unwrap().repr(), i);
        }
        assert_eq!(Gf4::from_repr(4), Err(Error::IncorrectValueRange(4)));
        assert_eq!(Gf4::from_repr(255), Err(Error::IncorrectValueRange(255)));
    }
}
