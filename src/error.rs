use thiserror::Error;

/// Everything that can go wrong in the algebraic core.
///
/// Decoder failure is deliberately absent: a symbol-flipping decoder that
/// runs out of iterations has not hit an error, it has hit its design
/// failure rate, and reports `None` instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("division by zero")]
    DivisionByZero,

    #[error("input vector has length {got}, expected {expected}")]
    IncorrectInputVectorLength { expected: usize, got: usize },

    #[error("{0} is not the representation of a field element")]
    IncorrectValueRange(u8),

    #[error("cannot place {weight} non-zero entries in a vector of length {len}")]
    ImpossibleHammingWeight { weight: usize, len: usize },

    #[error("inverter returned a polynomial that is not an inverse")]
    InverterBug,
}
