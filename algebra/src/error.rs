use thiserror::Error;

/// Failures while building algebraic objects from caller supplied parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    #[error("modulus must be odd and greater than three")]
    InvalidModulus,
    #[error("a width of {0} limbs is not supported")]
    UnsupportedLimbCount(usize),
    #[error("expected {expected} bytes, got {got}")]
    InvalidEncodingLength { expected: usize, got: usize },
    #[error("value is not reduced modulo the field characteristic")]
    NotReduced,
    #[error("{0} does not divide the order of the multiplicative group")]
    FrobeniusDivisibility(u64),
    #[error("element is not invertible")]
    NotInvertible,
    #[error("got {bases} bases and {scalars} scalars")]
    LengthMismatch { bases: usize, scalars: usize },
}
