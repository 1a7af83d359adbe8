use algebra::AlgebraError;
use thiserror::Error;

/// Reasons for rejecting a call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The input bytes are truncated, out of bounds, not canonical or
    /// describe an invalid object.
    #[error("invalid input: {0}")]
    InputError(String),
    #[error("unknown operation 0x{0:02x}")]
    UnknownOperation(u8),
    #[error("no arithmetic is instantiated for {0} limbs")]
    UnsupportedLimbCount(usize),
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}

pub(crate) fn input_error<S: Into<String>>(message: S) -> ApiError {
    ApiError::InputError(message.into())
}
