//! Layout error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A caller-supplied parameter is outside its domain (e.g. a
    /// non-positive max column width, which would be used as a divisor).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The incoming box constraints are malformed.
    #[error("constraint violation: {axis} min {min} exceeds max {max}")]
    ConstraintViolation {
        axis: &'static str,
        min: i32,
        max: i32,
    },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
