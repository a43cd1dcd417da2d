//--------------------------------------------------------------------
// error.rs
//--------------------------------------------------------------------
// Provides the error type shared by every geometric primitive
//--------------------------------------------------------------------

use thiserror::Error;

use crate::geometry::Coord;

/// Errors raised when a geometric operation's contract is violated.
///
/// None of these are recoverable inside the library: they are surfaced
/// to the caller as soon as the bad input is seen.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("{what} must lie in [{min}, {max}], got {value}")]
    Range { what: &'static str, value: Coord, min: Coord, max: Coord },

    #[error("cannot coerce into an angle: {reason}")]
    Coercion { reason: String },

    #[error("expected an operand with {expected} components, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("invalid subscript {index} to {type_name}")]
    Index { index: usize, type_name: &'static str },

    #[error("{operation} is undefined for a null vector")]
    Domain { operation: &'static str },
}

impl GeometryError {
    pub(crate) fn range(what: &'static str, value: Coord, min: Coord, max: Coord) -> GeometryError {
        GeometryError::Range { what, value, min, max }
    }

    pub(crate) fn domain(operation: &'static str) -> GeometryError {
        GeometryError::Domain { operation }
    }
}

pub type Result<T> = std::result::Result<T, GeometryError>;
