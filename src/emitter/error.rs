//! Emitter errors

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum EmitError {
    /// Literal that has no SQL representation (e.g. NaN)
    InvalidLiteral(String),
    /// Predicate the emitter cannot express (e.g. ordering against NULL)
    InvalidPredicate(String),
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::InvalidLiteral(lit) => {
                write!(f, "Invalid literal: {}", lit)
            }
            EmitError::InvalidPredicate(msg) => {
                write!(f, "Invalid predicate: {}", msg)
            }
        }
    }
}

impl std::error::Error for EmitError {}
