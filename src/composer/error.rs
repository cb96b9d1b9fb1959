//! Composer errors

use std::fmt;

/// Which side of a binary combination was missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSide {
    Left,
    Right,
    Both,
}

impl fmt::Display for OperandSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandSide::Left => write!(f, "left operand"),
            OperandSide::Right => write!(f, "right operand"),
            OperandSide::Both => write!(f, "both operands"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// A combination was attempted against an absent criterion
    InvalidOperand { side: OperandSide },
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeError::InvalidOperand { side } => {
                write!(f, "invalid combination: missing operand ({})", side)
            }
        }
    }
}

impl std::error::Error for ComposeError {}
