//! Operand input handling.
//!
//! Turns user-typed text into an `f64`. Anything `f64::from_str` accepts is a
//! valid operand, including `inf` and `NaN` spellings.

use crate::errors::{CalcError, Result};

/// Which side of the operator an operand sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandPosition {
    Left,
    Right,
}

impl std::fmt::Display for OperandPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperandPosition::Left => write!(f, "left"),
            OperandPosition::Right => write!(f, "right"),
        }
    }
}

/// Parse one operand, trimming surrounding whitespace.
pub fn parse_operand(position: OperandPosition, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalcError::EmptyOperand { position });
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidOperand {
            position,
            input: trimmed.to_string(),
        })
}
