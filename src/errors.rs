use std::path::PathBuf;
use thiserror::Error;

use crate::operand::OperandPosition;

/// Errors raised around the calculator core.
///
/// The arithmetic itself never fails; everything here comes from reading
/// operands, loading configuration, or the program surface.
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("{position} operand is empty")]
    EmptyOperand { position: OperandPosition },

    #[error("{position} operand '{input}' is not a number")]
    InvalidOperand {
        position: OperandPosition,
        input: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CalcError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
/// Reserved: clap exits with 2 on a malformed command line.
pub const EXIT_USAGE_ERROR: u8 = 2;
pub const EXIT_INPUT_ERROR: u8 = 3;
pub const EXIT_CONFIG_ERROR: u8 = 4;

/// Determine the appropriate process exit code for an error.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    if let Some(calc_err) = e.downcast_ref::<CalcError>() {
        return match calc_err {
            CalcError::EmptyOperand { .. } | CalcError::InvalidOperand { .. } => {
                EXIT_INPUT_ERROR
            }
            CalcError::Config(_) => EXIT_CONFIG_ERROR,
            _ => EXIT_ERROR,
        };
    }

    // Fallback string matching for errors that lost their type on the way up
    let msg = e.to_string().to_lowercase();
    if msg.contains("config") {
        return EXIT_CONFIG_ERROR;
    } else if msg.contains("operand") {
        return EXIT_INPUT_ERROR;
    }

    EXIT_ERROR
}
