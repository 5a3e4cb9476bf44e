//! simplecalc - four-function calculator with exponentiation
//!
//! Binary arithmetic over IEEE-754 doubles. Nothing in the core can fail:
//! division by zero and zero raised to a negative power produce infinities
//! or NaN, never errors.
//!
//! - **Calculator**: `add`, `sub`, `mul`, `div`, `pow` as pure functions
//! - **Operator**: names the operations for dispatch and the command line
//! - **Front end**: operand parsing, TOML config, text/JSON output
//!
//! # Quick Start
//!
//! ```
//! use simplecalc::{Calculator, Operator};
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.add(-1.0, 2.0), 1.0);
//! assert_eq!(calc.pow(5.0, -4.0), 0.0016);
//! assert_eq!(calc.compute(Operator::Div, 32.0, 0.0), f64::INFINITY);
//! ```

// ─── Core ──────────────────────────────────────────────────────────
pub mod calculator;
pub mod operator;

// ─── Front end ─────────────────────────────────────────────────────
pub mod cli;
pub mod config;
pub mod errors;
pub mod observability;
pub mod operand;
pub mod output;

pub use calculator::Calculator;
pub use config::Config;
pub use errors::{CalcError, Result};
pub use operator::Operator;
