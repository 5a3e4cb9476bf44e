//! Output Control Module
//!
//! Renders an evaluated expression for the terminal or for scripts:
//! - `text`: `5 ^ 4 = 625`, or just `625` in quiet mode
//! - `json`: one object per evaluation

use colored::*;
use serde::{Serialize, Serializer};

use crate::calculator::Calculator;
use crate::config::OutputFormat;
use crate::operator::Operator;

/// One evaluated binary expression
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Computation {
    pub operator: Operator,
    #[serde(serialize_with = "serialize_number")]
    pub lhs: f64,
    #[serde(serialize_with = "serialize_number")]
    pub rhs: f64,
    #[serde(serialize_with = "serialize_number")]
    pub result: f64,
}

impl Computation {
    pub fn new(operator: Operator, lhs: f64, rhs: f64) -> Self {
        let result = Calculator::new().compute(operator, lhs, rhs);
        Self {
            operator,
            lhs,
            rhs,
            result,
        }
    }
}

/// Rendering switches resolved from config and CLI flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub precision: Option<usize>,
    pub quiet: bool,
    pub color: bool,
}

pub fn render(computation: &Computation, opts: &RenderOptions) -> String {
    match opts.format {
        OutputFormat::Text => render_text(computation, opts.precision, opts.quiet, opts.color),
        OutputFormat::Json => render_json(computation),
    }
}

pub fn render_text(
    computation: &Computation,
    precision: Option<usize>,
    quiet: bool,
    color: bool,
) -> String {
    let result = format_number(computation.result, precision);
    let result = if color {
        result.bold().to_string()
    } else {
        result
    };

    if quiet {
        return result;
    }

    format!(
        "{} {} {} = {}",
        format_number(computation.lhs, None),
        computation.operator.symbol(),
        format_number(computation.rhs, None),
        result
    )
}

pub fn render_json(computation: &Computation) -> String {
    // A struct of plain fields cannot fail to serialize
    serde_json::to_string(computation).unwrap_or_default()
}

/// Format a double, applying `precision` to finite values only.
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) if value.is_finite() => format!("{:.*}", p, value),
        _ => value.to_string(),
    }
}

// JSON has no literals for infinities or NaN
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&value.to_string())
    }
}
