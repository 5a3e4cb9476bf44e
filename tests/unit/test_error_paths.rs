//! Error path tests
//!
//! Operand rejection and the exit codes it maps to. Arithmetic edge cases
//! are checked here too, since they must never surface as errors.

use simplecalc::cli::evaluate;
use simplecalc::errors::{get_exit_code, EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR};
use simplecalc::operand::{parse_operand, OperandPosition};
use simplecalc::{CalcError, Operator};

#[test]
fn test_empty_left_operand() {
    let err = evaluate(Operator::Add, "", "2").unwrap_err();
    assert_eq!(get_exit_code(&err), EXIT_INPUT_ERROR);
    assert_eq!(err.to_string(), "left operand is empty");
}

#[test]
fn test_comma_decimal_is_rejected() {
    let err = parse_operand(OperandPosition::Left, "1,5").unwrap_err();
    assert!(matches!(err, CalcError::InvalidOperand { .. }));
}

#[test]
fn test_arithmetic_edge_cases_are_not_errors() {
    assert!(evaluate(Operator::Div, "0", "0").unwrap().result.is_nan());
    assert_eq!(
        evaluate(Operator::Pow, "-0", "-4").unwrap().result,
        f64::INFINITY
    );
}

#[test]
fn test_config_error_exit_code() {
    let err: anyhow::Error = CalcError::Config("bad".to_string()).into();
    assert_eq!(get_exit_code(&err), EXIT_CONFIG_ERROR);
}
