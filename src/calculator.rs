//! Calculator Core
//!
//! Five binary operations over IEEE-754 doubles. Nothing here can fail:
//! division by zero and zero raised to a negative power come back as
//! infinities or NaN, exactly as the hardware produces them.

use crate::operator::Operator;

/// Stateless calculator.
///
/// Zero-sized and `Copy`, so it can be shared freely across threads. Every
/// method is a pure function of its two operands.
///
/// ```
/// use simplecalc::Calculator;
///
/// let calc = Calculator::new();
/// assert_eq!(calc.pow(-5.0, 3.0), -125.0);
/// assert_eq!(calc.div(32.0, 0.0), f64::INFINITY);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    pub const fn new() -> Self {
        Self
    }

    /// `a + b`
    #[inline]
    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    /// `a - b`
    #[inline]
    pub fn sub(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    /// `a * b`. Zero times infinity is NaN.
    #[inline]
    pub fn mul(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// `a / b` with IEEE-754 semantics: `x / 0` is a signed infinity and
    /// `0 / 0` is NaN.
    #[inline]
    pub fn div(&self, a: f64, b: f64) -> f64 {
        a / b
    }

    /// `a` raised to `b`.
    ///
    /// `x^0` is 1 for every `x`, `0^y` is `+inf` for negative `y`, and a
    /// negative base keeps its sign under odd integer exponents.
    #[inline]
    pub fn pow(&self, a: f64, b: f64) -> f64 {
        a.powf(b)
    }

    /// Dispatch to the operation named by `op`.
    pub fn compute(&self, op: Operator, a: f64, b: f64) -> f64 {
        match op {
            Operator::Add => self.add(a, b),
            Operator::Sub => self.sub(a, b),
            Operator::Mul => self.mul(a, b),
            Operator::Div => self.div(a, b),
            Operator::Pow => self.pow(a, b),
        }
    }
}
