//! Operator names for the five calculator operations.

use serde::{Deserialize, Serialize};

/// Binary operation selector
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition
    #[value(aliases = ["+", "plus"])]
    Add,
    /// Subtraction
    #[value(aliases = ["-", "minus"])]
    Sub,
    /// Multiplication
    #[value(aliases = ["*", "x", "times"])]
    Mul,
    /// Division (division by zero yields an infinity or NaN)
    #[value(aliases = ["/", "over"])]
    Div,
    /// Exponentiation
    #[value(aliases = ["^", "**", "power"])]
    Pow,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];

    /// Infix symbol used when rendering an expression.
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Sub => "sub",
            Operator::Mul => "mul",
            Operator::Div => "div",
            Operator::Pow => "pow",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
