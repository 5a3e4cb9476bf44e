//! Integration tests for simplecalc
//!
//! These spawn the compiled binary. Each command runs in a scratch directory
//! with `HOME` pointed at it so no user config leaks in.

mod config_tests;

pub use helpers::*;
