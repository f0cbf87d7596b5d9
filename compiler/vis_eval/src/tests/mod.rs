//! Evaluator tests.

mod operators_tests;
mod unary_operators_tests;
