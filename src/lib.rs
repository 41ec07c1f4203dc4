//! # rpncalc
//!
//! rpncalc is a small arithmetic calculator written in Rust.
//! It converts infix expressions to postfix (Reverse Polish) notation with
//! the Shunting-Yard algorithm and evaluates the postfix form with a value
//! stack.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::calculator::{evaluator::eval_postfix, translator::to_postfix};

/// Implements the two-stage calculation pipeline.
///
/// This module ties together the lexer, the infix-to-postfix translator, and
/// the postfix evaluator. Data flows one direction only: raw text is
/// tokenized, the token list is translated to a space-delimited postfix
/// string, and that string is reduced to a single numeric value.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, translator, and evaluator.
/// - Provides entry points for translating and evaluating expressions.
/// - Keeps each stage a pure function with no shared state between calls.
pub mod calculator;
/// Provides the error types for translation and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// translating, or evaluating an expression. Translator errors are
/// structured and informative; the evaluator error is deliberately opaque at
/// the public boundary.
///
/// # Responsibilities
/// - Defines error enums for all translator failure modes.
/// - Collapses every evaluator failure into one opaque error type.
/// - Supports integration with standard error handling traits.
pub mod error;

/// Translates an infix expression and evaluates the resulting postfix form.
///
/// This is the one-shot entry point used by the session loop. The translator
/// surfaces its failures as structured errors; any evaluator failure is
/// rendered as the literal string `error` instead, so no detail about a
/// malformed postfix form crosses the evaluator boundary.
///
/// # Errors
/// Returns a [`TranslateError`](error::TranslateError) if the input is
/// empty, contains an unexpected character, or has mismatched parentheses.
///
/// # Examples
/// ```
/// use rpncalc::calculate;
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(calculate("3 + 4 * 2").unwrap(), "11");
///
/// // Parentheses override precedence.
/// assert_eq!(calculate("(3 + 4) * 2").unwrap(), "14");
///
/// // An unmatched parenthesis is a translator error.
/// assert!(calculate("(3 + 4").is_err());
/// ```
pub fn calculate(input: &str) -> Result<String, error::TranslateError> {
    let postfix = to_postfix(input)?;

    Ok(match eval_postfix(&postfix) {
           Ok(value) => value.to_string(),
           Err(_) => "error".to_string(),
       })
}
