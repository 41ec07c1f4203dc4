use crate::{
    calculator::{
        lexer::{Token, tokenize},
        operator::{Associativity, Operator},
    },
    error::TranslateError,
};

/// A symbol held on the translator's operator stack.
///
/// Open parentheses sit on the same stack as operators and act as sentinels:
/// they scope the precedence comparison and are discarded when their closing
/// parenthesis arrives, never reaching the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackEntry {
    /// A pending operator awaiting emission.
    Op(Operator),
    /// An open parenthesis scoping the stack.
    LParen,
}

/// Converts an infix expression to a postfix (RPN) string.
///
/// Runs the Shunting-Yard algorithm over the token list: numbers are emitted
/// immediately, operators wait on a stack until precedence and associativity
/// force them out, and parentheses scope the stack. Each emitted token is
/// followed by a single space, including the last one.
///
/// An incoming operator performs exactly one comparison against the current
/// stack top before being pushed, rather than popping in a loop until the
/// comparison fails. This matches the behavior the evaluator was built
/// against; do not change it without revisiting the chained-operator cases.
///
/// # Parameters
/// - `input`: The raw infix expression text.
///
/// # Returns
/// The space-delimited postfix form, e.g. `"3 4 2 * + "` for `3 + 4 * 2`.
///
/// # Errors
/// - `TranslateError::EmptyInput` if the input is empty or all whitespace.
/// - `TranslateError::UnexpectedCharacter` from tokenization.
/// - `TranslateError::ParenthesisMismatch` if a `)` has no matching `(`.
/// - `TranslateError::ExtraParenthesis` if a `(` is never closed.
///
/// # Examples
/// ```
/// use rpncalc::calculator::translator::to_postfix;
///
/// assert_eq!(to_postfix("3 + 4 * 2").unwrap(), "3 4 2 * + ");
/// assert_eq!(to_postfix("(3 + 4) * 2").unwrap(), "3 4 + 2 * ");
/// ```
pub fn to_postfix(input: &str) -> Result<String, TranslateError> {
    if input.trim().is_empty() {
        return Err(TranslateError::EmptyInput);
    }

    let tokens = tokenize(input)?;

    let mut output = String::new();
    let mut operators: Vec<StackEntry> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(digits) => {
                if !digits.chars().all(|c| c.is_ascii_digit()) {
                    return Err(TranslateError::MalformedToken { token: digits });
                }
                emit(&mut output, &digits);
            },
            Token::Op(op) => {
                if let Some(StackEntry::Op(peek)) = operators.last().copied() {
                    let pops = match op.associativity() {
                        Associativity::Left => op.precedence() <= peek.precedence(),
                        Associativity::Right => op.precedence() < peek.precedence(),
                    };
                    if pops {
                        operators.pop();
                        emit_operator(&mut output, peek);
                    }
                }
                operators.push(StackEntry::Op(op));
            },
            Token::LParen => operators.push(StackEntry::LParen),
            Token::RParen => loop {
                match operators.pop() {
                    Some(StackEntry::Op(op)) => emit_operator(&mut output, op),
                    // The sentinel itself is discarded, not emitted.
                    Some(StackEntry::LParen) => break,
                    None => return Err(TranslateError::ParenthesisMismatch),
                }
            },
            // Skipped during lexing.
            Token::Ignored => {},
        }
    }

    while let Some(entry) = operators.pop() {
        match entry {
            StackEntry::Op(op) => emit_operator(&mut output, op),
            StackEntry::LParen => return Err(TranslateError::ExtraParenthesis),
        }
    }

    Ok(output)
}

/// Appends one token to the output, followed by the space delimiter.
fn emit(output: &mut String, token: &str) {
    output.push_str(token);
    output.push(' ');
}

fn emit_operator(output: &mut String, op: Operator) {
    output.push(op.symbol());
    output.push(' ');
}

#[cfg(test)]
mod tests {
    use super::to_postfix;
    use crate::error::TranslateError;

    #[test]
    fn numbers_pass_straight_through() {
        assert_eq!(to_postfix("42").unwrap(), "42 ");
    }

    #[test]
    fn precedence_reorders_operators() {
        assert_eq!(to_postfix("3 + 4 * 2").unwrap(), "3 4 2 * + ");
        assert_eq!(to_postfix("3 * 4 + 2").unwrap(), "3 4 * 2 + ");
    }

    #[test]
    fn equal_precedence_pops_left_associative_operators() {
        assert_eq!(to_postfix("8 - 3 - 1").unwrap(), "8 3 - 1 - ");
        assert_eq!(to_postfix("1 + 2 + 3 + 4").unwrap(), "1 2 + 3 + 4 + ");
    }

    #[test]
    fn power_stacks_right_associatively() {
        assert_eq!(to_postfix("2 ^ 3 ^ 2").unwrap(), "2 3 2 ^ ^ ");
    }

    #[test]
    fn parentheses_scope_the_stack() {
        assert_eq!(to_postfix("(3 + 4) * 2").unwrap(), "3 4 + 2 * ");
        assert_eq!(to_postfix("((1 + 2))").unwrap(), "1 2 + ");
    }

    #[test]
    fn whitespace_never_changes_the_output() {
        assert_eq!(to_postfix("3+4*2").unwrap(), to_postfix(" 3 + 4 * 2 ").unwrap());
    }

    #[test]
    fn empty_input_is_rejected_before_tokenization() {
        assert!(matches!(to_postfix(""), Err(TranslateError::EmptyInput)));
        assert!(matches!(to_postfix("   \t "), Err(TranslateError::EmptyInput)));
    }

    #[test]
    fn unmatched_closing_parenthesis_is_a_mismatch() {
        assert!(matches!(to_postfix("3 + 4)"),
                         Err(TranslateError::ParenthesisMismatch)));
    }

    #[test]
    fn unclosed_opening_parenthesis_is_extra() {
        assert!(matches!(to_postfix("(3 + 4"),
                         Err(TranslateError::ExtraParenthesis)));
    }
}
