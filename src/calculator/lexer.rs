use logos::Logos;

use crate::{calculator::operator::Operator, error::TranslateError};

/// Represents a lexical token in an infix expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the input alphabet.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Number literal tokens: an unsigned run of digits, such as `42`.
    /// The source text is kept so the translator can emit it verbatim.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Operator tokens: one of `+`, `-`, `*`, `/`, `^`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("^", |_| Operator::Pow)]
    Op(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Whitespace. Stripped before classification, never a token boundary
    /// signal to the caller.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Tokenizes an infix expression.
///
/// Scans left to right, grouping consecutive digits into one number token
/// and emitting each operator or parenthesis as its own token. Whitespace is
/// skipped. This is a pure function of the input string.
///
/// # Parameters
/// - `input`: The raw infix expression text.
///
/// # Returns
/// The tokens in input order.
///
/// # Errors
/// Returns `TranslateError::UnexpectedCharacter` for any character that is
/// not a digit, an operator, a parenthesis, or whitespace. Letters, decimal
/// points, and sign characters are all rejected.
pub fn tokenize(input: &str) -> Result<Vec<Token>, TranslateError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                // The error slice always holds the rejected character.
                let ch = lexer.slice()
                              .chars()
                              .next()
                              .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(TranslateError::UnexpectedCharacter { ch });
            },
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::{Token, tokenize};
    use crate::{calculator::operator::Operator, error::TranslateError};

    #[test]
    fn digits_group_into_one_number_token() {
        let tokens = tokenize("123+45").unwrap();
        assert_eq!(tokens,
                   vec![Token::Number("123".to_string()),
                        Token::Op(Operator::Add),
                        Token::Number("45".to_string())]);
    }

    #[test]
    fn whitespace_is_stripped() {
        assert_eq!(tokenize("3+4").unwrap(), tokenize(" 3 +\t4 ").unwrap());
    }

    #[test]
    fn all_symbols_are_recognized() {
        let tokens = tokenize("(1+2-3*4/5^6)").unwrap();
        assert_eq!(tokens.len(), 13);
        assert_eq!(tokens[0], Token::LParen);
        assert_eq!(tokens[12], Token::RParen);
    }

    #[test]
    fn letters_are_rejected() {
        let err = tokenize("3 + a").unwrap_err();
        assert!(matches!(err, TranslateError::UnexpectedCharacter { ch: 'a' }));
    }

    #[test]
    fn decimal_points_are_rejected() {
        let err = tokenize("3.5").unwrap_err();
        assert!(matches!(err, TranslateError::UnexpectedCharacter { ch: '.' }));
    }
}
