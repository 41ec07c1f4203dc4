#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while translating infix to postfix.
pub enum TranslateError {
    /// The input was empty or contained only whitespace.
    EmptyInput,
    /// Found a character outside the supported alphabet of digits,
    /// operators, parentheses, and whitespace.
    UnexpectedCharacter {
        /// The character encountered.
        ch: char,
    },
    /// A closing parenthesis `)` had no matching open parenthesis.
    ParenthesisMismatch,
    /// An open parenthesis `(` was never closed.
    ExtraParenthesis,
    /// A multi-character token was not numeric. Unreachable through the
    /// lexer; kept as a defensive check in the translator.
    MalformedToken {
        /// The offending token text.
        token: String,
    },
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Error: Input is empty."),

            Self::UnexpectedCharacter { ch } => {
                write!(f, "Error: Unexpected character '{ch}'.")
            },

            Self::ParenthesisMismatch => {
                write!(f, "Error: Parenthesis mismatch: ')' without a matching '('.")
            },

            Self::ExtraParenthesis => {
                write!(f, "Error: Mismatched parenthesis: extra '(' left open.")
            },

            Self::MalformedToken { token } => {
                write!(f, "Error: Token '{token}' is not numeric and has length > 1.")
            },
        }
    }
}

impl std::error::Error for TranslateError {}
