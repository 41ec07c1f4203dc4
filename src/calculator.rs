/// The evaluator module reduces a postfix string to one number.
///
/// The evaluator splits the postfix string on whitespace and consumes the
/// tokens left to right over a value stack, pushing operands and reducing on
/// operator tokens. It is the second and final stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates postfix token sequences with IEEE-754 arithmetic.
/// - Detects malformed sequences (unknown symbols, missing or leftover
///   operands).
/// - Collapses every failure into one opaque error at its boundary.
pub mod evaluator;
/// The lexer module tokenizes an infix expression.
///
/// The lexer (tokenizer) reads the raw input text and produces a stream of
/// tokens: multi-digit numbers, the five single-character operators, and
/// parentheses. Whitespace is stripped and is never a token. This is the
/// first stage of translation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Groups consecutive digits into one number token.
/// - Reports any character outside the supported alphabet.
pub mod lexer;
/// The operator module describes the five supported operators.
///
/// Each operator carries a precedence (1–3) and an associativity (left or
/// right). These descriptors are immutable configuration consulted by the
/// translator; the evaluator uses the same type to apply an operator to its
/// two operands.
///
/// # Responsibilities
/// - Defines the `Operator` enum and its precedence/associativity tables.
/// - Maps between operators and their single-character symbols.
/// - Applies an operator to two `f64` operands.
pub mod operator;
/// The translator module converts infix tokens to a postfix string.
///
/// The translator runs the Shunting-Yard algorithm over the token list
/// produced by the lexer: numbers go straight to the output, operators wait
/// on a parenthesis-scoped stack until precedence and associativity force
/// them out, and parentheses scope the stack without ever reaching the
/// output.
///
/// # Responsibilities
/// - Encodes precedence, associativity, and parenthesis nesting into a flat
///   postfix token sequence.
/// - Emits every token followed by a single space delimiter.
/// - Reports empty input and mismatched parentheses as structured errors.
pub mod translator;
