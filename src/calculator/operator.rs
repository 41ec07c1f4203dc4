/// Grouping direction for operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// Repeated application groups left to right, as in `8 - 3 - 1`.
    Left,
    /// Repeated application groups right to left, as in `2 ^ 3 ^ 2`.
    Right,
}

/// One of the five supported binary operators.
///
/// Every operator is a single character in the source text. The precedence
/// and associativity tables live here as `const` lookups, so the translator
/// needs no mutable global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl Operator {
    /// Returns the binding strength of the operator, from 1 (weakest, `+`
    /// and `-`) to 3 (strongest, `^`).
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 3,
            Self::Mul | Self::Div => 2,
            Self::Add | Self::Sub => 1,
        }
    }

    /// Returns the associativity of the operator. Only exponentiation is
    /// right-associative.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Returns the single-character symbol the operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Looks up the operator named by a postfix token.
    ///
    /// # Parameters
    /// - `token`: A whitespace-delimited postfix token.
    ///
    /// # Returns
    /// `Some(Operator)` if the token is one of the five operator symbols,
    /// `None` otherwise.
    #[must_use]
    pub fn from_symbol(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "^" => Some(Self::Pow),
            _ => None,
        }
    }

    /// Applies the operator to its two operands.
    ///
    /// Arithmetic follows IEEE-754 throughout: dividing by zero yields an
    /// infinity or NaN rather than an error.
    ///
    /// # Parameters
    /// - `x`: The first operand (popped second by the evaluator).
    /// - `y`: The second operand (popped first by the evaluator).
    ///
    /// # Returns
    /// The value of `x <op> y`.
    #[must_use]
    pub fn apply(self, x: f64, y: f64) -> f64 {
        match self {
            Self::Add => x + y,
            Self::Sub => x - y,
            Self::Mul => x * y,
            Self::Div => x / y,
            Self::Pow => x.powf(y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Associativity, Operator};

    #[test]
    fn precedence_orders_the_operators() {
        assert!(Operator::Pow.precedence() > Operator::Mul.precedence());
        assert!(Operator::Mul.precedence() > Operator::Add.precedence());
        assert_eq!(Operator::Mul.precedence(), Operator::Div.precedence());
        assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
    }

    #[test]
    fn only_power_is_right_associative() {
        assert_eq!(Operator::Pow.associativity(), Associativity::Right);
        assert_eq!(Operator::Add.associativity(), Associativity::Left);
        assert_eq!(Operator::Sub.associativity(), Associativity::Left);
        assert_eq!(Operator::Mul.associativity(), Associativity::Left);
        assert_eq!(Operator::Div.associativity(), Associativity::Left);
    }

    #[test]
    fn symbols_round_trip() {
        for op in [Operator::Add,
                   Operator::Sub,
                   Operator::Mul,
                   Operator::Div,
                   Operator::Pow]
        {
            assert_eq!(Operator::from_symbol(&op.symbol().to_string()), Some(op));
        }
        assert_eq!(Operator::from_symbol("%"), None);
        assert_eq!(Operator::from_symbol("42"), None);
    }

    #[test]
    fn division_by_zero_is_infinite() {
        assert_eq!(Operator::Div.apply(5.0, 0.0), f64::INFINITY);
        assert!(Operator::Div.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn power_uses_floating_point() {
        assert_eq!(Operator::Pow.apply(2.0, 10.0), 1024.0);
        assert_eq!(Operator::Pow.apply(2.0, -1.0), 0.5);
    }
}
