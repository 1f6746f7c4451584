//! Arithmetic operators.

use std::fmt::{self, Display};

/// One of the four arithmetic operators available on the keypad.
///
/// `Display` writes the operator's symbol, which is also what the calculator
/// shows right after the operator is selected.
///
/// # Examples
///
/// ```
/// use calculator_core::Operator;
///
/// assert_eq!(Operator::Multiply.to_string(), "*");
/// assert_eq!(Operator::from_symbol('/'), Some(Operator::Divide));
/// assert_eq!(Operator::Subtract.apply(2, 5), Some(-3));
/// assert_eq!(Operator::Divide.apply(7, 0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition.
    Add,
    /// Subtraction.
    Subtract,
    /// Multiplication.
    Multiply,
    /// Integer division, truncating toward zero.
    Divide,
}

impl Operator {
    /// All operators, in keypad order from top to bottom.
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator's symbol.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Looks up the operator whose symbol is `symbol`.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let mut buf = [0; 4];
        let symbol = &*symbol.encode_utf8(&mut buf);
        Self::ALL.into_iter().find(|op| op.as_str() == symbol)
    }

    /// Applies the operator to `lhs` and `rhs`.
    ///
    /// Overflow wraps around. Returns `None` only when dividing by zero.
    #[must_use]
    pub const fn apply(self, lhs: i32, rhs: i32) -> Option<i32> {
        match self {
            Self::Add => Some(lhs.wrapping_add(rhs)),
            Self::Subtract => Some(lhs.wrapping_sub(rhs)),
            Self::Multiply => Some(lhs.wrapping_mul(rhs)),
            Self::Divide => {
                if rhs == 0 {
                    None
                } else {
                    Some(lhs.wrapping_div(rhs))
                }
            }
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for (symbol, op) in ['/', '*', '-', '+'].into_iter().zip(Operator::ALL) {
            assert_eq!(Operator::from_symbol(symbol), Some(op));
            assert_eq!(op.to_string(), symbol.to_string());
        }
        assert_eq!(Operator::from_symbol('='), None);
        assert_eq!(Operator::from_symbol('x'), None);
    }

    #[test]
    fn test_apply_basic() {
        assert_eq!(Operator::Add.apply(5, 3), Some(8));
        assert_eq!(Operator::Subtract.apply(5, 3), Some(2));
        assert_eq!(Operator::Multiply.apply(5, 3), Some(15));
        assert_eq!(Operator::Divide.apply(15, 3), Some(5));
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        assert_eq!(Operator::Divide.apply(7, 2), Some(3));
        assert_eq!(Operator::Divide.apply(-7, 2), Some(-3));
        assert_eq!(Operator::Divide.apply(7, -2), Some(-3));
    }

    #[test]
    fn test_divide_by_zero_is_none() {
        assert_eq!(Operator::Divide.apply(5, 0), None);
        assert_eq!(Operator::Divide.apply(0, 0), None);
        assert_eq!(Operator::Divide.apply(i32::MIN, 0), None);
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(Operator::Add.apply(i32::MAX, 1), Some(i32::MIN));
        assert_eq!(Operator::Subtract.apply(i32::MIN, 1), Some(i32::MAX));
        assert_eq!(Operator::Multiply.apply(i32::MAX, 2), Some(-2));
        assert_eq!(Operator::Divide.apply(i32::MIN, -1), Some(i32::MIN));
    }

    proptest! {
        #[test]
        fn apply_matches_wide_arithmetic(lhs in any::<i32>(), rhs in any::<i32>()) {
            #[allow(clippy::cast_possible_truncation)]
            let wide = |value: i64| value as i32;
            let (l, r) = (i64::from(lhs), i64::from(rhs));
            prop_assert_eq!(Operator::Add.apply(lhs, rhs), Some(wide(l + r)));
            prop_assert_eq!(Operator::Subtract.apply(lhs, rhs), Some(wide(l - r)));
            prop_assert_eq!(Operator::Multiply.apply(lhs, rhs), Some(wide(l * r)));
            if rhs == 0 {
                prop_assert_eq!(Operator::Divide.apply(lhs, rhs), None);
            } else {
                prop_assert_eq!(Operator::Divide.apply(lhs, rhs), Some(wide(l / r)));
            }
        }
    }
}
