//! Calculator inputs: the closed set of things a key press can mean.

use crate::{Digit, Operator};

/// A single button or key press.
///
/// # Examples
///
/// ```
/// use calculator_core::{Digit, Input, Operator};
///
/// assert_eq!(Input::from_char('7'), Ok(Input::Digit(Digit::D7)));
/// assert_eq!(Input::from_char('*'), Ok(Input::Operator(Operator::Multiply)));
/// assert_eq!(Input::Clear.label(), "C");
/// assert!(Input::from_char('?').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// Append a digit to the operand being typed.
    Digit(Digit),
    /// Select the pending operation.
    Operator(Operator),
    /// Apply the pending operation.
    Equals,
    /// Reset everything.
    Clear,
}

/// Errors that can occur when recognizing an input from a typed character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// The character does not correspond to any calculator key.
    #[display("unrecognized calculator key: {key:?}")]
    UnrecognizedKey {
        /// The character that was typed.
        key: char,
    },
}

impl Input {
    /// Returns the caption for this input's button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Digit(digit) => digit.as_str(),
            Self::Operator(op) => op.as_str(),
            Self::Equals => "=",
            Self::Clear => "C",
        }
    }

    /// Recognizes the input for a typed character.
    ///
    /// Accepts `0`-`9`, `+`, `-`, `*`, `/`, `=` and `c`/`C`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnrecognizedKey`] for any other character.
    pub fn from_char(key: char) -> Result<Self, InputError> {
        if let Some(digit) = Digit::from_char(key) {
            return Ok(Self::Digit(digit));
        }
        if let Some(op) = Operator::from_symbol(key) {
            return Ok(Self::Operator(op));
        }
        match key {
            '=' => Ok(Self::Equals),
            'c' | 'C' => Ok(Self::Clear),
            _ => Err(InputError::UnrecognizedKey { key }),
        }
    }
}

impl TryFrom<char> for Input {
    type Error = InputError;

    fn try_from(key: char) -> Result<Self, Self::Error> {
        Self::from_char(key)
    }
}

impl From<Digit> for Input {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Input {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}
