//! The value shown on the calculator's single-line display.

use crate::Operator;

/// What the display shows after the most recent transition.
///
/// `Display` renders the exact text of the display line.
///
/// # Examples
///
/// ```
/// use calculator_core::{DisplayText, Operator};
///
/// assert_eq!(DisplayText::Empty.to_string(), "");
/// assert_eq!(DisplayText::Number(-42).to_string(), "-42");
/// assert_eq!(DisplayText::Operator(Operator::Add).to_string(), "+");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DisplayText {
    /// Nothing; the state right after start-up or clear.
    #[default]
    #[display("")]
    Empty,
    /// A number: either the operand being typed or a computed result.
    #[display("{_0}")]
    Number(i32),
    /// The symbol of a freshly selected operator.
    #[display("{_0}")]
    Operator(Operator),
}
