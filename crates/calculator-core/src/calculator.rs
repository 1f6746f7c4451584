//! The calculator state machine.

use crate::{Digit, DisplayText, Input, Operator};

/// A calculator session.
///
/// Tracks the accumulated result, the operand currently being typed, and the
/// operation waiting to be applied. Every transition is total: there are no
/// error returns, and division by zero simply leaves the result as it was.
///
/// # Example
///
/// ```
/// use calculator_core::{Calculator, Digit, Operator};
///
/// let mut calc = Calculator::new();
/// calc.append_digit(Digit::D4);
/// calc.set_operation(Operator::Add);
/// calc.append_digit(Digit::D2);
/// calc.calculate();
/// assert_eq!(calc.result(), 6);
///
/// // Pressing equals again re-applies the operation to the new result.
/// calc.calculate();
/// assert_eq!(calc.result(), 12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    result: i32,
    pending_operand: i32,
    pending_operation: Option<Operator>,
    display: DisplayText,
}

/// What [`Calculator::calculate`] did.
///
/// This is purely informational; none of these outcomes is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// The operation was applied and the result updated.
    Applied(Operator),
    /// No operation was pending, so the result was left unchanged.
    NoOperation,
    /// The pending operation was a division by zero, so the result was left unchanged.
    DivisionByZero,
}

impl Calculator {
    /// Creates a calculator in the cleared state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accumulated result.
    #[must_use]
    pub fn result(&self) -> i32 {
        self.result
    }

    /// Returns the operand being typed.
    #[must_use]
    pub fn pending_operand(&self) -> i32 {
        self.pending_operand
    }

    /// Returns the operation waiting to be applied, if any.
    #[must_use]
    pub fn pending_operation(&self) -> Option<Operator> {
        self.pending_operation
    }

    /// Returns what the display currently shows.
    #[must_use]
    pub fn display(&self) -> DisplayText {
        self.display
    }

    /// Dispatches a single input to the matching transition.
    pub fn press(&mut self, input: Input) {
        match input {
            Input::Digit(digit) => self.append_digit(digit),
            Input::Operator(op) => self.set_operation(op),
            Input::Equals => {
                self.calculate();
            }
            Input::Clear => self.clear(),
        }
    }

    /// Appends `digit` to the right of the pending operand.
    ///
    /// The operand wraps around on overflow.
    pub fn append_digit(&mut self, digit: Digit) {
        self.pending_operand = self
            .pending_operand
            .wrapping_mul(10)
            .wrapping_add(i32::from(digit));
        self.display = DisplayText::Number(self.pending_operand);
    }

    /// Moves the pending operand into the result and selects `op`.
    ///
    /// A previously selected operation is replaced without being applied.
    pub fn set_operation(&mut self, op: Operator) {
        self.result = self.pending_operand;
        self.pending_operand = 0;
        self.pending_operation = Some(op);
        self.display = DisplayText::Operator(op);
    }

    /// Applies the pending operation to the result and the pending operand.
    ///
    /// Afterwards the pending operand holds the new result and the operation
    /// stays selected, so calling this again repeats the operation.
    pub fn calculate(&mut self) -> Evaluation {
        let evaluation = match self.pending_operation {
            Some(op) => match op.apply(self.result, self.pending_operand) {
                Some(value) => {
                    self.result = value;
                    Evaluation::Applied(op)
                }
                None => Evaluation::DivisionByZero,
            },
            None => Evaluation::NoOperation,
        };
        self.pending_operand = self.result;
        self.display = DisplayText::Number(self.result);
        evaluation
    }

    /// Resets every field to its initial value and blanks the display.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
