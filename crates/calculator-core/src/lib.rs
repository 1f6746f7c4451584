//! Core state machine for a four-function integer calculator.
//!
//! This crate holds everything a calculator front end needs to know about
//! arithmetic and input handling, independent of any GUI toolkit.
//!
//! # Overview
//!
//! - [`calculator`]: the [`Calculator`] state (result, pending operand, pending
//!   operation) and its four transitions.
//! - [`digit`]: type-safe decimal digits 0-9.
//! - [`operator`]: the four arithmetic operators and their wrapping semantics.
//! - [`input`]: the closed set of button/key inputs, [`Input`].
//! - [`display`]: the value shown on the single-line display.
//!
//! # Integer semantics
//!
//! All values are `i32`. Overflow wraps (two's complement) rather than
//! panicking, and division truncates toward zero. Division by zero leaves the
//! result untouched.
//!
//! # Examples
//!
//! ```
//! use calculator_core::{Calculator, Digit, Input, Operator};
//!
//! let mut calc = Calculator::new();
//! calc.press(Input::Digit(Digit::D5));
//! calc.press(Input::Operator(Operator::Add));
//! calc.press(Input::Digit(Digit::D3));
//! calc.press(Input::Equals);
//!
//! assert_eq!(calc.result(), 8);
//! assert_eq!(calc.display().to_string(), "8");
//! ```

pub mod calculator;
pub mod digit;
pub mod display;
pub mod input;
pub mod operator;

pub use self::{
    calculator::{Calculator, Evaluation},
    digit::Digit,
    display::DisplayText,
    input::{Input, InputError},
    operator::Operator,
};
