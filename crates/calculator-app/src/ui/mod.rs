pub(crate) mod calculator_screen;
pub(crate) mod display;
pub(crate) mod input;
pub(crate) mod keypad;
