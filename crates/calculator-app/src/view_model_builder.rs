use crate::{
    state::AppState,
    ui::{
        calculator_screen::CalculatorScreenViewModel, display::DisplayViewModel,
        keypad::KeypadViewModel,
    },
};

#[must_use]
pub(crate) fn build_display_vm<'a>(
    app_state: &AppState,
    build_version: &'a str,
) -> DisplayViewModel<'a> {
    DisplayViewModel::new(app_state.calculator.display().to_string(), build_version)
}

#[must_use]
pub(crate) fn build_keypad_vm(app_state: &AppState) -> KeypadViewModel {
    KeypadViewModel::new(app_state.calculator.pending_operation())
}

#[must_use]
pub(crate) fn build_calculator_screen_vm<'a>(
    app_state: &AppState,
    build_version: &'a str,
) -> CalculatorScreenViewModel<'a> {
    CalculatorScreenViewModel::new(
        build_display_vm(app_state, build_version),
        build_keypad_vm(app_state),
    )
}
