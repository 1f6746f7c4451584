use calculator_core::{Evaluation, Input};

use crate::{
    action::{Action, ActionRequestQueue},
    state::AppState,
};

/// Applies every queued action in request order.
///
/// Returns `true` if at least one action was handled.
pub(crate) fn handle_all(app_state: &mut AppState, action_queue: &mut ActionRequestQueue) -> bool {
    let actions = action_queue.take_all();
    let handled = !actions.is_empty();
    for action in actions {
        handle(app_state, action);
    }
    handled
}

pub(crate) fn handle(app_state: &mut AppState, action: Action) {
    log::debug!("handling action: {action:?}");
    match action {
        Action::Press(input) => press(app_state, input),
    }
}

fn press(app_state: &mut AppState, input: Input) {
    let calculator = &mut app_state.calculator;
    match input {
        Input::Equals => match calculator.calculate() {
            Evaluation::Applied(op) => {
                log::debug!("applied {op}, result = {}", calculator.result());
            }
            Evaluation::NoOperation => {
                log::debug!("no pending operation, result = {}", calculator.result());
            }
            Evaluation::DivisionByZero => {
                // The user sees the unchanged result; nothing else to report.
                log::debug!(
                    "division by zero ignored, result stays {}",
                    calculator.result()
                );
            }
        },
        Input::Digit(_) | Input::Operator(_) | Input::Clear => calculator.press(input),
    }
}
