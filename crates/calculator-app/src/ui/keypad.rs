use eframe::egui::{Button, Grid, RichText, Ui, Vec2};

use calculator_core::{Digit, Input, Operator};

use crate::action::{Action, ActionRequestQueue};

pub(crate) const ROWS: usize = 4;
pub(crate) const COLUMNS: usize = 4;

pub(crate) const LAYOUT: [[Input; COLUMNS]; ROWS] = {
    #[allow(clippy::enum_glob_use)]
    use Digit::*;
    const fn d(digit: Digit) -> Input {
        Input::Digit(digit)
    }
    const fn o(op: Operator) -> Input {
        Input::Operator(op)
    }
    [
        [d(D7), d(D8), d(D9), o(Operator::Divide)],
        [d(D4), d(D5), d(D6), o(Operator::Multiply)],
        [d(D1), d(D2), d(D3), o(Operator::Subtract)],
        [d(D0), o(Operator::Add), Input::Equals, Input::Clear],
    ]
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeypadViewModel {
    pub(crate) pending_operator: Option<Operator>,
}

impl KeypadViewModel {
    #[must_use]
    pub(crate) fn new(pending_operator: Option<Operator>) -> Self {
        Self { pending_operator }
    }

    #[must_use]
    pub(crate) fn is_selected(&self, input: Input) -> bool {
        match input {
            Input::Operator(op) => self.pending_operator == Some(op),
            Input::Digit(_) | Input::Equals | Input::Clear => false,
        }
    }
}

fn hover_text(input: Input) -> &'static str {
    match input {
        Input::Digit(_) => "Append digit",
        Input::Operator(_) => "Select operation",
        Input::Equals => "Calculate",
        Input::Clear => "Clear",
    }
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn show(ui: &mut Ui, vm: &KeypadViewModel, action_queue: &mut ActionRequestQueue) {
    let padding = 5.0;
    let avail = ui.available_size();
    let columns = COLUMNS as f32;
    let rows = ROWS as f32;
    let button_size = Vec2::new(
        (avail.x - (columns - 1.0) * padding) / columns,
        (avail.y - (rows - 1.0) * padding) / rows,
    )
    .max(Vec2::ZERO);
    let text_size = button_size.min_elem() * 0.5;

    Grid::new(ui.id().with("keypad_grid"))
        .spacing((padding, padding))
        .show(ui, |ui| {
            for row in &LAYOUT {
                for &input in row {
                    let text = RichText::new(input.label()).size(text_size);
                    let button = Button::new(text)
                        .min_size(button_size)
                        .selected(vm.is_selected(input));
                    if ui.add(button).on_hover_text(hover_text(input)).clicked() {
                        action_queue.request(Action::Press(input));
                    }
                }
                ui.end_row();
            }
        });
}
