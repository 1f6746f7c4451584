use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use super::{display, keypad};
use crate::{
    action::ActionRequestQueue,
    ui::{display::DisplayViewModel, keypad::KeypadViewModel},
};

#[derive(Debug, Clone)]
pub(crate) struct CalculatorScreenViewModel<'a> {
    pub(crate) display_vm: DisplayViewModel<'a>,
    pub(crate) keypad_vm: KeypadViewModel,
}

impl<'a> CalculatorScreenViewModel<'a> {
    #[must_use]
    pub(crate) fn new(display_vm: DisplayViewModel<'a>, keypad_vm: KeypadViewModel) -> Self {
        Self {
            display_vm,
            keypad_vm,
        }
    }
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn show(
    ui: &mut Ui,
    vm: &CalculatorScreenViewModel<'_>,
    action_queue: &mut ActionRequestQueue,
) {
    // The display takes one row's worth of height above the four keypad rows.
    let display_rows = 1.0;
    let keypad_rows = keypad::ROWS as f32;
    let total_rows = display_rows + keypad_rows;
    let spacing = ui.spacing().item_spacing.y;

    StripBuilder::new(ui)
        .size(Size::relative(display_rows / total_rows))
        .size(Size::exact(spacing))
        .size(Size::remainder())
        .vertical(|mut strip| {
            strip.cell(|ui| {
                display::show(ui, &vm.display_vm);
            });
            strip.cell(|_ui| {}); // Spacer
            strip.cell(|ui| {
                keypad::show(ui, &vm.keypad_vm, action_queue);
            });
        });
}
