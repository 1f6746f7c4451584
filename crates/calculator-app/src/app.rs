//! Calculator desktop application UI.
//!
//! # Design Notes
//! - A single-line display above a 4x4 keypad, laid out like a pocket calculator.
//! - Mouse clicks and keyboard typing both produce the same press actions.
//! - All state lives in [`calculator_core::Calculator`]; the UI only renders it.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};

use crate::{
    action::{self, ActionRequestQueue},
    state::AppState,
    ui, version, view_model_builder,
};

#[derive(Debug)]
pub struct CalculatorApp {
    app_state: AppState,
    build_version: String,
}

impl CalculatorApp {
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self {
            app_state: AppState::new(),
            build_version: version::build_version(),
        }
    }
}

impl App for CalculatorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        ctx.input_mut(|i| ui::input::handle_input(i, &mut action_queue));
        action::handler::handle_all(&mut self.app_state, &mut action_queue);

        let screen_vm =
            view_model_builder::build_calculator_screen_vm(&self.app_state, &self.build_version);

        CentralPanel::default().show(ctx, |ui| {
            ui::calculator_screen::show(ui, &screen_vm, &mut action_queue);
        });

        // Clicks are handled after painting; show their effect on the next frame.
        if action::handler::handle_all(&mut self.app_state, &mut action_queue) {
            ctx.request_repaint();
        }
    }
}
