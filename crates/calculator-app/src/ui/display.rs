use eframe::egui::{Align, Frame, Layout, RichText, Ui};

#[derive(Debug, Clone)]
pub(crate) struct DisplayViewModel<'a> {
    text: String,
    build_version: &'a str,
}

impl<'a> DisplayViewModel<'a> {
    #[must_use]
    pub(crate) fn new(text: String, build_version: &'a str) -> Self {
        Self {
            text,
            build_version,
        }
    }

    #[must_use]
    pub(crate) fn text(&self) -> &str {
        &self.text
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &DisplayViewModel<'_>) {
    let height = ui.available_height();
    let text_size = height * 0.5;

    Frame::group(ui.style())
        .fill(ui.visuals().text_edit_bg_color())
        .show(ui, |ui| {
            ui.set_min_size(ui.available_size());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                // A label rather than a text edit: the display is read-only.
                ui.label(RichText::new(vm.text()).monospace().size(text_size))
                    .on_hover_text(format!("Calculator {}", vm.build_version));
            });
        });
}
