use eframe::egui::{Event, InputState, Key, Modifiers};

use calculator_core::Input;

use crate::action::{Action, ActionRequestQueue};

struct Shortcut {
    key: Key,
    input: Input,
}

impl Shortcut {
    const fn new(key: Key, input: Input) -> Self {
        Self { key, input }
    }
}

// Keys that produce no text event. Digits, operators, `=` and `c` arrive as text.
const SHORTCUTS: [Shortcut; 3] = [
    Shortcut::new(Key::Enter, Input::Equals),
    Shortcut::new(Key::Escape, Input::Clear),
    Shortcut::new(Key::Delete, Input::Clear),
];

fn shortcut_input(key: Key, modifiers: Modifiers) -> Option<Input> {
    if modifiers.command || modifiers.alt {
        return None;
    }
    SHORTCUTS
        .iter()
        .find(|shortcut| shortcut.key == key)
        .map(|shortcut| shortcut.input)
}

fn request_event(event: &Event, action_queue: &mut ActionRequestQueue) {
    match event {
        Event::Text(text) => {
            for ch in text.chars() {
                match Input::from_char(ch) {
                    Ok(input) => action_queue.request(Action::Press(input)),
                    Err(e) => log::trace!("ignoring typed text: {e}"),
                }
            }
        }
        Event::Key {
            key,
            pressed: true,
            modifiers,
            ..
        } => {
            if let Some(input) = shortcut_input(*key, *modifiers) {
                action_queue.request(Action::Press(input));
            }
        }
        _ => {}
    }
}

/// Translates this frame's keyboard events into press actions, in the order they were typed.
///
/// Shortcut keys are consumed so a focused keypad button does not also treat
/// Enter as a click.
pub(crate) fn handle_input(i: &mut InputState, action_queue: &mut ActionRequestQueue) {
    for event in &i.events {
        request_event(event, action_queue);
    }
    for shortcut in &SHORTCUTS {
        i.consume_key(Modifiers::NONE, shortcut.key);
    }
}

#[cfg(test)]
mod tests {
    use calculator_core::{Digit, Operator};
    use eframe::egui::{CentralPanel, Context, Pos2, RawInput, Rect, Vec2};

    use super::*;
    use crate::ui::keypad::{self, KeypadViewModel};

    fn requested(events: &[Event]) -> Vec<Action> {
        let mut action_queue = ActionRequestQueue::default();
        for event in events {
            request_event(event, &mut action_queue);
        }
        action_queue.take_all()
    }

    #[test]
    fn text_events_map_to_presses_in_order() {
        let actions = requested(&[Event::Text("12".into()), Event::Text("+=".into())]);
        assert_eq!(
            actions,
            [
                Action::Press(Input::Digit(Digit::D1)),
                Action::Press(Input::Digit(Digit::D2)),
                Action::Press(Input::Operator(Operator::Add)),
                Action::Press(Input::Equals),
            ]
        );
    }

    #[test]
    fn unrecognized_text_is_ignored() {
        let actions = requested(&[Event::Text("a 7.".into())]);
        assert_eq!(actions, [Action::Press(Input::Digit(Digit::D7))]);
    }

    #[test]
    fn shortcuts_map_special_keys() {
        assert_eq!(
            shortcut_input(Key::Enter, Modifiers::NONE),
            Some(Input::Equals)
        );
        assert_eq!(
            shortcut_input(Key::Escape, Modifiers::NONE),
            Some(Input::Clear)
        );
        assert_eq!(
            shortcut_input(Key::Delete, Modifiers::NONE),
            Some(Input::Clear)
        );
        assert_eq!(shortcut_input(Key::Backspace, Modifiers::NONE), None);
    }

    #[test]
    fn shortcuts_ignore_command_chords() {
        assert_eq!(shortcut_input(Key::Enter, Modifiers::COMMAND), None);
        assert_eq!(shortcut_input(Key::Escape, Modifiers::ALT), None);
    }

    fn key_press(key: Key) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    // Runs one frame of keyboard handling followed by the keypad, like `CalculatorApp::update`.
    fn run_frame(ctx: &Context, events: Vec<Event>) -> Vec<Action> {
        let raw_input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(300.0, 380.0))),
            events,
            ..Default::default()
        };
        let mut action_queue = ActionRequestQueue::default();
        let _output = ctx.run(raw_input, |ctx| {
            ctx.input_mut(|i| handle_input(i, &mut action_queue));
            CentralPanel::default().show(ctx, |ui| {
                keypad::show(ui, &KeypadViewModel::new(None), &mut action_queue);
            });
        });
        action_queue.take_all()
    }

    #[test]
    fn enter_on_focused_button_only_calculates() {
        let ctx = Context::default();
        assert!(run_frame(&ctx, vec![]).is_empty());
        // Tab moves keyboard focus onto the first keypad button ("7").
        assert!(run_frame(&ctx, vec![key_press(Key::Tab)]).is_empty());
        assert!(run_frame(&ctx, vec![]).is_empty());

        let actions = run_frame(&ctx, vec![key_press(Key::Enter)]);
        assert_eq!(actions, [Action::Press(Input::Equals)]);
    }

    #[test]
    fn handle_input_keeps_text_order_around_shortcuts() {
        let ctx = Context::default();
        let actions = run_frame(
            &ctx,
            vec![
                Event::Text("5+3".into()),
                key_press(Key::Enter),
                key_press(Key::Escape),
            ],
        );
        assert_eq!(
            actions,
            [
                Action::Press(Input::Digit(Digit::D5)),
                Action::Press(Input::Operator(Operator::Add)),
                Action::Press(Input::Digit(Digit::D3)),
                Action::Press(Input::Equals),
                Action::Press(Input::Clear),
            ]
        );
    }
}
