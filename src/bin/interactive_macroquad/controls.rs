use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};
use trajectory_lab::core::input::Field;

use crate::constants::{CALCULATE_KEY, PANEL_H, PANEL_W, PANEL_X, PANEL_Y, RESET_KEY};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) calculate: bool,
    pub(crate) reset: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            calculate: self.calculate || other.calculate,
            reset: self.reset || other.reset,
        }
    }
}

pub(crate) fn key_hint(key: KeyCode) -> &'static str {
    match key {
        KeyCode::Enter => "Enter",
        KeyCode::Escape => "Esc",
        KeyCode::Space => "Space",
        _ => "?",
    }
}

fn button_label(action: &str, key: KeyCode) -> String {
    format!("{action} ({})", key_hint(key))
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        calculate: is_key_pressed(CALCULATE_KEY),
        reset: is_key_pressed(RESET_KEY),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(PANEL_X, PANEL_Y), vec2(PANEL_W, PANEL_H))
        .label("Launch")
        .ui(&mut *root_ui(), |ui| {
            for (field, text) in Field::ALL.into_iter().zip(state.form.iter_mut()) {
                ui.input_text(hash!(field.key()), field.label(), text);
            }
            ui.separator();
            if ui.button(None, button_label("Calculate", CALCULATE_KEY).as_str()) {
                actions.calculate = true;
            }
            if ui.button(None, button_label("Reset", RESET_KEY).as_str()) {
                actions.reset = true;
            }
        });

    actions
}

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.reset {
        state.reset();
    } else if actions.calculate {
        state.calculate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trajectory_lab::core::window::AxisWindow;

    #[test]
    fn buttons_name_their_hotkeys() {
        assert_eq!(button_label("Calculate", CALCULATE_KEY), "Calculate (Enter)");
        assert_eq!(button_label("Reset", RESET_KEY), "Reset (Esc)");
    }

    #[test]
    fn reset_wins_over_calculate() {
        let mut state = AppRuntime::new();
        state.form[0] = "12".to_string();
        apply_actions(
            &mut state,
            FrameActions {
                calculate: true,
                ..FrameActions::default()
            },
        );
        assert!(state.trajectory.is_some());

        state.form[0] = "99".to_string();
        let both = FrameActions {
            calculate: true,
            reset: false,
        }
        .merge(FrameActions {
            calculate: false,
            reset: true,
        });
        apply_actions(&mut state, both);

        assert!(state.trajectory.is_none());
        assert_eq!(state.window, AxisWindow::DEFAULT);
        assert_eq!(state.form[0], Field::X0.default_value().to_string());
    }
}
