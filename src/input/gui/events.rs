use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::controllers::interactive::types::{ClickButton, InputCommand};
use crate::core::data::point::Point;

/// What a key press asks for: either a controller command or a change
/// to the window's own overlay.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Command(InputCommand),
    ToggleHud,
}

#[must_use]
pub fn action_for_key(key: KeyCode) -> Option<KeyAction> {
    match key {
        KeyCode::Space => Some(KeyAction::Command(InputCommand::Reset)),
        KeyCode::Escape => Some(KeyAction::Command(InputCommand::Exit)),
        KeyCode::KeyJ => Some(KeyAction::Command(InputCommand::ToggleFractal)),
        KeyCode::KeyC => Some(KeyAction::Command(InputCommand::CycleColourMap)),
        KeyCode::KeyH => Some(KeyAction::ToggleHud),
        _ => None,
    }
}

#[must_use]
pub fn command_for_mouse_button(button: MouseButton, pixel: Point) -> InputCommand {
    let button = match button {
        MouseButton::Left => ClickButton::Left,
        MouseButton::Right => ClickButton::Right,
        _ => ClickButton::Other,
    };

    InputCommand::Click { pixel, button }
}
