//! Per-frame input polling

use macroquad::prelude::*;
use mkast_ui::{InputEvent, Key};

const KEYS: [(KeyCode, Key); 7] = [
    (KeyCode::Escape, Key::Escape),
    (KeyCode::Enter, Key::Enter),
    (KeyCode::KpEnter, Key::Enter),
    (KeyCode::Backspace, Key::Backspace),
    (KeyCode::Tab, Key::Tab),
    (KeyCode::Left, Key::Left),
    (KeyCode::Right, Key::Right),
];

/// Gather this frame's events in layout coordinates.
///
/// `scale` is window pixels per layout pixel on each axis.
pub fn collect(scale: (f32, f32)) -> Vec<InputEvent> {
    let mut events = Vec::new();

    if is_quit_requested() {
        events.push(InputEvent::CloseRequested);
    }

    for (code, key) in KEYS {
        if is_key_pressed(code) {
            events.push(InputEvent::Key(key));
        }
    }

    while let Some(c) = get_char_pressed() {
        if !c.is_control() {
            events.push(InputEvent::Char(c));
        }
    }

    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        events.push(InputEvent::Click {
            x: x / scale.0,
            y: y / scale.1,
        });
    }

    events
}

/// Mouse position in layout coordinates
pub fn pointer(scale: (f32, f32)) -> (f32, f32) {
    let (x, y) = mouse_position();
    (x / scale.0, y / scale.1)
}
