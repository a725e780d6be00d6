//! Backend-neutral input events

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Backspace,
    Tab,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Left mouse button pressed at window coordinates
    Click { x: f32, y: f32 },
    Key(Key),
    /// Text input
    Char(char),
    /// The window manager asked the launcher to close
    CloseRequested,
}
