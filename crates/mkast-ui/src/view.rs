//! Render-ready screen descriptions
//!
//! Screens build a [`View`]: an ordered list of widgets, back to front. The
//! frontend draws it as-is and the controller uses the same data to resolve
//! clicks, so what is drawn and what is clickable never disagree.

use crate::action::Action;
use mkast_config::Rgb;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Shrink by `by` on every side
    pub fn inset(&self, by: f32) -> Self {
        Self::new(
            self.x + by,
            self.y + by,
            (self.w - 2.0 * by).max(0.0),
            (self.h - 2.0 * by).max(0.0),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Title,
    Normal,
    Small,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetKind {
    /// Filled rectangle with an optional outline
    Panel {
        fill: Rgb,
        alpha: u8,
        outline: Option<(Rgb, f32)>,
    },
    /// Text anchored at the rect's top-left (or top-center)
    Label {
        text: String,
        color: Rgb,
        size: TextSize,
        align: Align,
        shadow: Option<Rgb>,
    },
    Button {
        label: String,
        hover: Option<Rgb>,
    },
    TextField {
        text: String,
        active: bool,
    },
    /// Cover art drawn from the image cache, scaled to the rect
    Image {
        path: String,
    },
    Arrow {
        direction: ArrowDirection,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    pub rect: Rect,
    pub kind: WidgetKind,
    pub action: Option<Action>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub background: Rgb,
    pub widgets: Vec<Widget>,
    /// Widgets from this index on form a modal layer that captures all clicks
    modal_from: Option<usize>,
}

impl View {
    pub fn new(background: Rgb) -> Self {
        Self {
            background,
            widgets: Vec::new(),
            modal_from: None,
        }
    }

    pub fn push(&mut self, rect: Rect, kind: WidgetKind) {
        self.widgets.push(Widget {
            rect,
            kind,
            action: None,
        });
    }

    pub fn push_action(&mut self, rect: Rect, kind: WidgetKind, action: Action) {
        self.widgets.push(Widget {
            rect,
            kind,
            action: Some(action),
        });
    }

    /// Everything pushed after this call is modal
    pub fn begin_modal(&mut self) {
        self.modal_from = Some(self.widgets.len());
    }

    pub fn is_modal(&self) -> bool {
        self.modal_from.is_some()
    }

    /// Widgets that can currently receive clicks
    pub fn interactive(&self) -> &[Widget] {
        &self.widgets[self.modal_from.unwrap_or(0)..]
    }

    /// Resolve a click to the topmost widget's action
    pub fn hit(&self, x: f32, y: f32) -> Option<Action> {
        self.interactive()
            .iter()
            .rev()
            .filter(|w| w.rect.contains(x, y))
            .find_map(|w| w.action.clone())
    }

    /// First widget carrying `action`; handy for locating buttons
    pub fn find(&self, action: &Action) -> Option<&Widget> {
        self.widgets
            .iter()
            .find(|w| w.action.as_ref() == Some(action))
    }

    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.interactive().iter().filter_map(|w| w.action.as_ref())
    }

    /// Concatenated label, button and field texts, for diagnostics and tests
    pub fn texts(&self) -> Vec<&str> {
        self.widgets
            .iter()
            .filter_map(|w| match &w.kind {
                WidgetKind::Label { text, .. } => Some(text.as_str()),
                WidgetKind::Button { label, .. } => Some(label.as_str()),
                WidgetKind::TextField { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
