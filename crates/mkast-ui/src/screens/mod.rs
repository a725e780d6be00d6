//! Screen builders
//!
//! Each screen is a pure function from launcher state to a [`View`]. Layout
//! constants are in design pixels for a 1920x1080 window and scaled through
//! [`ScreenContext`].

pub mod admin;
pub mod edit;
pub mod main_menu;
pub mod password;

use crate::action::Action;
use crate::view::{Align, Rect, TextSize, View, WidgetKind};
use mkast_config::{LauncherConfig, Rgb, ThemeConfig};

pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const ACCENT_GREEN: Rgb = Rgb::new(0, 255, 0);
pub const ADMIN_BACKGROUND: Rgb = Rgb::new(20, 20, 60);
pub const DIALOG_BACKGROUND: Rgb = Rgb::new(40, 40, 70);
pub const DANGER: Rgb = Rgb::new(255, 80, 80);
pub const OVERLAY_ALPHA: u8 = 180;

/// Window geometry and theme shared by every screen
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenContext {
    pub width: f32,
    pub height: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub scale_min: f32,
    pub theme: ThemeConfig,
}

impl ScreenContext {
    pub fn from_config(config: &LauncherConfig) -> Self {
        let (scale_x, scale_y, scale_min) = config.scale();
        Self {
            width: config.resolution[0] as f32,
            height: config.resolution[1] as f32,
            scale_x,
            scale_y,
            scale_min,
            theme: config.theme.clone(),
        }
    }

    pub fn sx(&self, v: f32) -> f32 {
        (v * self.scale_x).floor()
    }

    pub fn sy(&self, v: f32) -> f32 {
        (v * self.scale_y).floor()
    }

    pub fn sm(&self, v: f32) -> f32 {
        (v * self.scale_min).floor()
    }

    /// Nominal line height of a text size, matching the frontend's font sizes
    pub fn line_height(&self, size: TextSize) -> f32 {
        self.sm(match size {
            TextSize::Title => 64.0,
            TextSize::Normal => 32.0,
            TextSize::Small => 22.0,
        })
    }

    pub fn full_screen(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Rect of size `w`x`h` centered in the window
    pub fn centered(&self, w: f32, h: f32) -> Rect {
        Rect::new(
            ((self.width - w) / 2.0).floor(),
            ((self.height - h) / 2.0).floor(),
            w,
            h,
        )
    }
}

pub(crate) fn label(text: impl Into<String>, color: Rgb, size: TextSize) -> WidgetKind {
    WidgetKind::Label {
        text: text.into(),
        color,
        size,
        align: Align::Left,
        shadow: None,
    }
}

pub(crate) fn centered_label(text: impl Into<String>, color: Rgb, size: TextSize) -> WidgetKind {
    WidgetKind::Label {
        text: text.into(),
        color,
        size,
        align: Align::Center,
        shadow: None,
    }
}

pub(crate) fn button(text: impl Into<String>) -> WidgetKind {
    WidgetKind::Button {
        label: text.into(),
        hover: None,
    }
}

/// Text line spanning the full window width, centered
pub(crate) fn push_centered_line(
    view: &mut View,
    ctx: &ScreenContext,
    y: f32,
    text: impl Into<String>,
    color: Rgb,
    size: TextSize,
) {
    let rect = Rect::new(0.0, y, ctx.width, ctx.line_height(size));
    view.push(rect, centered_label(text, color, size));
}

/// Modal frame: dimmed backdrop plus a bordered dialog box; returns the box
pub(crate) fn push_dialog(view: &mut View, ctx: &ScreenContext, w: f32, h: f32) -> Rect {
    view.begin_modal();
    view.push(
        ctx.full_screen(),
        WidgetKind::Panel {
            fill: BLACK,
            alpha: OVERLAY_ALPHA,
            outline: None,
        },
    );

    let dialog = ctx.centered(w, h);
    view.push(
        dialog,
        WidgetKind::Panel {
            fill: DIALOG_BACKGROUND,
            alpha: 255,
            outline: Some((ACCENT_GREEN, ctx.sm(3.0).max(2.0))),
        },
    );
    dialog
}

pub(crate) fn push_button(view: &mut View, rect: Rect, text: &str, action: Action) {
    view.push_action(rect, button(text), action);
}
