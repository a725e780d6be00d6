//! Draws views with macroquad
//!
//! Layout coordinates are scaled to the actual window size so a fullscreen
//! window with a different mode still maps clicks and pixels one to one.

use crate::input;
use macroquad::prelude::*;
use mkast_config::Rgb;
use mkast_media::{ImageCache, RgbaImage};
use mkast_ui::{Align, ArrowDirection, ScreenContext, TextSize, View, WidgetKind};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

const FIELD_FILL: Rgb = Rgb::new(30, 30, 60);
const FIELD_BORDER: Rgb = Rgb::new(120, 120, 160);
const FIELD_ACTIVE_BORDER: Rgb = Rgb::new(255, 255, 255);
const FIELD_PADDING: f32 = 10.0;

pub struct Renderer {
    font: Option<Font>,
    images: ImageCache,
    textures: Uploads<Texture2D>,
}

/// Per-bitmap uploads, keyed by bitmap address.
///
/// Each entry holds its bitmap, so the address cannot be reused by a later
/// allocation while the upload is cached.
struct Uploads<T> {
    entries: HashMap<usize, (Arc<RgbaImage>, T)>,
}

impl<T> Uploads<T> {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    fn get_or_upload(
        &mut self,
        bitmap: &Arc<RgbaImage>,
        upload: impl FnOnce(&RgbaImage) -> T,
    ) -> &T {
        let key = Arc::as_ptr(bitmap) as usize;
        let (_, value) = self
            .entries
            .entry(key)
            .or_insert_with(|| (Arc::clone(bitmap), upload(bitmap)));
        value
    }
}

fn color(rgb: Rgb, alpha: u8) -> Color {
    Color::from_rgba(rgb.r(), rgb.g(), rgb.b(), alpha)
}

fn scaled(rect: mkast_ui::Rect, scale: (f32, f32)) -> mkast_ui::Rect {
    mkast_ui::Rect::new(
        rect.x * scale.0,
        rect.y * scale.1,
        rect.w * scale.0,
        rect.h * scale.1,
    )
}

impl Renderer {
    pub fn new(font: Option<Font>) -> Self {
        Self {
            font,
            images: ImageCache::new(),
            textures: Uploads::new(),
        }
    }

    /// Window pixels per layout pixel
    pub fn scale(&self, ctx: &ScreenContext) -> (f32, f32) {
        (screen_width() / ctx.width, screen_height() / ctx.height)
    }

    pub fn draw(&mut self, ctx: &ScreenContext, view: &View) {
        clear_background(color(view.background, 255));

        let scale = self.scale(ctx);
        let text_scale = scale.0.min(scale.1);
        let (px, py) = input::pointer(scale);
        let first_interactive = view.widgets.len() - view.interactive().len();
        let now = Instant::now();
        let theme = &ctx.theme;

        for (i, widget) in view.widgets.iter().enumerate() {
            let hovered = i >= first_interactive
                && widget.action.is_some()
                && widget.rect.contains(px, py);
            let r = scaled(widget.rect, scale);

            match &widget.kind {
                WidgetKind::Panel {
                    fill,
                    alpha,
                    outline,
                } => {
                    draw_rectangle(r.x, r.y, r.w, r.h, color(*fill, *alpha));
                    if let Some((line, thickness)) = outline {
                        let line = if hovered {
                            theme.button_hover_color
                        } else {
                            *line
                        };
                        draw_rectangle_lines(
                            r.x,
                            r.y,
                            r.w,
                            r.h,
                            thickness * text_scale,
                            color(line, 255),
                        );
                    }
                }
                WidgetKind::Label {
                    text,
                    color: fg,
                    size,
                    align,
                    shadow,
                } => {
                    let font_size = self.font_size(ctx, *size, text_scale);
                    let dims = measure_text(text, self.font.as_ref(), font_size, 1.0);
                    let x = match align {
                        Align::Left => r.x,
                        Align::Center => r.x + (r.w - dims.width) / 2.0,
                    };
                    let y = r.y + dims.offset_y;
                    if let Some(shadow) = shadow {
                        let offset = (2.0 * text_scale).max(1.0);
                        self.text(text, x + offset, y + offset, font_size, color(*shadow, 255));
                    }
                    self.text(text, x, y, font_size, color(*fg, 255));
                }
                WidgetKind::Button { label, hover } => {
                    let fill = if hovered {
                        hover.unwrap_or(theme.button_hover_color)
                    } else {
                        theme.button_color
                    };
                    draw_rectangle(r.x, r.y, r.w, r.h, color(fill, 255));
                    self.centered_text(label, r, ctx, text_scale, color(theme.text_color, 255));
                }
                WidgetKind::TextField { text, active } => {
                    let (border, thickness) = if *active {
                        (FIELD_ACTIVE_BORDER, 2.0)
                    } else {
                        (FIELD_BORDER, 1.0)
                    };
                    draw_rectangle(r.x, r.y, r.w, r.h, color(FIELD_FILL, 255));
                    draw_rectangle_lines(r.x, r.y, r.w, r.h, thickness, color(border, 255));

                    let font_size = self.font_size(ctx, TextSize::Normal, text_scale);
                    let dims = measure_text(text, self.font.as_ref(), font_size, 1.0);
                    let x = r.x + FIELD_PADDING * text_scale;
                    let y = r.y + (r.h - dims.height) / 2.0 + dims.offset_y;
                    self.text(text, x, y, font_size, color(theme.text_color, 255));

                    if *active {
                        let caret_x = x + dims.width + 2.0;
                        let caret_h = f32::from(font_size);
                        let caret_y = r.y + (r.h - caret_h) / 2.0;
                        draw_line(
                            caret_x,
                            caret_y,
                            caret_x,
                            caret_y + caret_h,
                            1.0,
                            color(theme.text_color, 255),
                        );
                    }
                }
                WidgetKind::Image { path } => {
                    let size = (r.w.max(1.0) as u32, r.h.max(1.0) as u32);
                    let bitmap = self.images.get(path, size, now);
                    let texture = self.texture(&bitmap);
                    draw_texture_ex(
                        &texture,
                        r.x,
                        r.y,
                        WHITE,
                        DrawTextureParams {
                            dest_size: Some(vec2(r.w, r.h)),
                            ..Default::default()
                        },
                    );
                }
                WidgetKind::Arrow { direction } => {
                    let fill = if hovered {
                        theme.button_hover_color
                    } else {
                        theme.button_color
                    };
                    let (tip, base) = match direction {
                        ArrowDirection::Left => (r.x, r.x + r.w),
                        ArrowDirection::Right => (r.x + r.w, r.x),
                    };
                    draw_triangle(
                        vec2(tip, r.y + r.h / 2.0),
                        vec2(base, r.y),
                        vec2(base, r.y + r.h),
                        color(fill, 255),
                    );
                }
            }
        }
    }

    fn font_size(&self, ctx: &ScreenContext, size: TextSize, text_scale: f32) -> u16 {
        (ctx.line_height(size) * text_scale).max(1.0) as u16
    }

    fn text(&self, text: &str, x: f32, y: f32, font_size: u16, color: Color) {
        draw_text_ex(
            text,
            x,
            y,
            TextParams {
                font: self.font.as_ref(),
                font_size,
                color,
                ..Default::default()
            },
        );
    }

    fn centered_text(
        &self,
        text: &str,
        r: mkast_ui::Rect,
        ctx: &ScreenContext,
        text_scale: f32,
        color: Color,
    ) {
        let font_size = self.font_size(ctx, TextSize::Normal, text_scale);
        let dims = measure_text(text, self.font.as_ref(), font_size, 1.0);
        let x = r.x + (r.w - dims.width) / 2.0;
        let y = r.y + (r.h - dims.height) / 2.0 + dims.offset_y;
        self.text(text, x, y, font_size, color);
    }

    /// Upload a bitmap once; later frames reuse the texture
    fn texture(&mut self, bitmap: &Arc<RgbaImage>) -> Texture2D {
        self.textures
            .get_or_upload(bitmap, |img| {
                let texture =
                    Texture2D::from_rgba8(img.width() as u16, img.height() as u16, img.as_raw());
                texture.set_filter(FilterMode::Nearest);
                texture
            })
            .clone()
    }
}
