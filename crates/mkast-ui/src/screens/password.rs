//! Password dialog drawn over another screen

use super::{ACCENT_GREEN, ScreenContext, WHITE, label, push_button, push_dialog};
use crate::action::Action;
use crate::password::PasswordPrompt;
use crate::view::{Align, Rect, TextSize, View, WidgetKind};
use mkast_config::Rgb;

const INPUT_FILL: Rgb = Rgb::new(20, 20, 40);
const INPUT_OUTLINE: Rgb = Rgb::new(100, 100, 180);
const TITLE_SHADOW: Rgb = Rgb::new(0, 100, 0);
const HINT_SHADOW: Rgb = Rgb::new(100, 100, 100);

/// Place the dialog on top of `base`; only the dialog stays clickable
pub fn build(ctx: &ScreenContext, prompt: &PasswordPrompt, mut base: View) -> View {
    let dialog = push_dialog(&mut base, ctx, ctx.sx(400.0), ctx.sy(200.0));
    let purpose = prompt.purpose();

    base.push(
        Rect::new(
            dialog.x,
            dialog.y + ctx.sy(30.0),
            dialog.w,
            ctx.line_height(TextSize::Normal),
        ),
        WidgetKind::Label {
            text: purpose.title().to_string(),
            color: ACCENT_GREEN,
            size: TextSize::Normal,
            align: Align::Center,
            shadow: Some(TITLE_SHADOW),
        },
    );

    let input_w = ctx.sx(300.0);
    let input_h = ctx.sy(40.0);
    let input = Rect::new(
        ((ctx.width - input_w) / 2.0).floor(),
        dialog.y + ctx.sy(80.0),
        input_w,
        input_h,
    );
    base.push(
        input,
        WidgetKind::Panel {
            fill: INPUT_FILL,
            alpha: 255,
            outline: Some((INPUT_OUTLINE, 2.0)),
        },
    );
    base.push(
        Rect::new(
            input.x + ctx.sx(10.0),
            input.y + ctx.sy(10.0),
            input.w - ctx.sx(20.0),
            ctx.line_height(TextSize::Normal),
        ),
        label(prompt.masked(), WHITE, TextSize::Normal),
    );

    base.push(
        Rect::new(
            dialog.x,
            input.y + input_h + ctx.sy(20.0),
            dialog.w,
            ctx.line_height(TextSize::Small),
        ),
        WidgetKind::Label {
            text: purpose.hint().to_string(),
            color: WHITE,
            size: TextSize::Small,
            align: Align::Center,
            shadow: Some(HINT_SHADOW),
        },
    );

    let button_w = ctx.sx(120.0);
    let button_h = ctx.sy(40.0);
    let button_y = dialog.y + dialog.h - ctx.sy(60.0);
    push_button(
        &mut base,
        Rect::new(dialog.x + ctx.sx(40.0), button_y, button_w, button_h),
        "Cancel",
        Action::CancelPassword,
    );
    push_button(
        &mut base,
        Rect::new(
            dialog.x + dialog.w - button_w - ctx.sx(40.0),
            button_y,
            button_w,
            button_h,
        ),
        "OK",
        Action::SubmitPassword,
    );

    base
}
