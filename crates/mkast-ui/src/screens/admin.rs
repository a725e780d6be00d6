//! Catalog management list

use super::{
    ACCENT_GREEN, ADMIN_BACKGROUND, DANGER, ScreenContext, WHITE, centered_label, label,
    push_button, push_centered_line, push_dialog,
};
use crate::action::Action;
use crate::form::EditTarget;
use crate::pagination::Pagination;
use crate::text::{fit_head, shorten_path};
use crate::view::{Rect, TextSize, View, WidgetKind};
use mkast_config::Rgb;
use mkast_library::GameRecord;

/// Rows per page
pub const PAGE_SIZE: usize = 8;

const ROW_FILL: Rgb = Rgb::new(40, 40, 70);
const ROW_OUTLINE: Rgb = Rgb::new(0, 180, 0);
const PATH_GRAY: Rgb = Rgb::new(200, 200, 200);

/// Title bar shared with the edit form
pub(crate) fn push_header(view: &mut View, ctx: &ScreenContext) {
    push_centered_line(
        view,
        ctx,
        ctx.sy(30.0),
        "< ADMIN PANEL >",
        ACCENT_GREEN,
        TextSize::Title,
    );
}

fn add_button_rect(ctx: &ScreenContext, y: f32) -> Rect {
    let w = ctx.sx(250.0);
    Rect::new((ctx.width / 2.0 - w / 2.0).floor(), y, w, ctx.sy(60.0))
}

/// Geometry of one list row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowLayout {
    pub row: Rect,
    pub edit: Rect,
    pub delete: Rect,
}

pub fn row_layout(ctx: &ScreenContext, slot: usize) -> RowLayout {
    let margin_x = ctx.sx(50.0);
    let top = ctx.sy(120.0);
    let row_h = ctx.sy(80.0);
    let spacing = ctx.sy(10.0);
    let width = ctx.width - 2.0 * margin_x;

    let y = top + slot as f32 * (row_h + spacing);
    let row = Rect::new(margin_x, y, width, row_h);

    let actions_x = margin_x + (width * 0.7).floor();
    let button_w = ctx.sx(120.0);
    let button_h = ctx.sy(40.0);
    let button_y = y + ((row_h - button_h) / 2.0).floor();
    let edit = Rect::new(actions_x, button_y, button_w, button_h);
    let delete = Rect::new(
        actions_x + button_w + ctx.sx(20.0),
        button_y,
        button_w,
        button_h,
    );

    RowLayout { row, edit, delete }
}

pub fn build(
    ctx: &ScreenContext,
    games: &[GameRecord],
    pages: &Pagination,
    pending_delete: Option<usize>,
) -> View {
    let mut view = View::new(ADMIN_BACKGROUND);
    push_header(&mut view, ctx);

    if games.is_empty() {
        push_centered_line(
            &mut view,
            ctx,
            ctx.height / 2.0,
            "No games available.",
            WHITE,
            TextSize::Normal,
        );
        push_button(
            &mut view,
            add_button_rect(ctx, ctx.height / 2.0 + ctx.sy(80.0)),
            "Add New Game",
            Action::StartEdit(EditTarget::New),
        );
    } else {
        push_list(&mut view, ctx, games, pages);
    }

    push_button(
        &mut view,
        Rect::new(
            ctx.sx(50.0),
            ctx.height - ctx.sy(80.0),
            ctx.sx(150.0),
            ctx.sy(50.0),
        ),
        "Back",
        Action::ExitAdmin,
    );

    if let Some(index) = pending_delete {
        if let Some(game) = games.get(index) {
            push_confirm_delete(&mut view, ctx, index, game);
        }
    }

    view
}

fn push_list(view: &mut View, ctx: &ScreenContext, games: &[GameRecord], pages: &Pagination) {
    let margin_x = ctx.sx(50.0);
    let width = ctx.width - 2.0 * margin_x;
    let name_x = margin_x + ctx.sx(20.0);
    let path_x = margin_x + (width * 0.3).floor();
    let actions_x = margin_x + (width * 0.7).floor();
    let header_y = ctx.sy(80.0);
    let header_h = ctx.line_height(TextSize::Normal);

    for (x, text) in [(name_x, "Game Name"), (path_x, "File Path"), (actions_x, "Actions")] {
        view.push(
            Rect::new(x, header_y, 0.0, header_h),
            label(text, ACCENT_GREEN, TextSize::Normal),
        );
    }

    for (slot, index) in pages.range(games.len()).enumerate() {
        let game = &games[index];
        let layout = row_layout(ctx, slot);
        let text_y = layout.row.y + ctx.sy(15.0);

        view.push(
            layout.row,
            WidgetKind::Panel {
                fill: ROW_FILL,
                alpha: 255,
                outline: Some((ROW_OUTLINE, 1.0)),
            },
        );
        view.push(
            Rect::new(
                name_x,
                text_y,
                path_x - name_x,
                ctx.line_height(TextSize::Normal),
            ),
            label(fit_head(&game.name, 24), WHITE, TextSize::Normal),
        );
        view.push(
            Rect::new(
                path_x,
                text_y,
                actions_x - path_x,
                ctx.line_height(TextSize::Small),
            ),
            label(
                shorten_path(&game.executable_path),
                PATH_GRAY,
                TextSize::Small,
            ),
        );
        push_button(
            view,
            layout.edit,
            "Edit",
            Action::StartEdit(EditTarget::Existing(index)),
        );
        view.push_action(
            layout.delete,
            WidgetKind::Button {
                label: "Delete".to_string(),
                hover: Some(DANGER),
            },
            Action::RequestDelete(index),
        );
    }

    if games.len() > pages.page_size() {
        let button_w = ctx.sx(150.0);
        let button_h = ctx.sy(50.0);
        let y = ctx.height - ctx.sy(150.0);
        let gap = ctx.sx(20.0);

        if pages.has_prev() {
            push_button(
                view,
                Rect::new(ctx.width / 2.0 - button_w - gap, y, button_w, button_h),
                "< Previous",
                Action::ChangePage(-1),
            );
        }
        if pages.has_next(games.len()) {
            push_button(
                view,
                Rect::new(ctx.width / 2.0 + gap, y, button_w, button_h),
                "Next >",
                Action::ChangePage(1),
            );
        }
    }

    push_button(
        view,
        add_button_rect(ctx, ctx.height - ctx.sy(80.0)),
        "Add New Game",
        Action::StartEdit(EditTarget::New),
    );
}

fn push_confirm_delete(view: &mut View, ctx: &ScreenContext, index: usize, game: &GameRecord) {
    let dialog = push_dialog(view, ctx, ctx.sx(500.0), ctx.sy(220.0));

    let line_h = ctx.line_height(TextSize::Normal);
    view.push(
        Rect::new(dialog.x, dialog.y + ctx.sy(30.0), dialog.w, line_h),
        centered_label("DELETE GAME?", ACCENT_GREEN, TextSize::Normal),
    );
    view.push(
        Rect::new(dialog.x, dialog.y + ctx.sy(80.0), dialog.w, line_h),
        centered_label(fit_head(&game.name, 28), WHITE, TextSize::Normal),
    );

    let button_w = ctx.sx(120.0);
    let button_h = ctx.sy(40.0);
    let button_y = dialog.y + dialog.h - ctx.sy(60.0);
    push_button(
        view,
        Rect::new(dialog.x + ctx.sx(40.0), button_y, button_w, button_h),
        "Cancel",
        Action::CancelDialog,
    );
    view.push_action(
        Rect::new(
            dialog.x + dialog.w - button_w - ctx.sx(40.0),
            button_y,
            button_w,
            button_h,
        ),
        WidgetKind::Button {
            label: "Delete".to_string(),
            hover: Some(DANGER),
        },
        Action::DeleteGame(index),
    );
}
