//! Game grid shown to visitors

use super::{BLACK, ScreenContext, WHITE, push_button, push_centered_line};
use crate::action::Action;
use crate::pagination::Pagination;
use crate::password::PasswordPurpose;
use crate::text::fit_head;
use crate::view::{Align, ArrowDirection, Rect, TextSize, View, WidgetKind};
use mkast_config::Rgb;
use mkast_library::GameRecord;

/// Cards per page (one row of four)
pub const PAGE_SIZE: usize = 4;
const COLUMNS: usize = 4;

const TITLE_GREEN: Rgb = Rgb::new(184, 207, 8);
const TITLE_GREEN_SHADOW: Rgb = Rgb::new(100, 120, 0);
const TITLE_GRAY_SHADOW: Rgb = Rgb::new(100, 100, 100);
const FRAME_BLUE: Rgb = Rgb::new(0, 100, 210);
const DESCRIPTION_CHARS: usize = 28;

/// Card geometry for one grid slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout {
    pub card: Rect,
    pub name: Rect,
    pub frame: Rect,
    pub image: Rect,
    pub caption: Rect,
}

pub fn card_layout(ctx: &ScreenContext, slot: usize) -> CardLayout {
    let margin_x = ctx.sx(50.0);
    let margin_y = ctx.sy(200.0);
    let spacing_x = ctx.sx(40.0);
    let columns = COLUMNS as f32;

    let available = ctx.width - 2.0 * margin_x - spacing_x * (columns - 1.0);
    let card_w = (available / columns).floor();
    let card_h = ctx.sy(400.0);

    let col = (slot % COLUMNS) as f32;
    let x = margin_x + col * (card_w + spacing_x);
    let card = Rect::new(x, margin_y, card_w, card_h);

    let name = Rect::new(
        x,
        margin_y + ctx.sy(30.0),
        card_w,
        ctx.line_height(TextSize::Normal),
    );

    let frame_margin = ctx.sx(30.0);
    let frame_w = (card_w - 2.0 * frame_margin).max(1.0);
    let frame = Rect::new(x + frame_margin, name.y + ctx.sy(50.0), frame_w, frame_w);

    let pixel = (frame_w / 32.0).floor().max(2.0);
    let image = frame.inset(2.0 * pixel);

    let caption = Rect::new(
        x,
        frame.y + frame.h + ctx.sy(20.0),
        card_w,
        ctx.line_height(TextSize::Small),
    );

    CardLayout {
        card,
        name,
        frame,
        image,
        caption,
    }
}

fn push_title(
    view: &mut View,
    ctx: &ScreenContext,
    text: &str,
    x: f32,
    y: f32,
    color: Rgb,
    shadow: Rgb,
) {
    view.push(
        Rect::new(x, y, 0.0, ctx.line_height(TextSize::Title)),
        WidgetKind::Label {
            text: text.to_string(),
            color,
            size: TextSize::Title,
            align: Align::Left,
            shadow: Some(shadow),
        },
    );
}

pub fn build(ctx: &ScreenContext, games: &[GameRecord], pages: &Pagination) -> View {
    let mut view = View::new(ctx.theme.background_color);

    let left_x = ctx.sx(50.0);
    let right_x = ctx.width - ctx.sx(300.0);
    push_title(
        &mut view,
        ctx,
        "HAAGSE",
        left_x,
        ctx.sy(30.0),
        TITLE_GREEN,
        TITLE_GREEN_SHADOW,
    );
    push_title(
        &mut view,
        ctx,
        "HOGESCHOOL",
        left_x,
        ctx.sy(100.0),
        TITLE_GREEN,
        TITLE_GREEN_SHADOW,
    );
    push_title(
        &mut view,
        ctx,
        "GAME",
        right_x,
        ctx.sy(30.0),
        WHITE,
        TITLE_GRAY_SHADOW,
    );
    push_title(
        &mut view,
        ctx,
        "LAB",
        right_x,
        ctx.sy(100.0),
        WHITE,
        TITLE_GRAY_SHADOW,
    );

    if games.is_empty() {
        push_centered_line(
            &mut view,
            ctx,
            ctx.height / 2.0,
            "No games available.",
            WHITE,
            TextSize::Normal,
        );
    } else {
        for (slot, index) in pages.range(games.len()).enumerate() {
            push_card(&mut view, ctx, slot, &games[index]);
        }
        push_arrows(&mut view, ctx, pages, games.len());
    }

    let button_w = ctx.sx(100.0);
    let button_h = ctx.sy(35.0);
    let buttons_y = ctx.sy(180.0);
    push_button(
        &mut view,
        Rect::new(left_x, buttons_y, button_w, button_h),
        "Admin",
        Action::OpenPassword(PasswordPurpose::Admin),
    );
    push_button(
        &mut view,
        Rect::new(right_x, buttons_y, button_w, button_h),
        "Exit",
        Action::OpenPassword(PasswordPurpose::Exit),
    );

    view
}

fn push_card(view: &mut View, ctx: &ScreenContext, slot: usize, game: &GameRecord) {
    let layout = card_layout(ctx, slot);

    view.push(
        layout.name,
        WidgetKind::Label {
            text: game.name.clone(),
            color: WHITE,
            size: TextSize::Normal,
            align: Align::Center,
            shadow: Some(BLACK),
        },
    );

    let stroke = (layout.frame.w / 32.0).floor().max(2.0);
    view.push_action(
        layout.frame,
        WidgetKind::Panel {
            fill: FRAME_BLUE,
            alpha: 255,
            outline: Some((BLACK, stroke)),
        },
        Action::LaunchGame(game.executable_path.clone()),
    );
    view.push(
        layout.image,
        WidgetKind::Image {
            path: game.image_path.clone(),
        },
    );

    view.push(
        layout.caption,
        WidgetKind::Label {
            text: fit_head(&game.description, DESCRIPTION_CHARS),
            color: WHITE,
            size: TextSize::Small,
            align: Align::Center,
            shadow: Some(TITLE_GRAY_SHADOW),
        },
    );
}

fn push_arrows(view: &mut View, ctx: &ScreenContext, pages: &Pagination, total: usize) {
    let size = ctx.sm(60.0);
    let margin_x = ctx.sx(50.0);
    let gap = ctx.sx(10.0);
    let y = ctx.sy(200.0) + (ctx.sy(400.0) / 2.0).floor() - (size / 2.0).floor();

    if pages.has_prev() {
        let x = (margin_x - size - gap).max(0.0);
        view.push_action(
            Rect::new(x, y, size, size),
            WidgetKind::Arrow {
                direction: ArrowDirection::Left,
            },
            Action::ChangePage(-1),
        );
    }
    if pages.has_next(total) {
        let x = (ctx.width - margin_x + gap).min(ctx.width - size);
        view.push_action(
            Rect::new(x, y, size, size),
            WidgetKind::Arrow {
                direction: ArrowDirection::Right,
            },
            Action::ChangePage(1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mkast_config::LauncherConfig;

    fn games(n: usize) -> Vec<GameRecord> {
        (0..n)
            .map(|i| GameRecord::new(format!("Game {i}"), "", format!("/g/{i}"), ""))
            .collect()
    }

    fn ctx() -> ScreenContext {
        ScreenContext::from_config(&LauncherConfig::default())
    }

    fn launches(view: &View) -> Vec<String> {
        view.actions()
            .filter_map(|a| match a {
                Action::LaunchGame(path) => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_catalog_message() {
        let view = build(&ctx(), &[], &Pagination::new(PAGE_SIZE));
        assert!(view.texts().contains(&"No games available."));
        assert!(launches(&view).is_empty());
        assert!(view.find(&Action::OpenPassword(PasswordPurpose::Admin)).is_some());
        assert!(view.find(&Action::OpenPassword(PasswordPurpose::Exit)).is_some());
    }

    #[test]
    fn test_second_page_cards() {
        let games = games(6);
        let mut pages = Pagination::new(PAGE_SIZE);
        pages.change_page(1, games.len());

        let view = build(&ctx(), &games, &pages);
        assert_eq!(launches(&view), vec!["/g/4", "/g/5"]);
        assert!(view.find(&Action::ChangePage(-1)).is_some());
        assert!(view.find(&Action::ChangePage(1)).is_none());
    }

    #[test]
    fn test_click_on_cover_launches() {
        let games = games(2);
        let view = build(&ctx(), &games, &Pagination::new(PAGE_SIZE));

        let (x, y) = card_layout(&ctx(), 1).image.center();
        assert_eq!(view.hit(x, y), Some(Action::LaunchGame("/g/1".into())));
    }

    #[test]
    fn test_cards_fit_on_screen() {
        let ctx = ctx();
        let last = card_layout(&ctx, COLUMNS - 1);
        assert!(last.card.x + last.card.w <= ctx.width);
        assert!(last.frame.w > 0.0 && last.image.w > 0.0);
    }
}
