//! Add/edit form

use super::admin::push_header;
use super::{
    ACCENT_GREEN, ADMIN_BACKGROUND, ScreenContext, WHITE, label, push_button, push_centered_line,
};
use crate::action::Action;
use crate::form::{EditSession, EditTarget, FormField};
use crate::text::fit_tail;
use crate::view::{Rect, TextSize, View, WidgetKind};

/// Input box geometry for `field`
pub fn field_rect(ctx: &ScreenContext, field: FormField) -> Rect {
    let margin_x = ctx.sx(100.0);
    let label_w = ctx.sx(200.0);
    let form_w = ctx.width - 2.0 * margin_x;
    let spacing = ctx.sy(80.0);
    let top = ctx.sy(120.0) + ctx.sy(100.0);

    let slot = FormField::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or_default() as f32;

    Rect::new(
        margin_x + label_w + ctx.sx(20.0),
        top + slot * spacing,
        form_w - label_w - ctx.sx(40.0),
        ctx.sy(50.0),
    )
}

/// Characters that fit in an input box before the head is cut off
fn visible_chars(ctx: &ScreenContext, rect: &Rect) -> usize {
    let per_char = (10.0 * ctx.scale_min).max(1.0);
    (rect.w / per_char) as usize
}

pub fn build(ctx: &ScreenContext, session: &EditSession, browsing: Option<FormField>) -> View {
    let mut view = View::new(ADMIN_BACKGROUND);
    push_header(&mut view, ctx);

    let title = match session.target() {
        EditTarget::New => "Add New Game",
        EditTarget::Existing(_) => "Edit Game",
    };
    push_centered_line(
        &mut view,
        ctx,
        ctx.sy(120.0),
        title,
        ACCENT_GREEN,
        TextSize::Title,
    );

    let margin_x = ctx.sx(100.0);
    for field in FormField::ALL {
        let rect = field_rect(ctx, field);
        view.push(
            Rect::new(
                margin_x,
                rect.y + ctx.sy(10.0),
                rect.x - margin_x,
                ctx.line_height(TextSize::Normal),
            ),
            label(field.label(), WHITE, TextSize::Normal),
        );

        let action = match field.file_kind() {
            Some(_) => Action::BrowseFile(field),
            None => Action::FocusField(field),
        };
        view.push_action(
            rect,
            WidgetKind::TextField {
                text: fit_tail(session.display_value(field), visible_chars(ctx, &rect)),
                active: session.active_field() == Some(field),
            },
            action,
        );
    }

    let last = field_rect(ctx, FormField::ImagePath);
    let buttons_y = last.y + ctx.sy(80.0) + ctx.sy(20.0);
    let button_w = ctx.sx(200.0);
    let button_h = ctx.sy(60.0);
    let gap = ctx.sx(20.0);
    push_button(
        &mut view,
        Rect::new(
            ctx.width / 2.0 - button_w - gap,
            buttons_y,
            button_w,
            button_h,
        ),
        "Cancel",
        Action::CancelEdit,
    );
    push_button(
        &mut view,
        Rect::new(ctx.width / 2.0 + gap, buttons_y, button_w, button_h),
        "Save",
        Action::SaveEdit,
    );

    if browsing.is_some() {
        push_centered_line(
            &mut view,
            ctx,
            buttons_y + button_h + ctx.sy(30.0),
            "Waiting for file selection...",
            WHITE,
            TextSize::Small,
        );
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use mkast_config::LauncherConfig;
    use mkast_library::GameRecord;

    fn ctx() -> ScreenContext {
        ScreenContext::from_config(&LauncherConfig::default())
    }

    fn field_text(view: &View, field: FormField) -> (String, bool) {
        let action = match field.file_kind() {
            Some(_) => Action::BrowseFile(field),
            None => Action::FocusField(field),
        };
        match &view.find(&action).unwrap().kind {
            WidgetKind::TextField { text, active } => (text.clone(), *active),
            other => panic!("unexpected widget {:?}", other),
        }
    }

    #[test]
    fn test_titles() {
        let new = build(&ctx(), &EditSession::for_new(), None);
        assert!(new.texts().contains(&"Add New Game"));

        let record = GameRecord::new("Doom", "", "/g/doom", "");
        let existing = build(&ctx(), &EditSession::for_record(0, &record), None);
        assert!(existing.texts().contains(&"Edit Game"));
    }

    #[test]
    fn test_active_field_shows_buffer() {
        let record = GameRecord::new("Doom", "", "/g/doom", "");
        let mut session = EditSession::for_record(0, &record);
        session.activate(FormField::Name);
        session.push_char('!');

        let view = build(&ctx(), &session, None);
        assert_eq!(
            field_text(&view, FormField::Name),
            ("Doom!".to_string(), true)
        );
        assert_eq!(
            field_text(&view, FormField::ExecutablePath),
            ("/g/doom".to_string(), false)
        );
    }

    #[test]
    fn test_path_fields_browse() {
        let view = build(&ctx(), &EditSession::for_new(), None);
        let (x, y) = field_rect(&ctx(), FormField::ImagePath).center();
        assert_eq!(
            view.hit(x, y),
            Some(Action::BrowseFile(FormField::ImagePath))
        );

        let (x, y) = field_rect(&ctx(), FormField::Description).center();
        assert_eq!(
            view.hit(x, y),
            Some(Action::FocusField(FormField::Description))
        );
    }

    #[test]
    fn test_long_value_keeps_tail() {
        let long = format!("/{}/run.exe", "d".repeat(300));
        let record = GameRecord::new("Doom", "", long, "");
        let view = build(&ctx(), &EditSession::for_record(0, &record), None);

        let (text, _) = field_text(&view, FormField::ExecutablePath);
        assert!(text.starts_with("..."));
        assert!(text.ends_with("/run.exe"));
    }

    #[test]
    fn test_browsing_notice() {
        let view = build(
            &ctx(),
            &EditSession::for_new(),
            Some(FormField::ExecutablePath),
        );
        assert!(view.texts().contains(&"Waiting for file selection..."));
    }
}
