//! Launcher state machine and screens
//!
//! Everything here is independent of the windowing backend: input arrives as
//! [`InputEvent`]s and each frame produces a [`View`] describing what to draw
//! and which regions are clickable.

pub mod action;
pub mod app;
pub mod form;
pub mod input;
pub mod pagination;
pub mod password;
pub mod screens;
pub mod text;
pub mod view;

pub use action::Action;
pub use app::{App, Mode, Services};
pub use form::{EditSession, EditTarget, FormData, FormField, ValidationError};
pub use input::{InputEvent, Key};
pub use pagination::{Pagination, page_count};
pub use password::{PasswordPrompt, PasswordPurpose};
pub use screens::ScreenContext;
pub use view::{Align, ArrowDirection, Rect, TextSize, View, Widget, WidgetKind};
