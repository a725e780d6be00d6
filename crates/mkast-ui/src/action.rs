//! Commands produced by clicks and executed by the controller

use crate::form::{EditTarget, FormField};
use crate::password::PasswordPurpose;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenPassword(PasswordPurpose),
    SubmitPassword,
    CancelPassword,
    LaunchGame(String),
    ChangePage(i32),
    ExitAdmin,
    StartEdit(EditTarget),
    /// Ask for confirmation before deleting
    RequestDelete(usize),
    DeleteGame(usize),
    CancelDialog,
    FocusField(FormField),
    BrowseFile(FormField),
    SaveEdit,
    CancelEdit,
}
