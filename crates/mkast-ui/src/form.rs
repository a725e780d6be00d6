//! Add/edit form session
//!
//! A session stages one record's fields while the admin edits them. Exactly
//! one field may be active; its keystrokes go to a scratch buffer that is
//! flushed into the form data when focus moves or the form is saved.

use mkast_library::GameRecord;
use mkast_runner::{FileKind, IconExtractor};
use std::path::Path;
use thiserror::Error;

/// Form fields, in visiting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Description,
    ExecutablePath,
    ImagePath,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Description,
        FormField::ExecutablePath,
        FormField::ImagePath,
    ];

    pub fn next(self) -> Option<FormField> {
        match self {
            FormField::Name => Some(FormField::Description),
            FormField::Description => Some(FormField::ExecutablePath),
            FormField::ExecutablePath => Some(FormField::ImagePath),
            FormField::ImagePath => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name:",
            FormField::Description => "Description:",
            FormField::ExecutablePath => "File Path:",
            FormField::ImagePath => "Image:",
        }
    }

    /// Path fields are filled through the file chooser
    pub fn file_kind(self) -> Option<FileKind> {
        match self {
            FormField::ExecutablePath => Some(FileKind::Executable),
            FormField::ImagePath => Some(FileKind::Image),
            FormField::Name | FormField::Description => None,
        }
    }
}

/// Committed form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub description: String,
    pub executable_path: String,
    pub image_path: String,
}

impl FormData {
    pub fn from_record(record: &GameRecord) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            executable_path: record.executable_path.clone(),
            image_path: record.image_path.clone(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::ExecutablePath => &self.executable_path,
            FormField::ImagePath => &self.image_path,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Description => self.description = value,
            FormField::ExecutablePath => self.executable_path = value,
            FormField::ImagePath => self.image_path = value,
        }
    }
}

/// Which catalog slot a save writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    New,
    Existing(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    MissingName,

    #[error("Executable path is required")]
    MissingExecutable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    data: FormData,
    active: Option<FormField>,
    buffer: String,
    target: EditTarget,
}

impl EditSession {
    pub fn new(target: EditTarget, data: FormData) -> Self {
        Self {
            data,
            active: None,
            buffer: String::new(),
            target,
        }
    }

    pub fn for_new() -> Self {
        Self::new(EditTarget::New, FormData::default())
    }

    pub fn for_record(index: usize, record: &GameRecord) -> Self {
        Self::new(EditTarget::Existing(index), FormData::from_record(record))
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn target(&self) -> EditTarget {
        self.target
    }

    pub fn active_field(&self) -> Option<FormField> {
        self.active
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// What a field should show: the live buffer when active, else the form value
    pub fn display_value(&self, field: FormField) -> &str {
        if self.active == Some(field) {
            &self.buffer
        } else {
            self.data.get(field)
        }
    }

    /// Focus `field`, flushing whatever was being typed elsewhere
    pub fn activate(&mut self, field: FormField) {
        self.flush();
        self.active = Some(field);
        self.buffer = self.data.get(field).to_string();
    }

    /// Copy the buffer into the active field's form value
    pub fn flush(&mut self) {
        if let Some(field) = self.active {
            self.data.set(field, self.buffer.clone());
        }
    }

    pub fn deactivate(&mut self) {
        self.flush();
        self.active = None;
    }

    pub fn push_char(&mut self, c: char) {
        if self.active.is_some() && !c.is_control() {
            self.buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.active.is_some() {
            self.buffer.pop();
        }
    }

    /// Move focus to the next field; the last field just loses focus
    pub fn advance(&mut self) {
        let Some(field) = self.active else {
            return;
        };
        match field.next() {
            Some(next) => self.activate(next),
            None => self.deactivate(),
        }
    }

    /// Write a chosen path straight into the form
    pub fn set_path(&mut self, field: FormField, path: String) {
        if self.active == Some(field) {
            self.buffer = path.clone();
        }
        self.data.set(field, path);
    }

    /// Validate and build the record to store.
    ///
    /// On failure the session is left as it was, apart from the active buffer
    /// having been flushed.
    pub fn commit(&mut self, icons: &dyn IconExtractor) -> Result<GameRecord, ValidationError> {
        self.flush();

        if self.data.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.data.executable_path.is_empty() {
            return Err(ValidationError::MissingExecutable);
        }

        if self.data.image_path.is_empty() {
            self.data.image_path = icons
                .extract(Path::new(&self.data.executable_path))
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default();
        }

        Ok(GameRecord::new(
            self.data.name.clone(),
            self.data.description.clone(),
            self.data.executable_path.clone(),
            self.data.image_path.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mkast_library::DEFAULT_DESCRIPTION;
    use std::path::PathBuf;

    struct NoIcons;

    impl IconExtractor for NoIcons {
        fn extract(&self, _executable: &Path) -> Option<PathBuf> {
            None
        }
    }

    struct FixedIcon;

    impl IconExtractor for FixedIcon {
        fn extract(&self, executable: &Path) -> Option<PathBuf> {
            let stem = executable.file_stem()?.to_string_lossy().into_owned();
            Some(PathBuf::from(format!("icons/{stem}_icon.png")))
        }
    }

    fn type_text(session: &mut EditSession, text: &str) {
        for c in text.chars() {
            session.push_char(c);
        }
    }

    #[test]
    fn test_activate_seeds_buffer_from_form() {
        let record = GameRecord::new("Doom", "Shooter", "/g/doom", "");
        let mut session = EditSession::for_record(2, &record);

        session.activate(FormField::Name);
        assert_eq!(session.buffer(), "Doom");
        type_text(&mut session, " II");
        assert_eq!(session.display_value(FormField::Name), "Doom II");
        // Not flushed yet
        assert_eq!(session.data().name, "Doom");
    }

    #[test]
    fn test_switching_fields_flushes() {
        let mut session = EditSession::for_new();
        session.activate(FormField::Name);
        type_text(&mut session, "Quake");
        session.activate(FormField::Description);

        assert_eq!(session.data().name, "Quake");
        assert_eq!(session.active_field(), Some(FormField::Description));
        assert_eq!(session.buffer(), "");
    }

    #[test]
    fn test_advance_walks_fields_then_deactivates() {
        let mut session = EditSession::for_new();
        session.activate(FormField::ExecutablePath);
        type_text(&mut session, "/g/run");
        session.advance();
        assert_eq!(session.active_field(), Some(FormField::ImagePath));
        assert_eq!(session.data().executable_path, "/g/run");

        type_text(&mut session, "cover.png");
        session.advance();
        assert_eq!(session.active_field(), None);
        assert_eq!(session.data().image_path, "cover.png");

        // Nothing active: no-op
        session.advance();
        assert_eq!(session.active_field(), None);
    }

    #[test]
    fn test_typing_without_focus_is_ignored() {
        let mut session = EditSession::for_new();
        type_text(&mut session, "abc");
        session.backspace();
        assert_eq!(session.buffer(), "");
        assert_eq!(session.data(), &FormData::default());
    }

    #[test]
    fn test_commit_requires_name() {
        let mut session = EditSession::for_new();
        session.set_path(FormField::ExecutablePath, "/g/run".into());
        assert_eq!(session.commit(&NoIcons), Err(ValidationError::MissingName));
    }

    #[test]
    fn test_commit_requires_executable() {
        let mut session = EditSession::for_new();
        session.activate(FormField::Name);
        type_text(&mut session, "Pong");
        assert_eq!(
            session.commit(&NoIcons),
            Err(ValidationError::MissingExecutable)
        );
        // The typed name survived the failed save
        assert_eq!(session.data().name, "Pong");
        assert_eq!(session.active_field(), Some(FormField::Name));
    }

    #[test]
    fn test_commit_flushes_active_buffer() {
        let mut session = EditSession::for_new();
        session.set_path(FormField::ExecutablePath, "/g/pong".into());
        session.activate(FormField::Name);
        type_text(&mut session, "Pong");

        let record = session.commit(&NoIcons).unwrap();
        assert_eq!(record.name, "Pong");
        assert_eq!(record.description, DEFAULT_DESCRIPTION);
        assert_eq!(record.image_path, "");
    }

    #[test]
    fn test_commit_uses_extracted_icon() {
        let mut session = EditSession::for_new();
        session.activate(FormField::Name);
        type_text(&mut session, "Pong");
        session.set_path(FormField::ExecutablePath, "/g/pong.exe".into());

        let record = session.commit(&FixedIcon).unwrap();
        assert_eq!(record.image_path, "icons/pong_icon.png");
    }

    #[test]
    fn test_chosen_image_skips_extraction() {
        let mut session = EditSession::for_new();
        session.activate(FormField::Name);
        type_text(&mut session, "Pong");
        session.set_path(FormField::ExecutablePath, "/g/pong.exe".into());
        session.set_path(FormField::ImagePath, "/art/pong.gif".into());

        let record = session.commit(&FixedIcon).unwrap();
        assert_eq!(record.image_path, "/art/pong.gif");
    }

    #[test]
    fn test_set_path_updates_active_buffer() {
        let mut session = EditSession::for_new();
        session.activate(FormField::ImagePath);
        session.set_path(FormField::ImagePath, "/art/a.png".into());
        assert_eq!(session.buffer(), "/art/a.png");

        // A later flush must not wipe the chosen path
        session.deactivate();
        assert_eq!(session.data().image_path, "/art/a.png");
    }

    #[test]
    fn test_field_order() {
        let mut field = Some(FormField::Name);
        let mut visited = Vec::new();
        while let Some(f) = field {
            visited.push(f);
            field = f.next();
        }
        assert_eq!(visited, FormField::ALL);
        assert!(FormField::Name.file_kind().is_none());
        assert_eq!(FormField::ImagePath.file_kind(), Some(FileKind::Image));
    }
}
