//! Screen controller
//!
//! Owns every piece of launcher state and advances it once per frame: key
//! events are applied directly, the active screen is built into a [`View`],
//! and the first click that lands on an action is executed. At most one
//! action runs per frame.

use crate::action::Action;
use crate::form::{EditSession, EditTarget, FormField};
use crate::input::{InputEvent, Key};
use crate::pagination::Pagination;
use crate::password::{PasswordPrompt, PasswordPurpose};
use crate::screens::{self, ScreenContext};
use crate::view::View;
use mkast_config::{AssetLayout, LauncherConfig};
use mkast_library::{Catalog, import_image};
use mkast_runner::{FileChooser, IconExtractor, Launch, PickerHandle, PickerStatus};
use std::path::Path;
use std::sync::Arc;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Main,
    Admin,
    AdminEdit,
    Password(PasswordPurpose),
}

/// External collaborators the controller calls out to
pub struct Services {
    pub launcher: Box<dyn Launch>,
    pub icons: Box<dyn IconExtractor>,
    pub chooser: Arc<dyn FileChooser>,
}

struct OpenPicker {
    field: FormField,
    handle: PickerHandle,
}

pub struct App {
    config: LauncherConfig,
    ctx: ScreenContext,
    assets: AssetLayout,
    catalog: Catalog,
    services: Services,

    mode: Mode,
    main_pages: Pagination,
    admin_pages: Pagination,
    prompt: PasswordPrompt,
    session: Option<EditSession>,
    pending_delete: Option<usize>,
    picker: Option<OpenPicker>,
    running: bool,
}

impl App {
    pub fn new(
        config: LauncherConfig,
        catalog: Catalog,
        assets: AssetLayout,
        services: Services,
    ) -> Self {
        let ctx = ScreenContext::from_config(&config);
        Self {
            config,
            ctx,
            assets,
            catalog,
            services,
            mode: Mode::Main,
            main_pages: Pagination::new(screens::main_menu::PAGE_SIZE),
            admin_pages: Pagination::new(screens::admin::PAGE_SIZE),
            prompt: PasswordPrompt::new(PasswordPurpose::Admin),
            session: None,
            pending_delete: None,
            picker: None,
            running: true,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn context(&self) -> &ScreenContext {
        &self.ctx
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn password_input(&self) -> &str {
        self.prompt.input()
    }

    pub fn main_pages(&self) -> &Pagination {
        &self.main_pages
    }

    pub fn admin_pages(&self) -> &Pagination {
        &self.admin_pages
    }

    pub fn pending_delete(&self) -> Option<usize> {
        self.pending_delete
    }

    /// Field waiting on the file chooser, if any
    pub fn browsing(&self) -> Option<FormField> {
        self.picker.as_ref().map(|p| p.field)
    }

    /// Advance one frame and return what to draw
    pub fn frame(&mut self, events: &[InputEvent]) -> View {
        self.poll_picker();

        let mut click = None;
        for event in events {
            match *event {
                InputEvent::CloseRequested => {
                    tracing::info!("Window close requested");
                    self.running = false;
                }
                InputEvent::Key(key) => self.handle_key(key),
                InputEvent::Char(c) => self.handle_char(c),
                InputEvent::Click { x, y } => {
                    if click.is_none() {
                        click = Some((x, y));
                    }
                }
            }
        }

        let view = self.view();
        let Some((x, y)) = click else {
            return view;
        };

        let action = view.hit(x, y);
        if self.mode == Mode::AdminEdit
            && !matches!(action, Some(Action::FocusField(_) | Action::BrowseFile(_)))
        {
            // Clicking anywhere but a field commits what was typed
            if let Some(session) = self.session.as_mut() {
                session.deactivate();
            }
        }

        match action {
            Some(action) => {
                self.dispatch(action);
                self.view()
            }
            None => view,
        }
    }

    /// Build the active screen
    pub fn view(&self) -> View {
        let games = self.catalog.games();
        match self.mode {
            Mode::Main => screens::main_menu::build(&self.ctx, games, &self.main_pages),
            Mode::Password(_) => {
                let base = screens::main_menu::build(&self.ctx, games, &self.main_pages);
                screens::password::build(&self.ctx, &self.prompt, base)
            }
            Mode::Admin => {
                screens::admin::build(&self.ctx, games, &self.admin_pages, self.pending_delete)
            }
            Mode::AdminEdit => match &self.session {
                Some(session) => screens::edit::build(&self.ctx, session, self.browsing()),
                None => screens::admin::build(&self.ctx, games, &self.admin_pages, None),
            },
        }
    }

    pub fn handle_key(&mut self, key: Key) {
        match self.mode {
            Mode::Main => match key {
                Key::Escape => self.dispatch(Action::OpenPassword(PasswordPurpose::Exit)),
                Key::Left => self.dispatch(Action::ChangePage(-1)),
                Key::Right => self.dispatch(Action::ChangePage(1)),
                _ => {}
            },
            Mode::Password(_) => match key {
                Key::Escape => self.dispatch(Action::CancelPassword),
                Key::Enter => self.dispatch(Action::SubmitPassword),
                Key::Backspace => self.prompt.backspace(),
                _ => {}
            },
            Mode::Admin if self.pending_delete.is_some() => {
                if key == Key::Escape {
                    self.dispatch(Action::CancelDialog);
                }
            }
            Mode::Admin => match key {
                Key::Escape => self.dispatch(Action::ExitAdmin),
                Key::Left => self.dispatch(Action::ChangePage(-1)),
                Key::Right => self.dispatch(Action::ChangePage(1)),
                _ => {}
            },
            Mode::AdminEdit => {
                let Some(session) = self.session.as_mut() else {
                    return;
                };
                match key {
                    Key::Escape if session.active_field().is_some() => session.deactivate(),
                    Key::Escape => self.dispatch(Action::CancelEdit),
                    Key::Enter | Key::Tab => session.advance(),
                    Key::Backspace => session.backspace(),
                    Key::Left | Key::Right => {}
                }
            }
        }
    }

    pub fn handle_char(&mut self, c: char) {
        match self.mode {
            Mode::Password(_) => self.prompt.push_char(c),
            Mode::AdminEdit => {
                if let Some(session) = self.session.as_mut() {
                    session.push_char(c);
                }
            }
            Mode::Main | Mode::Admin => {}
        }
    }

    /// Execute one action
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!("Action: {:?}", action);
        match action {
            Action::OpenPassword(purpose) => {
                self.prompt = PasswordPrompt::new(purpose);
                self.mode = Mode::Password(purpose);
            }
            Action::SubmitPassword => self.submit_password(),
            Action::CancelPassword => {
                self.prompt.clear();
                self.mode = Mode::Main;
            }
            Action::LaunchGame(path) => self.launch(&path),
            Action::ChangePage(delta) => {
                let total = self.catalog.len();
                match self.mode {
                    Mode::Main => {
                        self.main_pages.change_page(delta, total);
                    }
                    Mode::Admin => {
                        self.admin_pages.change_page(delta, total);
                    }
                    _ => {}
                }
            }
            Action::ExitAdmin => {
                self.pending_delete = None;
                self.mode = Mode::Main;
            }
            Action::StartEdit(target) => self.start_edit(target),
            Action::RequestDelete(index) => {
                if index < self.catalog.len() {
                    self.pending_delete = Some(index);
                }
            }
            Action::DeleteGame(index) => self.delete(index),
            Action::CancelDialog => self.pending_delete = None,
            Action::FocusField(field) => {
                if let Some(session) = self.session.as_mut() {
                    session.activate(field);
                }
            }
            Action::BrowseFile(field) => self.browse(field),
            Action::SaveEdit => self.save_edit(),
            Action::CancelEdit => self.close_edit(),
        }
    }

    fn submit_password(&mut self) {
        let Mode::Password(purpose) = self.mode else {
            return;
        };
        let expected = match purpose {
            PasswordPurpose::Admin => &self.config.admin_password,
            PasswordPurpose::Exit => &self.config.exit_password,
        };

        if !self.prompt.verify(expected) {
            tracing::info!("Wrong {:?} password", purpose);
            self.prompt.clear();
            return;
        }

        self.prompt.clear();
        match purpose {
            PasswordPurpose::Admin => {
                tracing::info!("Entering admin mode");
                self.session = None;
                self.pending_delete = None;
                self.mode = Mode::Admin;
            }
            PasswordPurpose::Exit => {
                tracing::info!("Exit password accepted");
                self.running = false;
            }
        }
    }

    fn launch(&self, path: &str) {
        match self.services.launcher.launch(Path::new(path)) {
            Ok(result) => tracing::info!("Launched {} with PID {}", path, result.pid),
            Err(e) => tracing::error!("Failed to launch game: {}", e),
        }
    }

    fn start_edit(&mut self, target: EditTarget) {
        let session = match target {
            EditTarget::New => EditSession::for_new(),
            EditTarget::Existing(index) => match self.catalog.get(index) {
                Some(record) => EditSession::for_record(index, record),
                None => {
                    tracing::warn!("No game at index {} to edit", index);
                    return;
                }
            },
        };
        self.session = Some(session);
        self.pending_delete = None;
        self.mode = Mode::AdminEdit;
    }

    fn delete(&mut self, index: usize) {
        self.pending_delete = None;
        if let Err(e) = self.catalog.delete(index) {
            tracing::error!("Failed to delete game: {}", e);
        }
        let total = self.catalog.len();
        self.admin_pages.clamp(total);
        self.main_pages.clamp(total);
    }

    fn browse(&mut self, field: FormField) {
        let Some(kind) = field.file_kind() else {
            return;
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if self.picker.is_some() {
            tracing::debug!("File chooser already open");
            return;
        }

        session.activate(field);
        let handle = PickerHandle::spawn(Arc::clone(&self.services.chooser), kind);
        self.picker = Some(OpenPicker { field, handle });
    }

    fn poll_picker(&mut self) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        match picker.handle.poll() {
            PickerStatus::Pending => {}
            PickerStatus::Picked(picked) => {
                let field = picker.field;
                self.picker = None;
                match (picked, self.session.as_mut()) {
                    (Some(path), Some(session)) => {
                        tracing::debug!("Picked {} for {:?}", path.display(), field);
                        session.set_path(field, path.to_string_lossy().into_owned());
                    }
                    (None, _) => tracing::debug!("File selection cancelled"),
                    (Some(_), None) => {}
                }
            }
            PickerStatus::Lost => {
                tracing::warn!("File chooser exited without a result");
                self.picker = None;
            }
        }
    }

    fn save_edit(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let mut record = match session.commit(self.services.icons.as_ref()) {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!("Not saving game: {}", e);
                return;
            }
        };

        let target = session.target();
        if target == EditTarget::New && record.has_image() {
            let images_dir = self.assets.game_images_dir();
            if let Some(imported) = import_image(&record.image_path, &images_dir) {
                record.image_path = imported.to_string_lossy().into_owned();
            }
        }

        let result = match target {
            EditTarget::New => self.catalog.add(record),
            EditTarget::Existing(index) => self.catalog.update(index, record),
        };
        if let Err(e) = result {
            tracing::error!("Failed to save game: {}", e);
        }

        self.close_edit();
    }

    fn close_edit(&mut self) {
        self.session = None;
        self.picker = None;
        self.mode = Mode::Admin;
    }
}
