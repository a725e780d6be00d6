//! File choosing

use std::path::PathBuf;

/// What the user is being asked to pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Executable,
    Image,
}

impl FileKind {
    pub fn title(self) -> &'static str {
        match self {
            FileKind::Executable => "Select Game Executable",
            FileKind::Image => "Select Game Image",
        }
    }

    /// Named extension filters, most specific first
    pub fn filters(self) -> &'static [(&'static str, &'static [&'static str])] {
        match self {
            FileKind::Executable => &[
                ("Executables", &["exe", "bat", "cmd", "sh", "AppImage", "x86_64"]),
                ("All files", &["*"]),
            ],
            FileKind::Image => &[
                ("Images", &["png", "jpg", "jpeg", "gif", "bmp", "ico"]),
                ("All files", &["*"]),
            ],
        }
    }
}

/// Blocking file chooser; run it through [`crate::PickerHandle`] from the UI thread
pub trait FileChooser: Send + Sync {
    fn choose(&self, kind: FileKind) -> Option<PathBuf>;
}

/// Native OS dialog
#[cfg(feature = "file-dialog")]
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFileChooser;

#[cfg(feature = "file-dialog")]
impl FileChooser for NativeFileChooser {
    fn choose(&self, kind: FileKind) -> Option<PathBuf> {
        let dialog = kind
            .filters()
            .iter()
            .fold(rfd::FileDialog::new().set_title(kind.title()), |dialog, (name, exts)| {
                dialog.add_filter(*name, *exts)
            });
        dialog.pick_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_filter_covers_animated_gifs() {
        let (_, exts) = FileKind::Image.filters()[0];
        assert!(exts.contains(&"gif"));
        assert!(exts.contains(&"png"));
    }

    #[test]
    fn test_titles_differ() {
        assert_ne!(FileKind::Executable.title(), FileKind::Image.title());
    }
}
