//! Running a file chooser off the render thread
//!
//! The chooser blocks until the user closes the dialog, so it runs on a helper
//! thread and hands its single result back through a oneshot channel. The
//! render loop polls once per frame.

use crate::{FileChooser, FileKind};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// Result of polling a picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerStatus {
    /// Dialog still open
    Pending,
    /// Dialog closed; `None` when the user cancelled
    Picked(Option<PathBuf>),
    /// Helper thread went away without answering
    Lost,
}

/// Handle to a file chooser running on a helper thread
#[derive(Debug)]
pub struct PickerHandle {
    kind: FileKind,
    rx: oneshot::Receiver<Option<PathBuf>>,
}

impl PickerHandle {
    pub fn spawn(chooser: Arc<dyn FileChooser>, kind: FileKind) -> Self {
        let (tx, rx) = oneshot::channel();

        let spawned = std::thread::Builder::new()
            .name("file-picker".into())
            .spawn(move || {
                let picked = chooser.choose(kind);
                // Receiver gone means the form was closed; nothing to deliver to
                let _ = tx.send(picked);
            });

        if let Err(e) = spawned {
            // The sender was dropped with the closure, so poll reports Lost
            tracing::error!("Failed to start file picker thread: {}", e);
        }

        tracing::debug!("File picker opened for {:?}", kind);
        Self { kind, rx }
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Non-blocking check for the chooser's answer.
    ///
    /// Returns `Picked` once; the handle should be dropped afterwards.
    pub fn poll(&mut self) -> PickerStatus {
        match self.rx.try_recv() {
            Ok(picked) => PickerStatus::Picked(picked),
            Err(TryRecvError::Empty) => PickerStatus::Pending,
            Err(TryRecvError::Closed) => PickerStatus::Lost,
        }
    }

    /// Block until the chooser answers; for tests and shutdown paths
    pub fn wait(self) -> PickerStatus {
        match self.rx.blocking_recv() {
            Ok(picked) => PickerStatus::Picked(picked),
            Err(_) => PickerStatus::Lost,
        }
    }
}
