use std::path::{Path, PathBuf};

use fltk::dialog;
use fltk::dialog::{FileDialogType, NativeFileChooser};

use crate::app::file_filters::document_filter;
use crate::app::session::{CloseChoice, SessionUi};

fn run_chooser(dialog_type: FileDialogType, directory: Option<&Path>) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(dialog_type);
    nfc.set_filter(&document_filter());
    if let Some(dir) = directory {
        let _ = nfc.set_directory(&dir.to_path_buf());
    }
    nfc.show(); // returns (), blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}

pub fn native_open_dialog(directory: Option<&Path>) -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseFile, directory)
}

pub fn native_save_dialog(directory: Option<&Path>) -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseSaveFile, directory)
}

/// Production [`SessionUi`]: native choosers and FLTK message boxes.
/// Remembers the last directory a picker was used in.
pub struct NativeUi {
    last_directory: Option<PathBuf>,
}

impl NativeUi {
    pub fn new() -> Self {
        Self { last_directory: None }
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.last_directory = Some(parent.to_path_buf());
        }
    }
}

impl Default for NativeUi {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionUi for NativeUi {
    fn choose_unsaved(&mut self, name: &str) -> CloseChoice {
        let choice = dialog::choice2_default(
            &format!("\"{}\" has unsaved changes.", name),
            "Save",
            "Discard",
            "Cancel",
        );
        match choice {
            Some(0) => CloseChoice::Save,
            Some(1) => CloseChoice::Discard,
            _ => CloseChoice::Cancel,
        }
    }

    fn pick_open_path(&mut self) -> Option<PathBuf> {
        let path = native_open_dialog(self.last_directory.as_deref())?;
        self.remember_directory(&path);
        Some(path)
    }

    fn pick_save_path(&mut self) -> Option<PathBuf> {
        let path = native_save_dialog(self.last_directory.as_deref())?;
        self.remember_directory(&path);
        Some(path)
    }

    fn warn(&mut self, message: &str) {
        dialog::message_default(message);
    }

    fn error(&mut self, message: &str) {
        dialog::alert_default(message);
    }
}
