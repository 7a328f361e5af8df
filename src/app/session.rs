use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::encoding;
use super::file_filters::ensure_default_extension;
use super::text_ops::extract_filename;

/// The user's answer to the unsaved-changes prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseChoice {
    Save,
    Discard,
    Cancel,
}

/// Blocking collaborators the session consults: file pickers and message
/// boxes. The production implementation wraps the native FLTK dialogs; tests
/// script the answers.
pub trait SessionUi {
    fn choose_unsaved(&mut self, name: &str) -> CloseChoice;
    fn pick_open_path(&mut self) -> Option<PathBuf>;
    fn pick_save_path(&mut self) -> Option<PathBuf>;
    fn warn(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Owns the document's identity (path + dirty flag) and gates every action
/// that would destroy unsaved content behind the Save/Discard/Cancel prompt.
///
/// The text itself stays in the editor widget; operations receive the current
/// buffer contents and hand replacement content back to the caller.
pub struct DocumentSession {
    file_path: Option<PathBuf>,
    has_unsaved_changes: Rc<Cell<bool>>,
}

impl DocumentSession {
    pub fn new() -> Self {
        Self {
            file_path: None,
            has_unsaved_changes: Rc::new(Cell::new(false)),
        }
    }

    /// Shared flag for the buffer modify callback: any edit sets it.
    pub fn dirty_flag(&self) -> Rc<Cell<bool>> {
        self.has_unsaved_changes.clone()
    }

    pub fn is_dirty(&self) -> bool {
        self.has_unsaved_changes.get()
    }

    pub fn mark_clean(&self) {
        self.has_unsaved_changes.set(false);
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn display_name(&self) -> String {
        match &self.file_path {
            Some(path) => extract_filename(&path.to_string_lossy()),
            None => "Untitled".to_string(),
        }
    }

    /// The save-confirmation protocol. Returns `true` when the caller may go
    /// on to replace or drop the current content.
    ///
    /// Clean documents pass without a prompt. A dirty document prompts once:
    /// Save proceeds only if the save actually lands (a failed write or a
    /// cancelled Save As is never permission to discard), Discard proceeds
    /// without touching disk, Cancel aborts.
    pub fn confirm_discard(&mut self, ui: &mut dyn SessionUi, text: &str) -> bool {
        if !self.is_dirty() {
            return true;
        }
        match ui.choose_unsaved(&self.display_name()) {
            CloseChoice::Save => self.save(ui, text),
            CloseChoice::Discard => true,
            CloseChoice::Cancel => false,
        }
    }

    /// Start an empty document. On `true` the caller clears the widget; the
    /// session is already Clean and untitled.
    pub fn new_document(&mut self, ui: &mut dyn SessionUi, text: &str) -> bool {
        if !self.confirm_discard(ui, text) {
            return false;
        }
        self.file_path = None;
        self.has_unsaved_changes.set(false);
        true
    }

    /// Pick and load a document, returning its content for the caller to put
    /// in the widget. `None` means the operation was cancelled or failed; the
    /// session state is unchanged in that case.
    pub fn open_document(&mut self, ui: &mut dyn SessionUi, text: &str) -> Option<String> {
        if !self.confirm_discard(ui, text) {
            return None;
        }
        let path = ui.pick_open_path()?;
        match encoding::read_text_file(&path) {
            Ok(decoded) => {
                if decoded.used_fallback {
                    ui.warn(
                        "The file was opened using Windows-1252 encoding. Some characters \
                         might not display correctly. Saving will convert it to UTF-8.",
                    );
                }
                self.file_path = Some(path);
                self.has_unsaved_changes.set(false);
                Some(decoded.content)
            }
            Err(e) => {
                ui.error(&format!("Error opening file: {}", e));
                None
            }
        }
    }

    /// Write to the current path, or fall through to Save As for an untitled
    /// document. Returns whether the content is on disk afterwards.
    pub fn save(&mut self, ui: &mut dyn SessionUi, text: &str) -> bool {
        let Some(path) = self.file_path.clone() else {
            return self.save_as(ui, text);
        };
        match fs::write(&path, text) {
            Ok(()) => {
                self.has_unsaved_changes.set(false);
                true
            }
            Err(e) => {
                ui.error(&format!("Error saving file: {}", e));
                false
            }
        }
    }

    /// Prompt for a destination and write there. An empty pick is a normal
    /// negative result, not an error.
    pub fn save_as(&mut self, ui: &mut dyn SessionUi, text: &str) -> bool {
        let Some(path) = ui.pick_save_path() else {
            return false;
        };
        let path = ensure_default_extension(path);
        match fs::write(&path, text) {
            Ok(()) => {
                self.file_path = Some(path);
                self.has_unsaved_changes.set(false);
                true
            }
            Err(e) => {
                ui.error(&format!("Error saving file: {}", e));
                false
            }
        }
    }

    /// Handle a quit or window-close request. Returns `true` if the caller
    /// may terminate.
    pub fn request_close(&mut self, ui: &mut dyn SessionUi, text: &str) -> bool {
        self.confirm_discard(ui, text)
    }
}

impl Default for DocumentSession {
    fn default() -> Self {
        Self::new()
    }
}
