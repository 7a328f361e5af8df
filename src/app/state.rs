use fltk::{
    app::Sender,
    dialog,
    enums::Font,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use super::hotkeys::KeyChord;
use super::messages::Message;
use super::session::DocumentSession;
use super::settings::AppSettings;
use crate::ui::dialogs::preferences::show_preferences_dialog;
use crate::ui::file_dialogs::NativeUi;
use crate::ui::theme::apply_theme;

pub struct AppState {
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub window: Window,
    pub menu: MenuBar,
    pub flex: Flex,
    pub settings: AppSettings,
    pub session: DocumentSession,
    pub native_ui: NativeUi,
}

impl AppState {
    pub fn new(
        editor: TextEditor,
        buffer: TextBuffer,
        window: Window,
        menu: MenuBar,
        flex: Flex,
        sender: Sender<Message>,
        settings: AppSettings,
    ) -> Self {
        let session = DocumentSession::new();

        // Any edit flips the dirty flag and refreshes the title
        let dirty = session.dirty_flag();
        let mut modify_buffer = buffer.clone();
        modify_buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                dirty.set(true);
                sender.send(Message::BufferModified);
            }
        });

        Self {
            editor,
            buffer,
            window,
            menu,
            flex,
            settings,
            session,
            native_ui: NativeUi::new(),
        }
    }

    pub fn update_window_title(&mut self) {
        let prefix = if self.session.is_dirty() { "*" } else { "" };
        self.window
            .set_label(&format!("{}{} - ArcNote", prefix, self.session.display_name()));
    }

    // --- File operations ---

    pub fn file_new(&mut self) {
        let text = self.buffer.text();
        if self.session.new_document(&mut self.native_ui, &text) {
            self.buffer.set_text("");
            // set_text fires the modify callback; the document is not dirty
            self.session.mark_clean();
            self.update_window_title();
        }
    }

    pub fn file_open(&mut self) {
        let text = self.buffer.text();
        if let Some(content) = self.session.open_document(&mut self.native_ui, &text) {
            self.buffer.set_text(&content);
            self.session.mark_clean();
            self.update_window_title();
        }
    }

    pub fn file_save(&mut self) {
        let text = self.buffer.text();
        self.session.save(&mut self.native_ui, &text);
        self.update_window_title();
    }

    pub fn file_save_as(&mut self) {
        let text = self.buffer.text();
        self.session.save_as(&mut self.native_ui, &text);
        self.update_window_title();
    }

    /// Handle quit request. Returns `true` if the app should exit.
    pub fn file_quit(&mut self) -> bool {
        let text = self.buffer.text();
        let should_quit = self.session.request_close(&mut self.native_ui, &text);
        self.update_window_title();
        should_quit
    }

    // --- Editing ---

    pub fn insert_emoji(&mut self, emoji: &str) {
        let pos = self.editor.insert_position();
        self.buffer.insert(pos, emoji);
        self.editor.set_insert_position(pos + emoji.len() as i32);
    }

    // --- Settings ---

    pub fn toggle_dark_mode(&mut self) {
        self.settings.dark_mode = !self.settings.dark_mode;
        self.persist_settings();
        self.apply_settings();
    }

    pub fn zoom_in(&mut self) {
        if self.settings.zoom_in() {
            self.persist_settings();
            self.apply_settings();
        }
    }

    pub fn zoom_out(&mut self) {
        if self.settings.zoom_out() {
            self.persist_settings();
            self.apply_settings();
        }
    }

    pub fn open_preferences(&mut self) {
        if let Some(new_settings) = show_preferences_dialog(&self.settings) {
            self.settings = new_settings;
            self.persist_settings();
            self.apply_settings();
        }
    }

    /// Write the settings file; a failure is worth a warning but never blocks
    /// the change that was just made.
    fn persist_settings(&self) {
        if let Err(e) = self.settings.save() {
            dialog::alert_default(&format!("Could not save configuration: {}", e));
        }
    }

    /// Push the current settings onto the live widgets: font, colors, menu
    /// sizing and the configurable shortcuts.
    pub fn apply_settings(&mut self) {
        self.editor.set_text_font(Font::by_name(&self.settings.font_family));
        self.editor.set_text_size(self.settings.font_size as i32);

        self.menu.set_text_size(self.settings.menu_button_size as i32);

        apply_theme(
            &mut self.editor,
            &mut self.window,
            &mut self.menu,
            self.settings.dark_mode,
        );

        self.update_menu_checkbox("Preferences/Toggle Dark Mode", self.settings.dark_mode);
        self.rebind_hotkeys();
        self.editor.redraw();
        self.menu.redraw();
    }

    fn update_menu_checkbox(&self, path: &str, checked: bool) {
        let idx = self.menu.find_index(path);
        if idx >= 0 {
            if let Some(mut item) = self.menu.at(idx) {
                if checked {
                    item.set();
                } else {
                    item.clear();
                }
            }
        }
    }

    /// Move the configurable chords onto their menu items. Each action has
    /// exactly one binding point, so setting the item's shortcut also releases
    /// whatever chord was bound before.
    fn rebind_hotkeys(&mut self) {
        let bindings = [
            ("File/Save", self.settings.save_hotkey.clone()),
            ("File/Exit", self.settings.exit_hotkey.clone()),
            ("Edit/Emoji Picker...", self.settings.emoji_hotkey.clone()),
        ];
        for (path, descriptor) in bindings {
            let chord = match KeyChord::parse(&descriptor) {
                Ok(chord) => chord,
                Err(e) => {
                    dialog::alert_default(&format!("{}\nKeeping the previous binding.", e));
                    continue;
                }
            };
            let idx = self.menu.find_index(path);
            if idx >= 0 {
                if let Some(mut item) = self.menu.at(idx) {
                    item.set_shortcut(chord.to_shortcut());
                }
            }
        }
    }
}
