use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::hotkeys::KeyChord;
use crate::app::messages::Message;
use crate::app::settings::AppSettings;

/// Shortcut for a stored chord descriptor. An invalid descriptor leaves the
/// item unbound; `AppState::apply_settings` reports it once at startup.
fn chord_shortcut(descriptor: &str) -> Shortcut {
    KeyChord::parse(descriptor)
        .map(|chord| chord.to_shortcut())
        .unwrap_or(Shortcut::None)
}

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, settings: &AppSettings) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save", chord_shortcut(&settings.save_hotkey), MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("File/Exit", chord_shortcut(&settings.exit_hotkey), MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Edit
    menu.add("Edit/Emoji Picker...", chord_shortcut(&settings.emoji_hotkey), MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowEmojiPicker) });

    // View
    menu.add("View/Zoom In", Shortcut::Ctrl | '=', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ZoomIn) });
    menu.add("View/Zoom Out", Shortcut::Ctrl | '-', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ZoomOut) });

    // Preferences
    menu.add("Preferences/Preferences...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenPreferences) });
    let dm_flag = if settings.dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("Preferences/Toggle Dark Mode", Shortcut::None, dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });

    // Help
    menu.add("Help/About ArcNote", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
