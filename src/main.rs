use fltk::{app, dialog, enums::Event, prelude::*};

use arc_note::app::messages::Message;
use arc_note::app::settings::AppSettings;
use arc_note::app::state::AppState;
use arc_note::ui::dialogs::{about, emoji};
use arc_note::ui::main_window::build_main_window;
use arc_note::ui::menu::build_menu;

fn main() {
    let fltk_app = app::App::default().load_system_fonts();
    let (sender, receiver) = app::channel::<Message>();

    let (settings, load_error) = AppSettings::load();

    let mut widgets = build_main_window();
    build_menu(&mut widgets.menu, &sender, &settings);

    // Route the window manager's close button through the same confirmation
    // as File/Exit
    {
        let sender = sender.clone();
        widgets.wind.set_callback(move |_| {
            if app::event() == Event::Close {
                sender.send(Message::WindowClose);
            }
        });
    }

    let mut state = AppState::new(
        widgets.text_editor,
        widgets.buffer,
        widgets.wind,
        widgets.menu,
        widgets.flex,
        sender.clone(),
        settings,
    );
    state.apply_settings();
    state.update_window_title();
    state.window.show();

    if let Some(e) = load_error {
        dialog::alert_default(&format!(
            "Could not load configuration: {}\nUsing default settings.",
            e
        ));
    }

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileNew => state.file_new(),
                Message::FileOpen => state.file_open(),
                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                Message::FileQuit | Message::WindowClose => {
                    if state.file_quit() {
                        fltk_app.quit();
                    }
                }
                Message::ShowEmojiPicker => emoji::show_emoji_picker(&sender),
                Message::InsertEmoji(emoji) => state.insert_emoji(&emoji),
                Message::ZoomIn => state.zoom_in(),
                Message::ZoomOut => state.zoom_out(),
                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::OpenPreferences => state.open_preferences(),
                Message::ShowAbout => about::show_about_dialog(),
                Message::BufferModified => state.update_window_title(),
            }
        }
    }
}
