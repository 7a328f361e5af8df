use fltk::{
    app,
    button::{Button, CheckButton},
    dialog,
    enums::Align,
    frame::Frame,
    input::Input,
    menu::Choice,
    misc::Spinner,
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use super::run_dialog;
use crate::app::hotkeys::KeyChord;
use crate::app::settings::{AppSettings, MAX_FONT_SIZE, MIN_FONT_SIZE};

fn label(text: &str, y: i32) {
    Frame::default()
        .with_pos(15, y)
        .with_size(330, 20)
        .with_label(text)
        .with_align(Align::Left | Align::Inside);
}

fn hotkey_input(initial: &str, y: i32) -> Input {
    let mut input = Input::default().with_pos(15, y).with_size(330, 28);
    input.set_value(initial);
    input
}

/// Show the preferences dialog and return the updated settings if the user
/// clicked Apply. Hotkey descriptors are validated before the dialog accepts.
pub fn show_preferences_dialog(current: &AppSettings) -> Option<AppSettings> {
    let mut dialog_window = Window::default()
        .with_size(360, 450)
        .with_label("Preferences")
        .center_screen();
    dialog_window.make_modal(true);

    label("Save Hotkey:", 10);
    let save_hotkey = hotkey_input(&current.save_hotkey, 32);

    label("Exit Hotkey:", 68);
    let exit_hotkey = hotkey_input(&current.exit_hotkey, 90);

    label("Emoji Picker Hotkey:", 126);
    let emoji_hotkey = hotkey_input(&current.emoji_hotkey, 148);

    label("Font Family:", 184);
    let mut font_choice = Choice::default().with_pos(15, 206).with_size(330, 28);
    let mut families: Vec<String> = app::fonts()
        .into_iter()
        .map(|name| name.trim_start_matches(['@', ' ']).to_string())
        .collect();
    families.sort();
    families.dedup();
    if !families.iter().any(|f| f == &current.font_family) {
        families.insert(0, current.font_family.clone());
    }
    for family in &families {
        font_choice.add_choice(family);
    }
    let current_index = families
        .iter()
        .position(|f| f == &current.font_family)
        .unwrap_or(0);
    font_choice.set_value(current_index as i32);
    let families = Rc::new(families);

    label("Font Size:", 242);
    let mut font_size = Spinner::default().with_pos(15, 264).with_size(330, 28);
    font_size.set_range(MIN_FONT_SIZE as f64, MAX_FONT_SIZE as f64);
    font_size.set_step(1.0);
    font_size.set_value(current.font_size as f64);

    label("Menu Button Size:", 300);
    let mut menu_button_size = Spinner::default().with_pos(15, 322).with_size(330, 28);
    menu_button_size.set_range(12.0, 48.0);
    menu_button_size.set_step(1.0);
    menu_button_size.set_value(current.menu_button_size as f64);

    let mut dark_mode = CheckButton::default()
        .with_pos(15, 360)
        .with_size(330, 25)
        .with_label("Enable Dark Mode");
    dark_mode.set_checked(current.dark_mode);

    let mut apply_btn = Button::default()
        .with_pos(15, 400)
        .with_size(160, 32)
        .with_label("Apply");
    let mut cancel_btn = Button::default()
        .with_pos(185, 400)
        .with_size(160, 32)
        .with_label("Cancel");

    dialog_window.end();
    dialog_window.show();

    let result: Rc<RefCell<Option<AppSettings>>> = Rc::new(RefCell::new(None));

    {
        let result = result.clone();
        let families = families.clone();
        let font_choice = font_choice.clone();
        let font_size = font_size.clone();
        let menu_button_size = menu_button_size.clone();
        let dark_mode = dark_mode.clone();
        let save_hotkey = save_hotkey.clone();
        let exit_hotkey = exit_hotkey.clone();
        let emoji_hotkey = emoji_hotkey.clone();
        let mut dialog_apply = dialog_window.clone();

        apply_btn.set_callback(move |_| {
            // Reject bad chords here so a broken binding never reaches the menu
            for input in [&save_hotkey, &exit_hotkey, &emoji_hotkey] {
                if let Err(e) = KeyChord::parse(&input.value()) {
                    dialog::alert_default(&format!("{}\nUse the form Ctrl+Shift+S.", e));
                    return;
                }
            }

            let font_family = families
                .get(font_choice.value().max(0) as usize)
                .cloned()
                .unwrap_or_else(|| families[0].clone());

            *result.borrow_mut() = Some(AppSettings {
                font_family,
                font_size: font_size.value() as u32,
                dark_mode: dark_mode.is_checked(),
                save_hotkey: save_hotkey.value(),
                exit_hotkey: exit_hotkey.value(),
                emoji_hotkey: emoji_hotkey.value(),
                menu_button_size: menu_button_size.value() as u32,
            });
            dialog_apply.hide();
        });
    }

    {
        let mut dialog_cancel = dialog_window.clone();
        cancel_btn.set_callback(move |_| dialog_cancel.hide());
    }

    run_dialog(&dialog_window);

    let value = result.borrow_mut().take();
    value
}
