use fltk::{enums::Color, menu::MenuBar, prelude::*, text::TextEditor, window::Window};

pub fn apply_theme(editor: &mut TextEditor, window: &mut Window, menu: &mut MenuBar, is_dark: bool) {
    if is_dark {
        // Dark mode colors
        editor.set_color(Color::from_rgb(35, 35, 35));
        editor.set_text_color(Color::from_rgb(237, 237, 237));
        editor.set_cursor_color(Color::from_rgb(255, 255, 255));
        editor.set_selection_color(Color::from_rgb(68, 68, 68));
        editor.set_linenumber_bgcolor(Color::from_rgb(41, 41, 41));
        editor.set_linenumber_fgcolor(Color::from_rgb(136, 136, 136));
        window.set_color(Color::from_rgb(24, 25, 26));
        window.set_label_color(Color::from_rgb(237, 237, 237));
        menu.set_color(Color::from_rgb(35, 35, 35));
        menu.set_text_color(Color::from_rgb(237, 237, 237));
        menu.set_selection_color(Color::from_rgb(58, 123, 213)); // Hover color
    } else {
        // Light mode colors
        editor.set_color(Color::White);
        editor.set_text_color(Color::from_rgb(35, 35, 35));
        editor.set_cursor_color(Color::Black);
        editor.set_selection_color(Color::from_rgb(182, 215, 255));
        editor.set_linenumber_bgcolor(Color::from_rgb(240, 240, 240));
        editor.set_linenumber_fgcolor(Color::from_rgb(68, 68, 68));
        window.set_color(Color::from_rgb(250, 251, 252));
        window.set_label_color(Color::Black);
        menu.set_color(Color::from_rgb(237, 237, 237));
        menu.set_text_color(Color::from_rgb(35, 35, 35));
        menu.set_selection_color(Color::from_rgb(182, 215, 255)); // Hover color
    }

    editor.redraw();
    window.redraw();
    menu.redraw();
}
