use fltk::{app::Sender, button::Button, prelude::*, window::Window};

use crate::app::messages::Message;

const EMOJIS: [&str; 15] = [
    "\u{1f600}", "\u{1f602}", "\u{1f60d}", "\u{1f44d}", "\u{2764}\u{fe0f}",
    "\u{1f60a}", "\u{1f60e}", "\u{1f929}", "\u{1f914}", "\u{1f634}",
    "\u{1f973}", "\u{1f92f}", "\u{1f607}", "\u{1f608}", "\u{1f4a9}",
];

const COLUMNS: i32 = 5;
const CELL: i32 = 56;

/// Open the emoji picker. The window is not modal: it stays up so several
/// emoji can be inserted in a row, each click going through the channel.
pub fn show_emoji_picker(sender: &Sender<Message>) {
    let rows = (EMOJIS.len() as i32 + COLUMNS - 1) / COLUMNS;
    let mut window = Window::default()
        .with_size(COLUMNS * CELL + 20, rows * CELL + 20)
        .with_label("Emoji Picker");

    for (i, emoji) in EMOJIS.iter().enumerate() {
        let col = i as i32 % COLUMNS;
        let row = i as i32 / COLUMNS;
        let mut button = Button::new(10 + col * CELL, 10 + row * CELL, CELL - 10, CELL - 10, *emoji);
        button.set_label_size(24);

        let s = *sender;
        let emoji = emoji.to_string();
        button.set_callback(move |_| s.send(Message::InsertEmoji(emoji.clone())));
    }

    window.end();
    window.show();
}
