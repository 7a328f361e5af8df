/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileQuit,
    WindowClose,

    // Edit
    ShowEmojiPicker,
    InsertEmoji(String),

    // View
    ZoomIn,
    ZoomOut,

    // Preferences & Help
    ToggleDarkMode,
    OpenPreferences,
    ShowAbout,

    // Sent by the buffer modify callback so the title can track the dirty flag
    BufferModified,
}
