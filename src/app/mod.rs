//! Application layer: document session, settings store and command handling.
//!
//! The GUI widgets live in [`crate::ui`]; everything here apart from
//! `state` is free of FLTK types and unit-tested headless.

pub mod encoding;
pub mod error;
pub mod file_filters;
pub mod hotkeys;
pub mod messages;
pub mod session;
pub mod settings;
pub mod state;
pub mod text_ops;

// Re-exports for convenient external access
pub use error::AppError;
pub use messages::Message;
pub use session::{CloseChoice, DocumentSession, SessionUi};
pub use settings::AppSettings;
pub use state::AppState;
