use std::fmt;

use fltk::enums::Shortcut;

use super::error::{AppError, Result};

/// A user-configurable key chord, stored in the settings file as text in the
/// `"Ctrl+Shift+S"` form the preferences dialog exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub key: char,
}

impl KeyChord {
    /// Parse a chord descriptor. Modifiers are case-insensitive; the key is a
    /// single character. A trailing `++` binds the literal plus key.
    pub fn parse(descriptor: &str) -> Result<KeyChord> {
        let invalid = || AppError::Hotkey(descriptor.to_string());

        let trimmed = descriptor.trim();
        let (body, trailing_plus) = if let Some(stripped) = trimmed.strip_suffix("++") {
            (stripped, true)
        } else if trimmed == "+" {
            ("", true)
        } else {
            (trimmed, false)
        };

        let mut chord = KeyChord {
            ctrl: false,
            shift: false,
            alt: false,
            key: '+',
        };
        let mut key = None;

        let parts: Vec<&str> = if body.is_empty() {
            Vec::new()
        } else {
            body.split('+').collect()
        };

        for (i, part) in parts.iter().enumerate() {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => chord.ctrl = true,
                "shift" => chord.shift = true,
                "alt" => chord.alt = true,
                other => {
                    let is_last = i == parts.len() - 1;
                    let mut chars = other.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) if is_last && !trailing_plus => key = Some(c),
                        _ => return Err(invalid()),
                    }
                }
            }
        }

        if trailing_plus {
            key = Some('+');
        }

        chord.key = key.ok_or_else(invalid)?;
        Ok(chord)
    }

    pub fn to_shortcut(&self) -> Shortcut {
        let mut shortcut = Shortcut::None;
        if self.ctrl {
            shortcut = shortcut | Shortcut::Ctrl;
        }
        if self.shift {
            shortcut = shortcut | Shortcut::Shift;
        }
        if self.alt {
            shortcut = shortcut | Shortcut::Alt;
        }
        // FLTK expects character shortcuts in lowercase
        shortcut | self.key.to_ascii_lowercase()
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        write!(f, "{}", self.key.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_chord() {
        let chord = KeyChord::parse("Ctrl+S").unwrap();
        assert!(chord.ctrl);
        assert!(!chord.shift);
        assert!(!chord.alt);
        assert_eq!(chord.key, 'S');
    }

    #[test]
    fn test_parse_is_case_insensitive_for_modifiers() {
        let chord = KeyChord::parse("control+shift+q").unwrap();
        assert!(chord.ctrl);
        assert!(chord.shift);
        assert_eq!(chord.key, 'q');
    }

    #[test]
    fn test_parse_plus_and_minus_keys() {
        let zoom_in = KeyChord::parse("Ctrl++").unwrap();
        assert!(zoom_in.ctrl);
        assert_eq!(zoom_in.key, '+');

        let zoom_out = KeyChord::parse("Ctrl+-").unwrap();
        assert!(zoom_out.ctrl);
        assert_eq!(zoom_out.key, '-');
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(KeyChord::parse("").is_err());
        assert!(KeyChord::parse("Ctrl+").is_err());
        assert!(KeyChord::parse("Ctrl").is_err());
        assert!(KeyChord::parse("Hyper+X").is_err());
        assert!(KeyChord::parse("Ctrl+Esc").is_err());
        assert!(KeyChord::parse("S+Ctrl").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for descriptor in ["Ctrl+S", "Ctrl+Shift+Z", "Alt+I", "Ctrl++"] {
            let chord = KeyChord::parse(descriptor).unwrap();
            assert_eq!(chord.to_string(), *descriptor);
            assert_eq!(KeyChord::parse(&chord.to_string()).unwrap(), chord);
        }
    }
}
