use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{AppError, Result};

/// Zoom stops shrinking here; a smaller stored value is raised on load.
pub const MIN_FONT_SIZE: u32 = 8;
/// Zoom stops growing here.
pub const MAX_FONT_SIZE: u32 = 72;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// `alias = "font"` accepts configs written by older releases.
    #[serde(default = "default_font_family", alias = "font")]
    pub font_family: String,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,

    #[serde(default = "default_save_hotkey")]
    pub save_hotkey: String,

    #[serde(default = "default_exit_hotkey")]
    pub exit_hotkey: String,

    #[serde(default = "default_emoji_hotkey")]
    pub emoji_hotkey: String,

    #[serde(default = "default_menu_button_size")]
    pub menu_button_size: u32,
}

fn default_font_family() -> String {
    "Arial".to_string()
}

fn default_font_size() -> u32 {
    12
}

fn default_dark_mode() -> bool {
    false
}

fn default_save_hotkey() -> String {
    "Ctrl+S".to_string()
}

fn default_exit_hotkey() -> String {
    "Ctrl+Q".to_string()
}

fn default_emoji_hotkey() -> String {
    "Ctrl+I".to_string()
}

fn default_menu_button_size() -> u32 {
    22
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            dark_mode: default_dark_mode(),
            save_hotkey: default_save_hotkey(),
            exit_hotkey: default_exit_hotkey(),
            emoji_hotkey: default_emoji_hotkey(),
            menu_button_size: default_menu_button_size(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk.
    ///
    /// A missing file yields the defaults (persisted so the file exists next
    /// time). A file that exists but fails to parse also yields the defaults,
    /// plus the error so the caller can warn the user; the record handed back
    /// is always fully populated.
    pub fn load() -> (Self, Option<AppError>) {
        let config_path = Self::config_path();

        match fs::read_to_string(&config_path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(settings) => (settings, None),
                Err(e) => (Self::default(), Some(e)),
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                let _ = default.save();
                (default, None)
            }
        }
    }

    /// Parse a settings record. Missing fields fall back to their defaults,
    /// unknown keys are ignored.
    pub fn from_json(contents: &str) -> Result<Self> {
        let mut settings: AppSettings = serde_json::from_str(contents)?;
        settings.font_size = settings.font_size.max(MIN_FONT_SIZE);
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("arcnote");
        path.push("config.json");
        path
    }

    /// Grow the font by one point, up to [`MAX_FONT_SIZE`]. Returns whether
    /// the size changed; a no-op needs no redraw and no persistence.
    pub fn zoom_in(&mut self) -> bool {
        if self.font_size < MAX_FONT_SIZE {
            self.font_size += 1;
            true
        } else {
            false
        }
    }

    /// Shrink the font by one point, down to [`MIN_FONT_SIZE`].
    pub fn zoom_out(&mut self) -> bool {
        if self.font_size > MIN_FONT_SIZE {
            self.font_size -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.font_family, "Arial");
        assert_eq!(settings.font_size, 12);
        assert!(!settings.dark_mode);
        assert_eq!(settings.save_hotkey, "Ctrl+S");
        assert_eq!(settings.exit_hotkey, "Ctrl+Q");
        assert_eq!(settings.emoji_hotkey, "Ctrl+I");
        assert_eq!(settings.menu_button_size, 22);
    }

    #[test]
    fn test_partial_config_backfills_missing_fields() {
        // Simulate an older config that predates the dark mode flag
        let json = r#"{
            "font_family": "Courier",
            "font_size": 17,
            "save_hotkey": "Ctrl+W",
            "exit_hotkey": "Ctrl+E",
            "emoji_hotkey": "Ctrl+J",
            "menu_button_size": 30
        }"#;
        let settings = AppSettings::from_json(json).unwrap();

        assert_eq!(settings.font_family, "Courier");
        assert_eq!(settings.font_size, 17);
        assert_eq!(settings.save_hotkey, "Ctrl+W");
        assert_eq!(settings.menu_button_size, 30);
        // Missing field uses its default
        assert!(!settings.dark_mode);
    }

    #[test]
    fn test_font_alias_accepted() {
        let json = r#"{"font": "Helvetica"}"#;
        let settings = AppSettings::from_json(json).unwrap();
        assert_eq!(settings.font_family, "Helvetica");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let json = r#"{"font_size": 14, "line_wrap": true}"#;
        let settings = AppSettings::from_json(json).unwrap();
        assert_eq!(settings.font_size, 14);
    }

    #[test]
    fn test_corrupt_config_is_an_error() {
        assert!(AppSettings::from_json("{not json").is_err());
    }

    #[test]
    fn test_font_size_floor_applied_on_load() {
        let json = r#"{"font_size": 3}"#;
        let settings = AppSettings::from_json(json).unwrap();
        assert_eq!(settings.font_size, MIN_FONT_SIZE);
    }

    #[test]
    fn test_round_trip_via_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("config.json");

        let settings = AppSettings {
            font_family: "DejaVu Sans".to_string(),
            font_size: 21,
            dark_mode: true,
            save_hotkey: "Ctrl+Shift+S".to_string(),
            exit_hotkey: "Ctrl+X".to_string(),
            emoji_hotkey: "Alt+E".to_string(),
            menu_button_size: 18,
        };
        settings.save_to(&path).unwrap();

        let loaded = AppSettings::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_zoom_bounds() {
        let mut settings = AppSettings {
            font_size: MAX_FONT_SIZE,
            ..Default::default()
        };
        assert!(!settings.zoom_in());
        assert_eq!(settings.font_size, MAX_FONT_SIZE);
        assert!(settings.zoom_out());
        assert_eq!(settings.font_size, MAX_FONT_SIZE - 1);

        settings.font_size = MIN_FONT_SIZE;
        assert!(!settings.zoom_out());
        assert_eq!(settings.font_size, MIN_FONT_SIZE);
        assert!(settings.zoom_in());
        assert_eq!(settings.font_size, MIN_FONT_SIZE + 1);
    }
}
