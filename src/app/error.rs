use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Invalid hotkey: {0}")]
    Hotkey(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Encoding("not valid UTF-8 or Windows-1252".to_string());
        assert_eq!(
            err.to_string(),
            "Encoding error: not valid UTF-8 or Windows-1252"
        );

        let err = AppError::Hotkey("Ctrl+".to_string());
        assert_eq!(err.to_string(), "Invalid hotkey: Ctrl+");
    }
}
