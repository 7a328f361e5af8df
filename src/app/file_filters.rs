use std::path::PathBuf;

/// Extension given to documents saved without a recognized one.
pub const DEFAULT_EXTENSION: &str = "arc";

/// Extensions accepted as-is in Save As.
const RECOGNIZED_EXTENSIONS: [&str; 2] = ["arc", "txt"];

/// Filter for open/save dialogs with the formats ArcNote edits.
///
/// FLTK format: "Description\tPattern\nDescription2\tPattern2"
/// Note: FLTK automatically adds "All Files (*)" option, so we don't include it
pub fn document_filter() -> String {
    "Arc Files\t*.arc\nText Files\t*.txt".to_string()
}

/// Append the default extension when the chosen name carries no recognized one.
///
/// `notes` becomes `notes.arc`; `notes.txt` and `NOTES.ARC` are kept; an
/// unrelated extension like `notes.backup` still gets `.arc` appended so the
/// file is picked up by the open filter next time.
pub fn ensure_default_extension(path: PathBuf) -> PathBuf {
    let recognized = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            RECOGNIZED_EXTENSIONS
                .iter()
                .any(|r| r.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false);

    if recognized {
        path
    } else {
        let mut name = path.into_os_string();
        name.push(".");
        name.push(DEFAULT_EXTENSION);
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_default_extension() {
        assert_eq!(
            ensure_default_extension(PathBuf::from("/tmp/notes")),
            PathBuf::from("/tmp/notes.arc")
        );
    }

    #[test]
    fn test_keeps_recognized_extensions() {
        assert_eq!(
            ensure_default_extension(PathBuf::from("/tmp/notes.arc")),
            PathBuf::from("/tmp/notes.arc")
        );
        assert_eq!(
            ensure_default_extension(PathBuf::from("/tmp/notes.txt")),
            PathBuf::from("/tmp/notes.txt")
        );
        assert_eq!(
            ensure_default_extension(PathBuf::from("/tmp/NOTES.ARC")),
            PathBuf::from("/tmp/NOTES.ARC")
        );
    }

    #[test]
    fn test_unrecognized_extension_gets_suffix() {
        assert_eq!(
            ensure_default_extension(PathBuf::from("/tmp/notes.backup")),
            PathBuf::from("/tmp/notes.backup.arc")
        );
    }

    #[test]
    fn test_filter_format() {
        let filter = document_filter();
        assert!(filter.contains('\t'));
        assert!(filter.contains("*.arc"));
        assert!(filter.contains("*.txt"));
    }
}
