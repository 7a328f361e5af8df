use std::fs;
use std::path::Path;

use encoding_rs::WINDOWS_1252;

use super::error::{AppError, Result};

/// Bytes with no assignment in Windows-1252. The WHATWG decoder maps them to
/// C1 controls, but a text file containing them is binary garbage rather than
/// legacy-encoded text, so they fail the fallback attempt.
const UNASSIGNED_CP1252: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

#[derive(Debug)]
pub struct DecodedFile {
    pub content: String,
    /// True when the Windows-1252 fallback was needed; the caller should warn
    /// the user that fidelity may be reduced.
    pub used_fallback: bool,
}

/// Read a document, trying UTF-8 first and Windows-1252 second.
///
/// Returns an `Encoding` error when both attempts fail; IO failures come back
/// as `Io`. No partial content is ever returned.
pub fn read_text_file(path: &Path) -> Result<DecodedFile> {
    let bytes = fs::read(path)?;

    match String::from_utf8(bytes) {
        Ok(content) => Ok(DecodedFile {
            content,
            used_fallback: false,
        }),
        Err(err) => {
            let bytes = err.into_bytes();
            if bytes.iter().any(|b| UNASSIGNED_CP1252.contains(b)) {
                return Err(AppError::Encoding(
                    "the file is neither valid UTF-8 nor Windows-1252".to_string(),
                ));
            }
            let (content, _, _) = WINDOWS_1252.decode(&bytes);
            Ok(DecodedFile {
                content: content.into_owned(),
                used_fallback: true,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_bytes(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn test_utf8_file_reads_without_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bytes(&dir, "plain.arc", "héllo wörld".as_bytes());

        let decoded = read_text_file(&path).unwrap();
        assert_eq!(decoded.content, "héllo wörld");
        assert!(!decoded.used_fallback);
    }

    #[test]
    fn test_cp1252_file_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        // "café" with 0xE9, invalid as UTF-8
        let path = write_bytes(&dir, "legacy.arc", b"caf\xe9");

        let decoded = read_text_file(&path).unwrap();
        assert_eq!(decoded.content, "café");
        assert!(decoded.used_fallback);
    }

    #[test]
    fn test_cp1252_smart_quote() {
        let dir = tempfile::tempdir().unwrap();
        // 0x93/0x94 are curly quotes in Windows-1252
        let path = write_bytes(&dir, "quotes.arc", b"\x93ok\x94");

        let decoded = read_text_file(&path).unwrap();
        assert_eq!(decoded.content, "\u{201c}ok\u{201d}");
        assert!(decoded.used_fallback);
    }

    #[test]
    fn test_invalid_in_both_encodings_fails() {
        let dir = tempfile::tempdir().unwrap();
        // invalid UTF-8 and contains 0x90, unassigned in Windows-1252
        let path = write_bytes(&dir, "binary.arc", b"\xff\x90\x00");

        let err = read_text_file(&path).unwrap_err();
        assert!(matches!(err, AppError::Encoding(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text_file(&dir.path().join("absent.arc")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
