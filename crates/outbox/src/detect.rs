//! Attachment content-type detection.

use std::path::Path;

/// Fallback when no candidate type is known.
const OCTET_STREAM: &str = "application/octet-stream";

/// Determines the content type string stored on an attachment.
///
/// The returned string is stored as-is. Detectors that find several
/// candidate types may return them all in one string; callers never
/// narrow it down to a single type.
pub trait ContentTypeDetector {
    /// Returns the content type for a file read from `path`.
    fn detect(&self, path: &Path, content: &[u8]) -> String;
}

impl<F> ContentTypeDetector for F
where
    F: Fn(&Path, &[u8]) -> String,
{
    fn detect(&self, path: &Path, content: &[u8]) -> String {
        self(path, content)
    }
}

/// Default detector: sniffs magic bytes, then falls back to the extension.
///
/// A signature match in the content wins over the file name. Without one,
/// every candidate known for the extension is listed, joined with `", "`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuessDetector;

impl ContentTypeDetector for GuessDetector {
    fn detect(&self, path: &Path, content: &[u8]) -> String {
        if let Some(kind) = infer::get(content) {
            return kind.mime_type().to_string();
        }

        let candidates: Vec<String> = mime_guess::from_path(path)
            .iter()
            .map(|mime| mime.to_string())
            .collect();

        if candidates.is_empty() {
            OCTET_STREAM.to_string()
        } else {
            candidates.join(", ")
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_known_extension() {
        assert_eq!(GuessDetector.detect(Path::new("report.pdf"), b""), "application/pdf");
        assert_eq!(GuessDetector.detect(Path::new("photo.PNG"), b""), "image/png");
    }

    #[test]
    fn test_guess_unknown_extension() {
        assert_eq!(GuessDetector.detect(Path::new("blob.zzzz"), b""), OCTET_STREAM);
        assert_eq!(GuessDetector.detect(Path::new("README"), b""), OCTET_STREAM);
    }

    #[test]
    fn test_guess_keeps_all_candidates() {
        let detected = GuessDetector.detect(Path::new("page.xml"), b"");
        let count = mime_guess::from_ext("xml").count();
        assert_eq!(detected.split(", ").count(), count);
        assert!(detected.contains("xml"));
    }

    #[test]
    fn test_sniff_extensionless_png() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];
        assert_eq!(GuessDetector.detect(Path::new("logo"), &png), "image/png");
    }

    #[test]
    fn test_sniff_overrides_extension() {
        let detected = GuessDetector.detect(Path::new("report.txt"), b"%PDF-1.4\n%...");
        assert_eq!(detected, "application/pdf");
    }

    #[test]
    fn test_plain_text_falls_back_to_extension() {
        assert_eq!(GuessDetector.detect(Path::new("notes.txt"), b"hello\n"), "text/plain");
    }

    #[test]
    fn test_closure_detector() {
        let detector = |path: &Path, content: &[u8]| {
            format!("{}; {}", path.display(), content.len())
        };
        assert_eq!(detector.detect(Path::new("a.bin"), b"abc"), "a.bin; 3");
    }
}
