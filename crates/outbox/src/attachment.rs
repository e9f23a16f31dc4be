//! Attachment descriptors.

use crate::detect::ContentTypeDetector;
use crate::encoding::{decode_base64, encode_base64};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A file attached to an outbound message.
///
/// `content` always holds base64 text. Serializes as
/// `{"Name": ..., "Content": ..., "ContentType": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Attachment {
    /// File name shown to the recipient.
    pub name: String,
    /// Base64-encoded file content.
    pub content: String,
    /// Content type string, passed through from the detector.
    pub content_type: String,
}

impl Attachment {
    /// Creates an attachment from already-encoded content.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            content_type: content_type.into(),
        }
    }

    /// Creates an attachment from raw bytes, encoding them as base64.
    #[must_use]
    pub fn from_bytes(
        name: impl Into<String>,
        bytes: &[u8],
        content_type: impl Into<String>,
    ) -> Self {
        Self::new(name, encode_base64(bytes), content_type)
    }

    /// Reads a file and builds an attachment from it.
    ///
    /// The name is the final component of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>, detector: &dyn ContentTypeDetector) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read attachment");
        })?;

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content_type = detector.detect(path, &bytes);

        tracing::debug!(%name, size = bytes.len(), %content_type, "Loaded attachment");

        Ok(Self::from_bytes(name, &bytes, content_type))
    }

    /// Decodes the base64 content back into bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid base64.
    pub fn decoded_content(&self) -> Result<Vec<u8>> {
        decode_base64(&self.content)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::detect::GuessDetector;
    use crate::error::Error;
    use std::io::Write;

    #[test]
    fn test_from_bytes_encodes() {
        let attachment = Attachment::from_bytes("hello.txt", b"Hello, World!", "text/plain");
        assert_eq!(attachment.name, "hello.txt");
        assert_eq!(attachment.content, "SGVsbG8sIFdvcmxkIQ==");
        assert_eq!(attachment.content_type, "text/plain");
        assert_eq!(attachment.decoded_content().unwrap(), b"Hello, World!");
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"line one\n")
            .unwrap();

        let attachment = Attachment::from_path(&path, &GuessDetector).unwrap();
        assert_eq!(attachment.name, "notes.txt");
        assert_eq!(attachment.content_type, "text/plain");
        assert_eq!(attachment.decoded_content().unwrap(), b"line one\n");
    }

    #[test]
    fn test_from_path_passes_detector_output_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, [0u8, 1, 2]).unwrap();

        let detector = |_: &Path, _: &[u8]| "[application/octet-stream, text/plain]".to_string();
        let attachment = Attachment::from_path(&path, &detector).unwrap();
        assert_eq!(attachment.content_type, "[application/octet-stream, text/plain]");
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Attachment::from_path(dir.path().join("missing.pdf"), &GuessDetector);

        match result {
            Err(Error::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected I/O error, got {other:?}"),
        }
    }

    #[test]
    fn test_decoded_content_invalid() {
        let attachment = Attachment::new("x", "%%%", "text/plain");
        assert!(matches!(attachment.decoded_content(), Err(Error::Base64Decode(_))));
    }

    #[test]
    fn test_wire_keys() {
        let attachment = Attachment::new("a.txt", "YQ==", "text/plain");
        let json = serde_json::to_string(&attachment).unwrap();
        assert_eq!(json, r#"{"Name":"a.txt","Content":"YQ==","ContentType":"text/plain"}"#);
    }
}
