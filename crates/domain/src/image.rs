//! Locally selected character images that have not been uploaded yet.

use std::fmt;

/// File name every uploaded character image is sent under.
pub const UPLOAD_FILE_NAME: &str = "character_image.png";

/// An image picked in the UI, held as-is until submit.
///
/// Browsers hand back either a `data:` URI (from a file reader) or raw bytes;
/// both are accepted and only decoded when the multipart payload is built.
#[derive(Clone, PartialEq, Eq)]
pub enum ImagePayload {
    /// `data:<mime>;base64,<payload>` or a plain `data:` URI
    DataUri(String),
    /// Raw file contents
    Bytes(Vec<u8>),
}

impl ImagePayload {
    pub fn data_uri(uri: impl Into<String>) -> Self {
        Self::DataUri(uri.into())
    }

    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }
}

impl fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Payloads can be megabytes; only show their size
        match self {
            Self::DataUri(uri) => write!(f, "ImagePayload::DataUri({} chars)", uri.len()),
            Self::Bytes(bytes) => write!(f, "ImagePayload::Bytes({} bytes)", bytes.len()),
        }
    }
}
