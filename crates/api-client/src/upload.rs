//! Files sent through the multipart upload path

use crate::error::ApiResult;
use std::path::Path;

const FALLBACK_MIME: &str = "application/octet-stream";

/// An in-memory file ready to be sent as a multipart part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// File name reported to the backend
    pub file_name: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
    /// Content type of the part
    pub mime: String,
}

impl UploadFile {
    /// Wrap bytes already in memory, guessing the type from the name
    pub fn from_bytes(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let file_name = file_name.into();
        let mime = mime_for(&file_name).to_string();
        Self {
            file_name,
            bytes: bytes.into(),
            mime,
        }
    }

    /// Read a file from disk
    pub async fn from_path(path: impl AsRef<Path>) -> ApiResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self::from_bytes(file_name, bytes))
    }

    /// Override the guessed content type
    #[must_use]
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = mime.into();
        self
    }

    /// Size in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the file is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Content type for the image formats the backend accepts
fn mime_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        _ => FALLBACK_MIME,
    }
}
