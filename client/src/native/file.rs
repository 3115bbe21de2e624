//! Image files read from the local filesystem.

use std::path::Path;

use async_trait::async_trait;

use crate::controller::ImageFile;
use crate::error::{UploadError, UploadResult};

/// A file loaded into memory, as a browser hands one to the page.
#[derive(Clone, Debug)]
pub struct LocalFile {
    name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

impl LocalFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read a file, guessing its media type from the extension.
    pub async fn open(path: &Path) -> UploadResult<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| UploadError::Read(format!("{}: {}", path.display(), e)))?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        log::debug!("Read {} ({} bytes)", path.display(), bytes.len());

        Ok(Self::new(name, mime_for_path(path), bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[async_trait(?Send)]
impl ImageFile for LocalFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    async fn read_bytes(&self) -> UploadResult<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}

/// Media type for an image path; `application/octet-stream` when unknown.
pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}
