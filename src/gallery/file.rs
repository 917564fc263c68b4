// SPDX-License-Identifier: MPL-2.0
//! Files picked by the user, read into memory before they enter the gallery.

use crate::error::{Error, Result};
use image_rs::ImageFormat;
use std::fmt;
use std::path::{Path, PathBuf};

/// What a record remembers about its file once the bytes have moved into
/// the display handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    /// Where the file was read from. `None` for in-memory sources.
    pub path: Option<PathBuf>,
    pub size_bytes: u64,
    /// Media type string such as `image/png`.
    pub mime_type: String,
}

impl FileInfo {
    /// Size as shown in the viewer, e.g. `2.00 KB`.
    #[must_use]
    pub fn size_label(&self) -> String {
        format_kilobytes(self.size_bytes)
    }
}

/// A file accepted by the picker, with its content loaded.
#[derive(Clone)]
pub struct SelectedFile {
    info: FileInfo,
    bytes: Vec<u8>,
}

impl SelectedFile {
    /// Builds a selected file from bytes that are already in memory.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            info: FileInfo {
                name: name.into(),
                path: None,
                size_bytes: bytes.len() as u64,
                mime_type: mime_type.into(),
            },
            bytes,
        }
    }

    /// Reads `path` and checks that it is an image the gallery can show.
    pub async fn load(path: PathBuf) -> Result<Self> {
        let name = file_name(&path)?;
        let bytes = tokio::fs::read(&path).await?;
        let mime_type =
            detect_mime_type(&path, &bytes).ok_or_else(|| Error::UnsupportedFile(name.clone()))?;

        Ok(Self {
            info: FileInfo {
                name,
                path: Some(path),
                size_bytes: bytes.len() as u64,
                mime_type: mime_type.to_string(),
            },
            bytes,
        })
    }

    pub fn info(&self) -> &FileInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn into_parts(self) -> (FileInfo, Vec<u8>) {
        (self.info, self.bytes)
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("info", &self.info)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Loads every path in order, skipping the ones that cannot be read or are
/// not images.
pub async fn load_all(paths: Vec<PathBuf>) -> Vec<SelectedFile> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let shown = path.display().to_string();
        match SelectedFile::load(path).await {
            Ok(file) => files.push(file),
            Err(err) => tracing::warn!(path = %shown, %err, "skipping file"),
        }
    }
    files
}

/// Media type from the extension, falling back to sniffing the content.
#[must_use]
pub fn detect_mime_type(path: &Path, bytes: &[u8]) -> Option<&'static str> {
    ImageFormat::from_path(path)
        .ok()
        .or_else(|| image_rs::guess_format(bytes).ok())
        .filter(|format| format.reading_enabled())
        .map(|format| format.to_mime_type())
}

/// Extensions offered by the file dialog filter.
#[must_use]
pub fn supported_extensions() -> Vec<&'static str> {
    ImageFormat::all()
        .filter(|format| format.reading_enabled())
        .flat_map(|format| format.extensions_str().iter().copied())
        .collect()
}

/// `bytes / 1024` with two decimals.
#[must_use]
pub fn format_kilobytes(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::Io(format!("not a file path: {}", path.display())))
}
