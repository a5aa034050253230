//! Filesystem image store.
//!
//! Saved canvas snapshots land as `img_<uuid>.png` (or `.jpg`) under one
//! data directory; placeholder records append to a JSONL log next to them.
//! Everything is plain synchronous filesystem work on small files.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use uuid::Uuid;

use easel_core::PlaceholderRecord;
use easel_renderer::DATA_URL_PREFIX;

/// Data URL prefix for JPEG payloads (the canvas export is normally PNG,
/// but a JPEG export is accepted too).
const JPEG_PREFIX: &str = "data:image/jpeg;base64,";

/// Filename prefix every stored image carries.
const IMAGE_PREFIX: &str = "img_";

/// The placeholder log filename.
const PLACEHOLDER_LOG: &str = "placeholders.jsonl";

/// Errors the image store can produce.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem access failed.
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not a recognized image data URL.
    #[error("invalid image data URL: {0}")]
    InvalidDataUrl(String),

    /// The filename is not one this store could have produced.
    #[error("invalid filename: {0}")]
    InvalidFilename(String),

    /// The named image does not exist.
    #[error("no such image: {0}")]
    NotFound(String),

    /// Serializing a placeholder record failed.
    #[error("placeholder serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A successfully stored image.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SavedImage {
    /// Stored filename, e.g. `img_3f2a....png`.
    pub filename: String,
    /// URL path the server serves the file under.
    pub url: String,
}

/// Filesystem-backed store for saved canvas images.
#[derive(Debug)]
pub struct ImageStore {
    data_dir: PathBuf,
}

impl ImageStore {
    /// Open a store over `data_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    /// The directory stored images live in.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Whether the backing directory is present and is a directory.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.data_dir.is_dir()
    }

    /// Decode a base64 image data URL and store it under a fresh name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidDataUrl`] for unrecognized payloads and
    /// [`StoreError::Io`] when the write fails.
    pub fn save_data_url(&self, data_url: &str) -> Result<SavedImage, StoreError> {
        let (payload, ext) = if let Some(rest) = data_url.strip_prefix(DATA_URL_PREFIX) {
            (rest, "png")
        } else if let Some(rest) = data_url.strip_prefix(JPEG_PREFIX) {
            (rest, "jpg")
        } else {
            return Err(StoreError::InvalidDataUrl(
                "expected a data:image/png or data:image/jpeg base64 URL".to_string(),
            ));
        };
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| StoreError::InvalidDataUrl(format!("bad base64 payload: {e}")))?;

        let filename = format!("{IMAGE_PREFIX}{}.{ext}", Uuid::new_v4().simple());
        fs::write(self.data_dir.join(&filename), bytes)?;
        tracing::info!("Saved image {}", filename);

        Ok(SavedImage {
            url: format!("/saved/{filename}"),
            filename,
        })
    }

    /// List stored image filenames, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be read.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut images = Vec::new();
        for entry in fs::read_dir(&self.data_dir)? {
            let entry = entry?;
            if let Ok(name) = entry.file_name().into_string() {
                if name.starts_with(IMAGE_PREFIX)
                    && (name.ends_with(".png") || name.ends_with(".jpg"))
                {
                    images.push(name);
                }
            }
        }
        images.sort();
        Ok(images)
    }

    /// Delete a stored image by filename.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidFilename`] for names that are not plain
    /// store basenames and [`StoreError::NotFound`] for missing files.
    pub fn delete(&self, filename: &str) -> Result<(), StoreError> {
        // Only plain basenames this store produced; no path traversal.
        if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
            return Err(StoreError::InvalidFilename(filename.to_string()));
        }
        if !filename.starts_with(IMAGE_PREFIX) {
            return Err(StoreError::InvalidFilename(filename.to_string()));
        }
        let path = self.data_dir.join(filename);
        if !path.is_file() {
            return Err(StoreError::NotFound(filename.to_string()));
        }
        fs::remove_file(path)?;
        tracing::info!("Deleted image {}", filename);
        Ok(())
    }

    /// Append one placeholder record to the JSONL log.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] or [`StoreError::Io`] when the
    /// record cannot be encoded or written.
    pub fn record_placeholder(&self, record: &PlaceholderRecord) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.data_dir.join(PLACEHOLDER_LOG))?;
        file.write_all(line.as_bytes())?;
        tracing::debug!("Recorded placeholder word {:?}", record.word);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, ImageStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ImageStore::new(dir.path()).expect("store");
        (dir, store)
    }

    fn png_data_url() -> String {
        let mut url = DATA_URL_PREFIX.to_string();
        STANDARD.encode_string(b"not-really-a-png", &mut url);
        url
    }

    #[test]
    fn save_writes_a_uniquely_named_png() {
        let (_dir, store) = store();
        let saved = store.save_data_url(&png_data_url()).expect("save");
        assert!(saved.filename.starts_with("img_"));
        assert!(saved.filename.ends_with(".png"));
        assert_eq!(saved.url, format!("/saved/{}", saved.filename));
        assert!(store.data_dir().join(&saved.filename).is_file());
    }

    #[test]
    fn jpeg_payloads_get_a_jpg_extension() {
        let (_dir, store) = store();
        let mut url = JPEG_PREFIX.to_string();
        STANDARD.encode_string(b"jpeg-bytes", &mut url);
        let saved = store.save_data_url(&url).expect("save");
        assert!(saved.filename.ends_with(".jpg"));
    }

    #[test]
    fn save_rejects_non_image_payloads() {
        let (_dir, store) = store();
        assert!(matches!(
            store.save_data_url("data:text/plain;base64,aGk="),
            Err(StoreError::InvalidDataUrl(_))
        ));
        let garbage = format!("{DATA_URL_PREFIX}@@not base64@@");
        assert!(matches!(
            store.save_data_url(&garbage),
            Err(StoreError::InvalidDataUrl(_))
        ));
    }

    #[test]
    fn list_returns_sorted_store_files_only() {
        let (_dir, store) = store();
        let a = store.save_data_url(&png_data_url()).expect("save a");
        let b = store.save_data_url(&png_data_url()).expect("save b");
        fs::write(store.data_dir().join("unrelated.txt"), b"x").expect("write");

        let mut expected = vec![a.filename, b.filename];
        expected.sort();
        assert_eq!(store.list().expect("list"), expected);
    }

    #[test]
    fn delete_removes_the_file() {
        let (_dir, store) = store();
        let saved = store.save_data_url(&png_data_url()).expect("save");
        store.delete(&saved.filename).expect("delete");
        assert!(store.list().expect("list").is_empty());
    }

    #[test]
    fn delete_rejects_traversal_and_foreign_names() {
        let (_dir, store) = store();
        assert!(matches!(
            store.delete("../etc/passwd"),
            Err(StoreError::InvalidFilename(_))
        ));
        assert!(matches!(
            store.delete("placeholders.jsonl"),
            Err(StoreError::InvalidFilename(_))
        ));
        assert!(matches!(
            store.delete("img_missing.png"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn placeholder_records_append_as_jsonl() {
        let (_dir, store) = store();
        for word in ["banana", "kazoo"] {
            store
                .record_placeholder(&PlaceholderRecord {
                    word: word.to_string(),
                    x: 450.0,
                    y: 260.0,
                    size: 60.0,
                })
                .expect("record");
        }
        let log = fs::read_to_string(store.data_dir().join(PLACEHOLDER_LOG)).expect("read");
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("banana"));
        assert!(lines[1].contains("kazoo"));
    }
}
