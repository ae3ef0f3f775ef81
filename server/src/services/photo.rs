//! Profile photo storage
//!
//! Validates and persists the single image uploaded with an employee
//! record. The stored name is generated (timestamp + random suffix, with
//! the original extension) so concurrent uploads cannot collide and the
//! original filename never becomes a filesystem path.

use std::path::PathBuf;

use chrono::Utc;
use rand::Rng;

use crate::utils::AppError;

/// Maximum accepted photo size (3 MiB)
pub const MAX_PHOTO_BYTES: usize = 3 * 1024 * 1024;

/// Accepted photo MIME types
const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Photo storage rooted at the configured upload directory
#[derive(Debug, Clone)]
pub struct PhotoStore {
    root: PathBuf,
}

/// A photo that has been written to disk
///
/// `public_path` is what gets persisted on the employee record and served
/// back under `/uploads/`. If record creation fails after the write,
/// [`StoredPhoto::discard`] removes the file so no orphan is left behind.
#[derive(Debug)]
pub struct StoredPhoto {
    pub public_path: String,
    pub original_name: String,
    disk_path: PathBuf,
}

impl StoredPhoto {
    /// Remove the stored file (record creation did not go through)
    pub async fn discard(self) {
        if let Err(e) = tokio::fs::remove_file(&self.disk_path).await {
            tracing::warn!(path = %self.disk_path.display(), error = %e, "Failed to remove orphaned photo");
        }
    }
}

impl PhotoStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Validate and persist one uploaded photo
    ///
    /// Either the file is fully written and its path returned, or nothing
    /// is left on disk.
    pub async fn store(
        &self,
        original_name: &str,
        content_type: Option<&str>,
        data: &[u8],
    ) -> Result<StoredPhoto, AppError> {
        let mime = content_type.unwrap_or_default().to_ascii_lowercase();
        if !ALLOWED_MIME_TYPES.contains(&mime.as_str()) {
            return Err(AppError::unsupported_media(
                "Only image files are allowed (jpeg, png, webp)",
            ));
        }

        if data.len() > MAX_PHOTO_BYTES {
            return Err(AppError::payload_too_large(format!(
                "Photo exceeds the maximum size of {} MiB",
                MAX_PHOTO_BYTES / 1024 / 1024
            )));
        }

        if data.is_empty() {
            return Err(AppError::validation("Empty file provided"));
        }

        let filename = Self::generate_filename(original_name);
        let disk_path = self.root.join(&filename);

        if let Err(e) = tokio::fs::write(&disk_path, data).await {
            // A short write must not leave a partial file referenced by anything
            let _ = tokio::fs::remove_file(&disk_path).await;
            return Err(AppError::internal(format!("Failed to save photo: {}", e)));
        }

        Ok(StoredPhoto {
            public_path: format!("/uploads/{}", filename),
            original_name: original_name.to_string(),
            disk_path,
        })
    }

    /// `<millisecond-timestamp>-<random integer><original extension>`
    fn generate_filename(original_name: &str) -> String {
        let ext = std::path::Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_ascii_lowercase()))
            .unwrap_or_default();

        let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
        format!("{}-{}{}", Utc::now().timestamp_millis(), suffix, ext)
    }
}
