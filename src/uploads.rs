// src/uploads.rs - Client-side screening and progress tracking for image uploads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-file size ceiling enforced before anything touches the network.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// A file that passed screening and is ready to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Infers a content type from the file extension. Browser file pickers give
/// us names and bytes, not MIME types, so the extension is the signal.
pub fn guess_content_type(file_name: &str) -> Option<&'static str> {
    let extension = file_name.rsplit('.').next()?.to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "avif" => Some("image/avif"),
        "pdf" => Some("application/pdf"),
        "mp4" => Some("video/mp4"),
        "txt" => Some("text/plain"),
        _ => None,
    }
}

/// Screens a single file: the content type must be an image and the size
/// must not exceed [`MAX_UPLOAD_BYTES`]. Returns the content type on
/// success, a user-facing message on rejection.
pub fn validate_image_file(name: &str, size: u64) -> Result<&'static str, String> {
    let content_type = guess_content_type(name).unwrap_or("application/octet-stream");
    if !content_type.starts_with("image/") {
        return Err(format!("{} is not an image file", name));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(format!("{} is larger than 10MB", name));
    }
    Ok(content_type)
}

/// Result of screening a batch: rejected files never reach the network.
#[derive(Debug, Default)]
pub struct ScreenedBatch {
    pub accepted: Vec<UploadFile>,
    pub rejected: Vec<String>,
}

/// Screens a picked or dropped batch. Invalid files are excluded with a
/// message; the remaining valid files go on to upload.
pub fn screen_files(files: Vec<(String, Vec<u8>)>) -> ScreenedBatch {
    let mut batch = ScreenedBatch::default();
    for (name, bytes) in files {
        match validate_image_file(&name, bytes.len() as u64) {
            Ok(content_type) => batch.accepted.push(UploadFile {
                name,
                content_type: content_type.to_string(),
                bytes,
            }),
            Err(message) => batch.rejected.push(message),
        }
    }
    batch
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadStatus {
    Uploading,
    Completed,
    Error,
}

/// Transient progress entry for one file in an upload batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadProgress {
    /// Locally generated id: batch epoch millis plus position in the batch.
    pub id: String,
    pub file_name: String,
    pub progress: u8,
    pub status: UploadStatus,
}

impl UploadProgress {
    pub fn begin(batch_epoch_millis: i64, index: usize, file_name: impl Into<String>) -> Self {
        Self {
            id: format!("{}-{}", batch_epoch_millis, index),
            file_name: file_name.into(),
            progress: 0,
            status: UploadStatus::Uploading,
        }
    }

    pub fn complete(&mut self) {
        self.progress = 100;
        self.status = UploadStatus::Completed;
    }

    pub fn fail(&mut self) {
        self.status = UploadStatus::Error;
    }
}

/// Outcome counts of a settled batch. Partial success is an ordinary
/// outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn describe(&self) -> String {
        if self.failed == 0 {
            format!("Successfully uploaded {} image(s)", self.succeeded)
        } else {
            format!(
                "Successfully uploaded {} image(s), {} failed",
                self.succeeded, self.failed
            )
        }
    }
}

/// An entry in the session-local gallery of uploaded images. Not persisted
/// beyond the page session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: String,
    pub name: String,
    pub url: String,
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
}

/// Human-readable file size, e.g. `2.5 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;
    if (rounded - rounded.trunc()).abs() < f64::EPSILON {
        format!("{} {}", rounded.trunc() as u64, UNITS[exponent])
    } else {
        format!("{} {}", rounded, UNITS[exponent])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screening_excludes_only_invalid_files() {
        let files = vec![
            ("front.jpg".to_string(), vec![0u8; 128]),
            ("spec-sheet.pdf".to_string(), vec![0u8; 128]),
            ("side.png".to_string(), vec![0u8; 256]),
            ("huge.webp".to_string(), vec![0u8; (MAX_UPLOAD_BYTES + 1) as usize]),
        ];

        let batch = screen_files(files);
        // K = 4, M = 2 rejected; exactly K - M files may reach the network.
        assert_eq!(batch.accepted.len(), 2);
        assert_eq!(batch.rejected.len(), 2);
        assert!(batch.rejected[0].contains("not an image"));
        assert!(batch.rejected[1].contains("larger than 10MB"));
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        assert!(validate_image_file("edge.png", MAX_UPLOAD_BYTES).is_ok());
        assert!(validate_image_file("edge.png", MAX_UPLOAD_BYTES + 1).is_err());
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        assert!(validate_image_file("archive.zip", 10).is_err());
        assert!(validate_image_file("noextension", 10).is_err());
    }

    #[test]
    fn test_content_type_guessing() {
        assert_eq!(guess_content_type("photo.JPG"), Some("image/jpeg"));
        assert_eq!(guess_content_type("photo.webp"), Some("image/webp"));
        assert_eq!(guess_content_type("clip.mp4"), Some("video/mp4"));
        assert_eq!(guess_content_type("mystery.xyz"), None);
    }

    #[test]
    fn test_progress_lifecycle() {
        let mut entry = UploadProgress::begin(1757650000123, 2, "front.jpg");
        assert_eq!(entry.id, "1757650000123-2");
        assert_eq!(entry.status, UploadStatus::Uploading);
        assert_eq!(entry.progress, 0);

        entry.complete();
        assert_eq!(entry.status, UploadStatus::Completed);
        assert_eq!(entry.progress, 100);

        let mut failing = UploadProgress::begin(1757650000123, 3, "side.jpg");
        failing.fail();
        assert_eq!(failing.status, UploadStatus::Error);
    }

    #[test]
    fn test_batch_summary_message() {
        let clean = BatchSummary {
            succeeded: 3,
            failed: 0,
        };
        assert_eq!(clean.describe(), "Successfully uploaded 3 image(s)");

        let mixed = BatchSummary {
            succeeded: 2,
            failed: 1,
        };
        assert_eq!(
            mixed.describe(),
            "Successfully uploaded 2 image(s), 1 failed"
        );
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(2_621_440), "2.5 MB");
    }
}
