//! Upload Rules
//!
//! Slot naming, the three-file limit, and upload reply interpretation.

use crate::api::ApiError;
use crate::models::{UploadResponse, UploadedFile};

/// Files accepted per upload
pub const MAX_FILES: usize = 3;

pub const SUCCESS_MESSAGE: &str = "Files uploaded successfully!";
pub const NOTHING_SELECTED: &str = "Please select at least one file to upload";
const UPLOAD_FAILED: &str = "File upload failed";

/// Multipart field for a zero-based slot: `file_1`, `file_2`, ...
pub fn field_name(slot: usize) -> String {
    format!("file_{}", slot + 1)
}

/// Keep the first `MAX_FILES`, numbered by position
pub fn take_slots<T>(files: impl IntoIterator<Item = T>) -> Vec<(usize, T)> {
    files.into_iter().take(MAX_FILES).enumerate().collect()
}

/// Only the filled slots of a fixed slot array, keeping their indices
pub fn filled_slots<T: Clone>(slots: &[Option<T>]) -> Vec<(usize, T)> {
    slots
        .iter()
        .take(MAX_FILES)
        .enumerate()
        .filter_map(|(i, f)| f.clone().map(|f| (i, f)))
        .collect()
}

/// A 2xx reply still has to say `status: "success"`
pub fn check_response(response: &UploadResponse) -> Result<(), String> {
    if response.status.as_deref() == Some("success") {
        Ok(())
    } else {
        Err(response.message.clone().unwrap_or_else(|| UPLOAD_FAILED.to_string()))
    }
}

/// User-facing text for a failed upload request
pub fn error_message(err: &ApiError) -> String {
    match err {
        ApiError::Http { .. } => err.payload_message().unwrap_or(UPLOAD_FAILED).to_string(),
        other => other.to_string(),
    }
}

/// Toast verdict for the slot upload form, which reports failures
/// without the backend's own message
pub fn slot_upload_outcome(result: &Result<UploadResponse, ApiError>) -> Result<(), &'static str> {
    match result {
        Ok(reply) if check_response(reply).is_ok() => Ok(()),
        Err(err) if err.is_network() => Err("Error uploading files"),
        _ => Err("Failed to upload files"),
    }
}

/// Toast text for a failed uploaded-file listing
pub fn fetch_files_error(err: &ApiError) -> &'static str {
    if err.is_network() {
        "Error fetching files"
    } else {
        "Failed to fetch files"
    }
}

impl UploadedFile {
    /// Last path segment of the download URL
    pub fn display_name(&self) -> &str {
        self.file.rsplit('/').next().unwrap_or(&self.file)
    }

    /// Size in KiB with two decimals
    pub fn size_label(&self) -> String {
        format!("{:.2} KB", self.size as f64 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_names() {
        assert_eq!(field_name(0), "file_1");
        assert_eq!(field_name(2), "file_3");
    }

    #[test]
    fn test_take_slots_limits_to_three() {
        let slots = take_slots(["a", "b", "c", "d"]);
        assert_eq!(slots, vec![(0, "a"), (1, "b"), (2, "c")]);
    }

    #[test]
    fn test_filled_slots_keep_position() {
        let slots = [None, Some("report.pdf"), None];
        assert_eq!(filled_slots(&slots), vec![(1, "report.pdf")]);
        assert!(filled_slots::<&str>(&[None, None, None]).is_empty());
    }

    #[test]
    fn test_check_response() {
        let ok = UploadResponse { status: Some("success".into()), message: None };
        assert_eq!(check_response(&ok), Ok(()));

        let refused = UploadResponse { status: Some("error".into()), message: Some("Too large".into()) };
        assert_eq!(check_response(&refused), Err("Too large".to_string()));

        assert_eq!(check_response(&UploadResponse::default()), Err("File upload failed".to_string()));
    }

    #[test]
    fn test_error_message() {
        let with_message = ApiError::Http { status: 400, message: "Request failed".into(), payload: Some(json!({"message": "Unsupported type"})) };
        assert_eq!(error_message(&with_message), "Unsupported type");

        let bare = ApiError::Http { status: 413, message: "Payload Too Large".into(), payload: None };
        assert_eq!(error_message(&bare), "File upload failed");

        assert_eq!(error_message(&ApiError::Network("Failed to fetch".into())), "Failed to fetch");
    }

    #[test]
    fn test_slot_upload_outcome() {
        let ok = Ok(UploadResponse { status: Some("success".into()), message: None });
        assert_eq!(slot_upload_outcome(&ok), Ok(()));

        let refused = Ok(UploadResponse { status: Some("error".into()), message: Some("Too large".into()) });
        assert_eq!(slot_upload_outcome(&refused), Err("Failed to upload files"));

        let rejected = Err(ApiError::Http { status: 400, message: "Request failed".into(), payload: None });
        assert_eq!(slot_upload_outcome(&rejected), Err("Failed to upload files"));

        let offline = Err(ApiError::Network("Failed to fetch".into()));
        assert_eq!(slot_upload_outcome(&offline), Err("Error uploading files"));
    }

    #[test]
    fn test_fetch_files_error() {
        assert_eq!(fetch_files_error(&ApiError::Network("offline".into())), "Error fetching files");
        assert_eq!(fetch_files_error(&ApiError::ServerError { status: 500 }), "Failed to fetch files");
    }

    #[test]
    fn test_uploaded_file_labels() {
        let file = UploadedFile { id: Some(1), file: "http://127.0.0.1:8000/media/shared/plan.pdf".into(), size: 2048 };
        assert_eq!(file.display_name(), "plan.pdf");
        assert_eq!(file.size_label(), "2.00 KB");
    }
}
