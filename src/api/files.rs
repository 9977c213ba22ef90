//! File Endpoints
//!
//! Multipart uploads and the uploaded-file listing.

use crate::models::{UploadResponse, UploadedFile};
use crate::upload;
use super::{get_list, post_multipart, ApiError};

pub async fn list_uploaded_files() -> Result<Vec<UploadedFile>, ApiError> {
    get_list("/api/files/").await
}

/// Upload `(slot, file)` pairs as `file_{slot + 1}` fields.
///
/// A 2xx reply whose `status` is not `success` comes back as `Ok` with the
/// decoded body; `upload::check_response` decides what it means.
pub async fn upload_files(files: &[(usize, web_sys::File)]) -> Result<UploadResponse, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
    for (slot, file) in files {
        form.append_with_blob_and_filename(&upload::field_name(*slot), file, &file.name())
            .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
    }
    post_multipart("/api/upload-files/", form).await?.decode()
}
