// SPDX-License-Identifier: MIT

//! `uploads` resource group: activity-file upload and status polling.

use crate::error::Result;
use crate::http::ApiClient;
use crate::models::Upload;
use reqwest::multipart::{Form, Part};

/// File formats accepted by the upload endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    Fit,
    FitGz,
    Tcx,
    TcxGz,
    Gpx,
    GpxGz,
}

impl UploadFormat {
    /// Wire value for the `data_type` field.
    pub const fn as_str(self) -> &'static str {
        match self {
            UploadFormat::Fit => "fit",
            UploadFormat::FitGz => "fit.gz",
            UploadFormat::Tcx => "tcx",
            UploadFormat::TcxGz => "tcx.gz",
            UploadFormat::Gpx => "gpx",
            UploadFormat::GpxGz => "gpx.gz",
        }
    }
}

/// Upload an activity file. Processing is asynchronous upstream; poll
/// [`status`] with the returned upload ID until `activity_id` or `error`
/// is set.
#[allow(clippy::too_many_arguments)]
pub async fn create(
    client: &ApiClient,
    file_name: &str,
    data: Vec<u8>,
    format: UploadFormat,
    name: Option<&str>,
    description: Option<&str>,
    external_id: Option<&str>,
) -> Result<Upload> {
    let mut form = Form::new()
        .part(
            "file",
            Part::bytes(data).file_name(file_name.to_string()),
        )
        .text("data_type", format.as_str());
    if let Some(name) = name {
        form = form.text("name", name.to_string());
    }
    if let Some(description) = description {
        form = form.text("description", description.to_string());
    }
    if let Some(external_id) = external_id {
        form = form.text("external_id", external_id.to_string());
    }

    client.post_multipart("/uploads", form).await
}

/// Get the processing state of an upload.
pub async fn status(client: &ApiClient, upload_id: u64) -> Result<Upload> {
    client.get(&format!("/uploads/{upload_id}"), &[]).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_format_wire_values() {
        assert_eq!(UploadFormat::Fit.as_str(), "fit");
        assert_eq!(UploadFormat::GpxGz.as_str(), "gpx.gz");
    }
}
