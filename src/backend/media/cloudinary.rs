/**
 * Cloudinary Store
 *
 * Uploads through Cloudinary's unsigned upload endpoint:
 *
 * ```http
 * POST https://api.cloudinary.com/v1_1/<cloud>/image/upload
 * Content-Type: multipart/form-data
 *
 * file=<bytes>, upload_preset=<preset>, folder=<folder>
 * ```
 *
 * The response's `secure_url` is the stored image URL.
 */

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::media::{MediaStore, UploadedFile};
use crate::shared::CloudinaryConfig;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

const DEFAULT_API_BASE: &str = "https://api.cloudinary.com/v1_1";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

#[derive(Debug, Clone)]
pub struct CloudinaryStore {
    client: Client,
    api_base: String,
    config: CloudinaryConfig,
}

impl CloudinaryStore {
    pub fn new(config: CloudinaryConfig) -> Self {
        Self {
            client: Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            config,
        }
    }

    /// Point the store at another API root (used against local test servers)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn upload_url(&self) -> String {
        format!("{}/{}/image/upload", self.api_base, self.config.cloud_name)
    }
}

#[async_trait]
impl MediaStore for CloudinaryStore {
    async fn upload(&self, folder: &str, file: UploadedFile) -> BackendResult<String> {
        let size = file.bytes.len();
        let mut part = Part::bytes(file.bytes.to_vec()).file_name(file.file_name.clone());
        if let Some(content_type) = &file.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| BackendError::media(format!("invalid content type: {}", e)))?;
        }

        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.config.upload_preset.clone())
            .text("folder", folder.to_string());

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("[Media] Upload request failed: {}", e);
                BackendError::media(format!("network error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| status.to_string());
            tracing::error!("[Media] Upload rejected: {} - {}", status, error_text);
            return Err(BackendError::media(format!("store answered {}", status)));
        }

        let body: UploadResponse = response.json().await.map_err(|e| {
            tracing::error!("[Media] Failed to parse upload response: {}", e);
            BackendError::media(format!("unexpected response: {}", e))
        })?;

        tracing::info!("[Media] Stored {} ({} bytes) in {}", file.file_name, size, folder);
        Ok(body.secure_url)
    }
}
