/**
 * Multipart Form Reading
 *
 * Register and profile update take `multipart/form-data`: text fields plus
 * optional image files. The whole body is buffered (the router caps its
 * size), split into text fields and files, then handed to the handler.
 */

use std::collections::HashMap;
use axum::extract::Multipart;
use chrono::{DateTime, NaiveDate};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::media::UploadedFile;
use crate::backend::server::state::SharedMediaStore;

/// Text fields and files of one multipart body
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl FormData {
    /// Buffer every part of the request
    ///
    /// Parts with a file name are files; empty file parts (a form submitted
    /// with no file chosen) are dropped. Later parts with the same name
    /// replace earlier ones.
    pub async fn read(mut multipart: Multipart) -> BackendResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| BackendError::handler(e.status(), e.body_text()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| BackendError::handler(e.status(), e.body_text()))?;
                    if bytes.is_empty() {
                        continue;
                    }
                    form.files.insert(name, UploadedFile { file_name, content_type, bytes });
                }
                None => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| BackendError::handler(e.status(), e.body_text()))?;
                    form.fields.insert(name, text);
                }
            }
        }

        Ok(form)
    }

    pub fn insert_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Non-blank text field, trimmed
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }
}

/// Parse a birthday sent as `YYYY-MM-DD` or as a full RFC 3339 timestamp
pub fn parse_birthday(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|d| d.date_naive()))
}

/// Upload an optional image, returning its URL
///
/// With no media store configured the file is dropped and `None` returned.
pub async fn store_image(
    media: &SharedMediaStore,
    folder: &str,
    file: Option<UploadedFile>,
) -> BackendResult<Option<String>> {
    let Some(file) = file else {
        return Ok(None);
    };
    match media {
        Some(store) => store.upload(folder, file).await.map(Some),
        None => {
            tracing::warn!("[Media] No media store configured, ignoring upload {}", file.file_name);
            Ok(None)
        }
    }
}
