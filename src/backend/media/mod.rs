//! Media Storage Module
//!
//! Binary object store used for profile and banner images. A store accepts
//! raw bytes and answers with a public URL; nothing else in the server
//! depends on where the bytes end up.
//!
//! # Module Structure
//!
//! ```text
//! media/
//! ├── mod.rs         - MediaStore trait and upload folders
//! └── cloudinary.rs  - Cloudinary unsigned-upload implementation
//! ```

/// Cloudinary upload client
pub mod cloudinary;

use crate::backend::error::BackendResult;
use async_trait::async_trait;
use bytes::Bytes;

/// Folder for profile pictures
pub const PROFILE_FOLDER: &str = "hth/profile";

/// Folder for profile banners
pub const BANNER_FOLDER: &str = "hth/banner";

/// A file received in a multipart form
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Binary object store
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Store `file` under `folder` and return its public URL
    async fn upload(&self, folder: &str, file: UploadedFile) -> BackendResult<String>;
}

pub use cloudinary::CloudinaryStore;
