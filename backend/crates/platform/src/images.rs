//! Image Store Client
//!
//! Client for the external image-hosting service. Uploads take a base64
//! data-URL payload and return the hosted URL plus the `public_id` used
//! for later deletion.

use serde::Deserialize;

/// A hosted image reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub url: String,
    pub public_id: String,
}

/// Error when talking to the image store
#[derive(Debug, thiserror::Error)]
pub enum ImageStoreError {
    /// The store rejected the payload (bad image data, quota, ...)
    #[error("Image store rejected the request: {0}")]
    Rejected(String),

    /// Transport-level failure
    #[error("Image store request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Image store interface
///
/// `upload` must complete before any database row referencing the image
/// is written; callers abort on failure.
#[trait_variant::make(ImageStore: Send)]
pub trait LocalImageStore {
    /// Upload a base64 data-URL image into the given folder
    async fn upload(&self, file: &str, folder: &str) -> Result<ImageAsset, ImageStoreError>;

    /// Delete a previously uploaded image by its public id
    async fn delete(&self, public_id: &str) -> Result<(), ImageStoreError>;
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

/// HTTP-backed image store
#[derive(Clone)]
pub struct HttpImageStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpImageStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

impl ImageStore for HttpImageStore {
    async fn upload(&self, file: &str, folder: &str) -> Result<ImageAsset, ImageStoreError> {
        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({ "file": file, "folder": folder }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(ImageStoreError::Rejected(format!("{status}: {detail}")));
        }

        let uploaded: UploadResponse = response.json().await?;

        Ok(ImageAsset {
            url: uploaded.secure_url,
            public_id: uploaded.public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<(), ImageStoreError> {
        let response = self
            .client
            .post(format!("{}/destroy", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({ "public_id": public_id }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(ImageStoreError::Rejected(status.to_string()));
        }

        Ok(())
    }
}
