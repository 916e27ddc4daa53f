//! Picture Value Object
//!
//! A user's avatar. Pictures arrive from the identity provider as a plain
//! URL (no `public_id`); once a user uploads a custom picture it becomes
//! store-managed and carries the `public_id` needed for deletion.

use platform::images::ImageAsset;
use serde::{Deserialize, Serialize};

/// User picture reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub url: String,
    pub public_id: Option<String>,
}

impl Picture {
    /// Picture hosted elsewhere (identity provider avatar)
    pub fn external(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            public_id: None,
        }
    }

    /// Picture uploaded to our image store
    pub fn from_asset(asset: ImageAsset) -> Self {
        Self {
            url: asset.url,
            public_id: Some(asset.public_id),
        }
    }

    /// Whether this picture lives in our image store
    pub fn is_store_managed(&self) -> bool {
        self.public_id.is_some()
    }
}
