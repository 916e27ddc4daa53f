//! Image Reference Value Object
//!
//! A store-managed image owned by a blog (thumbnail) or banner.

use platform::images::ImageAsset;

/// Hosted image owned by its parent document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
    pub public_id: String,
}

impl From<ImageAsset> for ImageRef {
    fn from(asset: ImageAsset) -> Self {
        Self {
            url: asset.url,
            public_id: asset.public_id,
        }
    }
}
