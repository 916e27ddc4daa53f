//! Banner Entity

use chrono::{DateTime, Utc};
use kernel::id::BannerId;

use crate::domain::value_object::image_ref::ImageRef;

/// Promotional banner, independent of blogs
#[derive(Debug, Clone)]
pub struct Banner {
    pub banner_id: BannerId,
    pub image: ImageRef,
    pub title: String,
    pub link: String,
    pub created_at: DateTime<Utc>,
}

impl Banner {
    pub fn new(title: impl Into<String>, link: impl Into<String>, image: ImageRef) -> Self {
        Self {
            banner_id: BannerId::new(),
            image,
            title: title.into(),
            link: link.into(),
            created_at: Utc::now(),
        }
    }
}

impl From<Banner> for crate::domain::read_model::BannerView {
    fn from(banner: Banner) -> Self {
        Self {
            banner_id: banner.banner_id.into_uuid(),
            image: crate::domain::read_model::ThumbnailView {
                url: banner.image.url,
                public_id: banner.image.public_id,
            },
            title: banner.title,
            link: banner.link,
        }
    }
}
