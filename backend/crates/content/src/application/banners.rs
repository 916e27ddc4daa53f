//! Banner Use Cases

use std::sync::Arc;

use kernel::id::BannerId;
use platform::images::ImageStore;

use crate::domain::entity::banner::Banner;
use crate::domain::read_model::BannerView;
use crate::domain::repository::BannerRepository;
use crate::error::{ContentError, ContentResult};

const BANNER_FOLDER: &str = "blog/banners";

/// Create-banner input; `image` is a base64 data-URL
pub struct NewBannerInput {
    pub title: String,
    pub link: String,
    pub image: String,
}

/// The two promotional slots: a random pair and a random single
pub struct RandomBanners {
    pub two: Vec<BannerView>,
    pub one: BannerView,
}

/// Banner use case
pub struct BannerUseCase<R, S>
where
    R: BannerRepository,
    S: ImageStore,
{
    repo: Arc<R>,
    images: Arc<S>,
}

impl<R, S> BannerUseCase<R, S>
where
    R: BannerRepository,
    S: ImageStore + Sync,
{
    pub fn new(repo: Arc<R>, images: Arc<S>) -> Self {
        Self { repo, images }
    }

    /// Create a banner; the image upload happens before the insert
    pub async fn create(&self, input: NewBannerInput) -> ContentResult<Banner> {
        if input.image.is_empty() {
            return Err(ContentError::Validation("Image is required".to_string()));
        }

        let asset = self.images.upload(&input.image, BANNER_FOLDER).await?;

        let banner = Banner::new(input.title, input.link, asset.into());
        self.repo.create(&banner).await?;

        tracing::info!(banner_id = %banner.banner_id, "Banner created");

        Ok(banner)
    }

    /// Delete a banner and its hosted image. A failed image deletion is
    /// logged and the row still goes away.
    pub async fn delete(&self, banner_id: &BannerId) -> ContentResult<()> {
        let banner = self
            .repo
            .find_by_id(banner_id)
            .await?
            .ok_or(ContentError::BannerNotFound)?;

        if let Err(e) = self.images.delete(&banner.image.public_id).await {
            tracing::warn!(
                error = %e,
                public_id = %banner.image.public_id,
                "Failed to delete banner image"
            );
        }

        self.repo.delete(banner_id).await?;

        tracing::info!(banner_id = %banner_id, "Banner deleted");

        Ok(())
    }

    /// All banners
    pub async fn list(&self) -> ContentResult<Vec<BannerView>> {
        self.repo.list().await
    }

    /// Random promotional slots; `BannerNotFound` when none exist
    pub async fn random(&self) -> ContentResult<RandomBanners> {
        let two = self.repo.random(2).await?;
        let one = self
            .repo
            .random(1)
            .await?
            .into_iter()
            .next()
            .ok_or(ContentError::BannerNotFound)?;

        Ok(RandomBanners { two, one })
    }
}
