//! Blog Entity

use chrono::{DateTime, Utc};
use kernel::id::{BlogId, UserId};

use crate::domain::value_object::{image_ref::ImageRef, slug::Slug};

/// Fields required to create a blog (thumbnail uploaded separately)
pub struct NewBlog {
    pub title: String,
    pub content: String,
    pub highlight: String,
    pub category: String,
}

/// Partial update; `None` (or empty, matching the API's lenient clients)
/// keeps the existing value
#[derive(Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub highlight: Option<String>,
    pub category: Option<String>,
}

/// Blog entity
#[derive(Debug, Clone)]
pub struct Blog {
    pub blog_id: BlogId,
    pub title: String,
    /// Rich text body
    pub content: String,
    /// Short summary shown in listings
    pub highlight: String,
    pub thumbnail: ImageRef,
    pub author_id: UserId,
    pub category: String,
    /// Unique URL key, derived from the title
    pub slug: Slug,
    /// Stored save counter, moved together with `saved_blogs` rows
    pub saves: i64,
    /// Stored view counter, incremented on every slug read
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new blog; the slug is computed from the title at save time
    pub fn new(data: NewBlog, author_id: UserId, thumbnail: ImageRef) -> Self {
        let now = Utc::now();
        let slug = Slug::from_title(&data.title);

        Self {
            blog_id: BlogId::new(),
            title: data.title,
            content: data.content,
            highlight: data.highlight,
            thumbnail,
            author_id,
            category: data.category,
            slug,
            saves: 0,
            views: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. A title change regenerates the slug.
    pub fn apply_patch(&mut self, patch: BlogPatch) {
        if let Some(title) = patch.title.filter(|t| !t.is_empty()) {
            self.slug = Slug::from_title(&title);
            self.title = title;
        }
        if let Some(content) = patch.content.filter(|c| !c.is_empty()) {
            self.content = content;
        }
        if let Some(highlight) = patch.highlight.filter(|h| !h.is_empty()) {
            self.highlight = highlight;
        }
        if let Some(category) = patch.category.filter(|c| !c.is_empty()) {
            self.category = category;
        }
        self.updated_at = Utc::now();
    }

    /// Replace the thumbnail with a fresh upload
    pub fn set_thumbnail(&mut self, thumbnail: ImageRef) {
        self.thumbnail = thumbnail;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::Id;

    fn test_blog() -> Blog {
        Blog::new(
            NewBlog {
                title: "My First Post".to_string(),
                content: "<p>Body</p>".to_string(),
                highlight: "A post".to_string(),
                category: "tech".to_string(),
            },
            Id::new(),
            ImageRef {
                url: "https://cdn.example.com/t.webp".to_string(),
                public_id: "blog/thumbnails/t".to_string(),
            },
        )
    }

    #[test]
    fn test_slug_derived_on_create() {
        let blog = test_blog();
        assert_eq!(blog.slug.as_str(), "my-first-post");
        assert_eq!(blog.views, 0);
        assert_eq!(blog.saves, 0);
    }

    #[test]
    fn test_patch_title_regenerates_slug() {
        let mut blog = test_blog();
        blog.apply_patch(BlogPatch {
            title: Some("A Better Title".to_string()),
            ..Default::default()
        });

        assert_eq!(blog.title, "A Better Title");
        assert_eq!(blog.slug.as_str(), "a-better-title");
    }

    #[test]
    fn test_patch_keeps_missing_fields() {
        let mut blog = test_blog();
        blog.apply_patch(BlogPatch {
            category: Some("life".to_string()),
            ..Default::default()
        });

        assert_eq!(blog.title, "My First Post");
        assert_eq!(blog.slug.as_str(), "my-first-post");
        assert_eq!(blog.category, "life");
    }

    #[test]
    fn test_patch_ignores_empty_strings() {
        let mut blog = test_blog();
        blog.apply_patch(BlogPatch {
            title: Some(String::new()),
            ..Default::default()
        });

        assert_eq!(blog.title, "My First Post");
    }
}
