//! Slug Value Object
//!
//! URL-safe identifier derived from a blog's title. The slug is the
//! public lookup key for read/update routes and must track the title:
//! re-titling a blog re-slugs it.

use std::fmt;

/// Blog slug
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Derive the slug from a title: lowercase, alphanumeric runs joined
    /// by single hyphens, everything else dropped.
    pub fn from_title(title: &str) -> Self {
        let slug = title
            .to_lowercase()
            .chars()
            .map(|ch| match ch {
                'a'..='z' | '0'..='9' => ch,
                _ => '-',
            })
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-");

        Self(slug)
    }

    /// Create from database value (assumed already derived)
    pub fn from_db(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Get the slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_derivation() {
        assert_eq!(Slug::from_title("Hello World").as_str(), "hello-world");
        assert_eq!(Slug::from_title("Hello, World!").as_str(), "hello-world");
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(Slug::from_title("RUST Web Backend").as_str(), "rust-web-backend");
    }

    #[test]
    fn test_collapses_separator_runs() {
        assert_eq!(Slug::from_title("a  --  b").as_str(), "a-b");
        assert_eq!(Slug::from_title("  trimmed  ").as_str(), "trimmed");
    }

    #[test]
    fn test_keeps_digits() {
        assert_eq!(Slug::from_title("Top 10 Crates of 2025").as_str(), "top-10-crates-of-2025");
    }

    #[test]
    fn test_retitle_changes_slug() {
        let before = Slug::from_title("First Title");
        let after = Slug::from_title("Second Title");
        assert_ne!(before, after);
        assert_eq!(after.as_str(), "second-title");
    }
}
