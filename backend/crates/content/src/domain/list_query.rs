//! Blog Listing Query
//!
//! Normalized search/filter/sort/pagination parameters for `list_blogs`.

/// Sort key for blog listings.
///
/// `LikesCount` and `CommentsCount` sort on the derived aggregates, not
/// stored columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    CreatedAt,
    LikesCount,
    CommentsCount,
    Views,
    Saves,
}

impl SortKey {
    /// Parse the `sortBy` query parameter; unknown keys fall back to
    /// `createdAt` rather than failing the request.
    pub fn from_param(param: &str) -> Self {
        match param {
            "likesCount" => SortKey::LikesCount,
            "commentsCount" => SortKey::CommentsCount,
            "views" => SortKey::Views,
            "saves" => SortKey::Saves,
            _ => SortKey::CreatedAt,
        }
    }

    /// SQL expression this key sorts on (column or derived aggregate alias)
    pub fn sql_expr(&self) -> &'static str {
        match self {
            SortKey::CreatedAt => "b.created_at",
            SortKey::LikesCount => "likes_count",
            SortKey::CommentsCount => "comments_count",
            SortKey::Views => "b.views",
            SortKey::Saves => "b.saves",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn from_param(param: &str) -> Self {
        match param {
            "asc" => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    pub fn sql_keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

/// Normalized listing query
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Case-insensitive substring match over title/highlight/author name
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: SortKey,
    pub order: SortOrder,
    pub page: i64,
    pub limit: i64,
}

impl ListQuery {
    /// Build from raw query parameters, applying defaults and bounds
    pub fn from_params(
        search: Option<String>,
        category: Option<String>,
        sort_by: Option<String>,
        order: Option<String>,
        page: Option<String>,
        limit: Option<String>,
    ) -> Self {
        let page = page
            .and_then(|p| p.parse().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(DEFAULT_PAGE);
        let limit = limit
            .and_then(|l| l.parse().ok())
            .filter(|l| *l >= 1)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);

        Self {
            search: search.filter(|s| !s.is_empty()),
            category: category.filter(|c| !c.is_empty()),
            sort: sort_by.map(|s| SortKey::from_param(&s)).unwrap_or_default(),
            order: order.map(|o| SortOrder::from_param(&o)).unwrap_or_default(),
            page,
            limit,
        }
    }

    /// Rows to skip for the current page
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    /// Pages needed for `total` matching rows
    pub fn total_pages(&self, total: i64) -> i64 {
        (total + self.limit - 1) / self.limit
    }
}
