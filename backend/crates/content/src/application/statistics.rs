//! Statistics Use Cases
//!
//! Site-wide counters computed on demand, plus the singleton visit
//! counter.

use std::sync::Arc;

use crate::domain::read_model::{BlogBrief, SiteTotals, UserBrief};
use crate::domain::repository::StatisticsRepository;
use crate::error::ContentResult;

/// Statistics use case
pub struct StatisticsUseCase<R>
where
    R: StatisticsRepository,
{
    repo: Arc<R>,
}

impl<R> StatisticsUseCase<R>
where
    R: StatisticsRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Count one site visit; returns the running total
    pub async fn add_visit(&self) -> ContentResult<i64> {
        self.repo.add_visit().await
    }

    /// Site totals for the admin dashboard
    pub async fn overview(&self) -> ContentResult<SiteTotals> {
        self.repo.overview().await
    }

    /// Dashboard lists: ten most recent users and blogs
    pub async fn latest_users_and_blogs(&self) -> ContentResult<(Vec<UserBrief>, Vec<BlogBrief>)> {
        let users = self.repo.latest_users(10).await?;
        let blogs = self.repo.latest_blogs(10).await?;

        Ok((users, blogs))
    }
}
