use std::sync::Arc;

use tracing::instrument;

use crate::{
    entities::social_post::SocialPostResponse,
    errors::AppError,
    repositories::social_post::{SocialPostFilter, SocialPostRepository},
};

/// Reads a `limit` query value. Negative numbers clamp to zero; anything that
/// is not an integer means no limit.
pub fn parse_limit(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .map(|limit| limit.max(0))
}

pub struct SocialPostHandler<R>
where
    R: SocialPostRepository + ?Sized,
{
    pub social_post_repo: Arc<R>,
}

impl<R> SocialPostHandler<R>
where
    R: SocialPostRepository + ?Sized,
{
    pub fn new(social_post_repo: Arc<R>) -> Self {
        SocialPostHandler { social_post_repo }
    }

    #[instrument(skip(self))]
    pub async fn list_social_posts(
        &self,
        platform: Option<String>,
        limit: Option<String>,
    ) -> Result<Vec<SocialPostResponse>, AppError> {
        let filter = SocialPostFilter {
            platform: platform.filter(|p| !p.is_empty()),
            limit: parse_limit(limit.as_deref()),
        };

        if filter.limit == Some(0) {
            return Ok(Vec::new());
        }

        let posts = self.social_post_repo.list_social_posts(&filter).await?;
        Ok(posts.into_iter().map(SocialPostResponse::from).collect())
    }
}
