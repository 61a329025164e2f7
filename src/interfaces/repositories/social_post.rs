use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::social_post::{NewSocialPost, SocialPost},
    errors::AppError,
    repositories::sqlx_repo::SqlxSocialPostRepo,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SocialPostFilter {
    /// Exact match on the stored platform key
    pub platform: Option<String>,
    /// Maximum number of rows, already clamped to zero or more
    pub limit: Option<i64>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SocialPostRepository: Send + Sync {
    /// Most recently posted first
    async fn list_social_posts(&self, filter: &SocialPostFilter) -> Result<Vec<SocialPost>, AppError>;
    async fn create_social_post(&self, post: &NewSocialPost) -> Result<SocialPost, AppError>;
    /// Full update; refreshes `fetched_at`
    async fn update_social_post(&self, id: &Uuid, post: &NewSocialPost) -> Result<SocialPost, AppError>;
    async fn delete_social_post(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxSocialPostRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxSocialPostRepo { pool }
    }
}

#[async_trait]
impl SocialPostRepository for SqlxSocialPostRepo {
    async fn list_social_posts(&self, filter: &SocialPostFilter) -> Result<Vec<SocialPost>, AppError> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT * FROM social_posts WHERE TRUE");

        if let Some(platform) = &filter.platform {
            builder.push(" AND platform = ").push_bind(platform.clone());
        }

        builder.push(" ORDER BY posted_at DESC");

        if let Some(limit) = filter.limit {
            builder.push(" LIMIT ").push_bind(limit.max(0));
        }

        let posts = builder
            .build_query_as::<SocialPost>()
            .fetch_all(&self.pool)
            .await?;

        Ok(posts)
    }

    async fn create_social_post(&self, post: &NewSocialPost) -> Result<SocialPost, AppError> {
        post.validate()?;

        let created = sqlx::query_as::<_, SocialPost>(
            r#"
            INSERT INTO social_posts (
                platform, content, url, posted_at, likes, comments, shares, image_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#
        )
        .bind(&post.platform)
        .bind(&post.content)
        .bind(&post.url)
        .bind(post.posted_at)
        .bind(post.likes)
        .bind(post.comments)
        .bind(post.shares)
        .bind(&post.image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_social_post(&self, id: &Uuid, post: &NewSocialPost) -> Result<SocialPost, AppError> {
        post.validate()?;

        sqlx::query_as::<_, SocialPost>(
            r#"
            UPDATE social_posts SET
                platform = $1,
                content = $2,
                url = $3,
                posted_at = $4,
                likes = $5,
                comments = $6,
                shares = $7,
                image_url = $8,
                fetched_at = NOW()
            WHERE id = $9
            RETURNING *
            "#
        )
        .bind(&post.platform)
        .bind(&post.content)
        .bind(&post.url)
        .bind(post.posted_at)
        .bind(post.likes)
        .bind(post.comments)
        .bind(post.shares)
        .bind(&post.image_url)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Social post not found".into()))
    }

    async fn delete_social_post(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM social_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Social post not found".into()));
        }

        Ok(())
    }
}
