use async_trait::async_trait;
use uuid::Uuid;
use validator::Validate;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    entities::blog_post::{BlogPost, BlogPostInsert, BlogPostListResponse},
    errors::AppError,
    repositories::sqlx_repo::SqlxBlogPostRepo,
};

/// Narrowing applied on top of the published-only listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPostFilter {
    /// Case-insensitive exact match
    pub category: Option<String>,
    pub featured_only: bool,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogPostRepository: Sync + Send {
    /// Published posts, newest first, each with its approved-comment count
    async fn list_published_blog_posts(&self, filter: &BlogPostFilter) -> Result<Vec<BlogPostListResponse>, AppError>;
    /// Adds one view to a published post in a single statement and returns the updated row
    async fn increment_views_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError>;
    async fn list_published_categories(&self) -> Result<Vec<String>, AppError>;
    async fn get_blog_post_by_id(&self, id: &Uuid) -> Result<BlogPost, AppError>;
    async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<BlogPost, AppError>;
    async fn update_blog_post(&self, id: &Uuid, post: &BlogPostInsert) -> Result<BlogPost, AppError>;
    /// Also removes the post's comments
    async fn delete_blog_post(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxBlogPostRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxBlogPostRepo { pool }
    }
}

#[async_trait]
impl BlogPostRepository for SqlxBlogPostRepo {
    async fn list_published_blog_posts(&self, filter: &BlogPostFilter) -> Result<Vec<BlogPostListResponse>, AppError> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            r#"
            SELECT
                b.id, b.title, b.slug, b.author, b.excerpt, b.featured_image,
                b.category, b.tags, b.views, b.reading_time, b.created_at,
                b.updated_at, b.featured,
                (SELECT COUNT(*) FROM comments c WHERE c.post_id = b.id AND c.approved = TRUE) AS comments_count
            FROM blog_posts b
            WHERE b.published = TRUE
            "#
        );

        if let Some(category) = &filter.category {
            builder.push(" AND LOWER(b.category) = LOWER(").push_bind(category.clone()).push(")");
        }

        if filter.featured_only {
            builder.push(" AND b.featured = TRUE");
        }

        builder.push(" ORDER BY b.created_at DESC");

        let posts = builder
            .build_query_as::<BlogPostListResponse>()
            .fetch_all(&self.pool)
            .await?;

        Ok(posts)
    }

    async fn increment_views_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, AppError> {
        let post = sqlx::query_as::<_, BlogPost>(
            r#"
            UPDATE blog_posts
            SET views = views + 1
            WHERE slug = $1 AND published = TRUE
            RETURNING *
            "#
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn list_published_categories(&self) -> Result<Vec<String>, AppError> {
        let categories = sqlx::query_scalar::<_, String>(
            r#"SELECT DISTINCT category FROM blog_posts WHERE published = TRUE ORDER BY category"#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn get_blog_post_by_id(&self, id: &Uuid) -> Result<BlogPost, AppError> {
        sqlx::query_as::<_, BlogPost>(r#"SELECT * FROM blog_posts WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog post not found".into()))
    }

    async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<BlogPost, AppError> {
        post.validate()?;

        let created = sqlx::query_as::<_, BlogPost>(
            r#"
            INSERT INTO blog_posts (
                title, slug, author, excerpt, content, featured_image,
                category, tags, published, featured, reading_time
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.author)
        .bind(&post.excerpt)
        .bind(&post.content)
        .bind(&post.featured_image)
        .bind(&post.category)
        .bind(&post.tags)
        .bind(post.published)
        .bind(post.featured)
        .bind(post.reading_time)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_blog_post(&self, id: &Uuid, post: &BlogPostInsert) -> Result<BlogPost, AppError> {
        post.validate()?;

        // views is owned by the read path and never overwritten here
        sqlx::query_as::<_, BlogPost>(
            r#"
            UPDATE blog_posts SET
                title = $1,
                slug = $2,
                author = $3,
                excerpt = $4,
                content = $5,
                featured_image = $6,
                category = $7,
                tags = $8,
                published = $9,
                featured = $10,
                reading_time = $11,
                updated_at = NOW()
            WHERE id = $12
            RETURNING *
            "#
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.author)
        .bind(&post.excerpt)
        .bind(&post.content)
        .bind(&post.featured_image)
        .bind(&post.category)
        .bind(&post.tags)
        .bind(post.published)
        .bind(post.featured)
        .bind(post.reading_time)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog post not found".into()))
    }

    async fn delete_blog_post(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM blog_posts
            WHERE id = $1
            "#
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Blog post not found".into()));
        }

        Ok(())
    }
}
