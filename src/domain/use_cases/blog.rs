use std::sync::Arc;

use tracing::instrument;

use crate::{
    entities::{
        blog_post::{BlogPostDetailResponse, BlogPostListResponse},
        comment::CommentResponse,
    },
    errors::AppError,
    repositories::{
        blog_post::{BlogPostFilter, BlogPostRepository},
        comment::CommentRepository,
    },
    utils::media_url::MediaUrl,
};

pub struct BlogPostHandler<B, C>
where
    B: BlogPostRepository + ?Sized,
    C: CommentRepository + ?Sized,
{
    pub blog_post_repo: Arc<B>,
    pub comment_repo: Arc<C>,
    media: MediaUrl,
}

impl<B, C> BlogPostHandler<B, C>
where
    B: BlogPostRepository + ?Sized,
    C: CommentRepository + ?Sized,
{
    pub fn new(blog_post_repo: Arc<B>, comment_repo: Arc<C>, media: MediaUrl) -> Self {
        BlogPostHandler { blog_post_repo, comment_repo, media }
    }

    /// Published posts only. An empty `category` is ignored and any non-empty
    /// `featured` value restricts the list to featured posts.
    #[instrument(skip(self))]
    pub async fn list_blog_posts(
        &self,
        category: Option<String>,
        featured: Option<String>,
    ) -> Result<Vec<BlogPostListResponse>, AppError> {
        let filter = BlogPostFilter {
            category: category.filter(|c| !c.is_empty()),
            featured_only: featured.is_some_and(|f| !f.is_empty()),
        };

        let posts = self.blog_post_repo.list_published_blog_posts(&filter).await?;

        Ok(posts
            .into_iter()
            .map(|post| post.with_media_url(&self.media))
            .collect())
    }

    /// Counts the read and returns the post with its approved comments
    #[instrument(skip(self))]
    pub async fn get_blog_post(&self, slug: &str) -> Result<BlogPostDetailResponse, AppError> {
        let post = self.blog_post_repo
            .increment_views_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))?;

        let comments = self.comment_repo
            .list_approved_comments(&post.id)
            .await?
            .into_iter()
            .map(CommentResponse::from)
            .collect();

        Ok(post.into_detail_response(comments, &self.media))
    }

    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<String>, AppError> {
        self.blog_post_repo.list_published_categories().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::{
        entities::{blog_post::BlogPost, comment::Comment},
        repositories::{blog_post::MockBlogPostRepository, comment::MockCommentRepository},
    };

    fn post(slug: &str, views: i32) -> BlogPost {
        BlogPost {
            id: Uuid::new_v4(),
            title: "Hello".into(),
            slug: slug.into(),
            author: "Ada".into(),
            excerpt: "Intro".into(),
            content: "Body".into(),
            featured_image: Some("blog/cover.jpg".into()),
            category: "Rust".into(),
            tags: "rust".into(),
            published: true,
            featured: false,
            views,
            reading_time: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn handler(
        blog: MockBlogPostRepository,
        comments: MockCommentRepository,
    ) -> BlogPostHandler<MockBlogPostRepository, MockCommentRepository> {
        BlogPostHandler::new(Arc::new(blog), Arc::new(comments), MediaUrl::new("/media/"))
    }

    #[actix_rt::test]
    async fn builds_filter_from_query_values() {
        let mut blog = MockBlogPostRepository::new();
        blog.expect_list_published_blog_posts()
            .withf(|filter| {
                *filter == BlogPostFilter { category: Some("Rust".into()), featured_only: true }
            })
            .times(1)
            .returning(|_| Ok(vec![]));

        let posts = handler(blog, MockCommentRepository::new())
            .list_blog_posts(Some("Rust".into()), Some("yes".into()))
            .await
            .unwrap();

        assert!(posts.is_empty());
    }

    #[actix_rt::test]
    async fn empty_query_values_do_not_filter() {
        let mut blog = MockBlogPostRepository::new();
        blog.expect_list_published_blog_posts()
            .withf(|filter| *filter == BlogPostFilter::default())
            .times(1)
            .returning(|_| Ok(vec![]));

        handler(blog, MockCommentRepository::new())
            .list_blog_posts(Some(String::new()), Some(String::new()))
            .await
            .unwrap();
    }

    #[actix_rt::test]
    async fn detail_counts_view_and_attaches_approved_comments() {
        let stored = post("hello", 1);
        let post_id = stored.id;

        let mut blog = MockBlogPostRepository::new();
        blog.expect_increment_views_by_slug()
            .withf(|slug| slug == "hello")
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        let mut comments = MockCommentRepository::new();
        comments.expect_list_approved_comments()
            .withf(move |id| *id == post_id)
            .times(1)
            .returning(move |_| Ok(vec![Comment {
                id: Uuid::new_v4(),
                post_id,
                name: "Reader".into(),
                email: "reader@example.com".into(),
                comment: "Nice".into(),
                approved: true,
                created_at: Utc::now(),
            }]));

        let detail = handler(blog, comments).get_blog_post("hello").await.unwrap();

        assert_eq!(detail.views, 1);
        assert_eq!(detail.featured_image.as_deref(), Some("/media/blog/cover.jpg"));
        assert_eq!(detail.comments.len(), 1);
        assert_eq!(detail.comments[0].post, post_id);
    }

    #[actix_rt::test]
    async fn unknown_slug_is_not_found() {
        let mut blog = MockBlogPostRepository::new();
        blog.expect_increment_views_by_slug().returning(|_| Ok(None));

        let mut comments = MockCommentRepository::new();
        comments.expect_list_approved_comments().never();

        let err = handler(blog, comments).get_blog_post("missing").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
