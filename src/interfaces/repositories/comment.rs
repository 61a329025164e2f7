use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::comment::{Comment, CommentInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxCommentRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Always stored unapproved
    async fn create_comment(&self, comment: &CommentInsert) -> Result<Comment, AppError>;
    /// Approved comments for a post, newest first
    async fn list_approved_comments(&self, post_id: &Uuid) -> Result<Vec<Comment>, AppError>;
    /// Every comment on a post regardless of moderation state, newest first
    async fn list_comments_for_post(&self, post_id: &Uuid) -> Result<Vec<Comment>, AppError>;
    async fn delete_comment(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxCommentRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxCommentRepo { pool }
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepo {
    async fn create_comment(&self, comment: &CommentInsert) -> Result<Comment, AppError> {
        let created = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (post_id, name, email, comment, approved)
            VALUES ($1, $2, $3, $4, FALSE)
            RETURNING *
            "#
        )
        .bind(comment.post_id)
        .bind(&comment.name)
        .bind(&comment.email)
        .bind(&comment.comment)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn list_approved_comments(&self, post_id: &Uuid) -> Result<Vec<Comment>, AppError> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT * FROM comments
            WHERE post_id = $1 AND approved = TRUE
            ORDER BY created_at DESC
            "#
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn list_comments_for_post(&self, post_id: &Uuid) -> Result<Vec<Comment>, AppError> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"SELECT * FROM comments WHERE post_id = $1 ORDER BY created_at DESC"#
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn delete_comment(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Comment not found".into()));
        }

        Ok(())
    }
}
