use std::sync::Arc;

use tracing::instrument;

use crate::{
    entities::comment::{CommentInsert, CommentResponse, NewCommentForm},
    errors::AppError,
    repositories::comment::CommentRepository,
};

pub struct CommentHandler<R>
where
    R: CommentRepository + ?Sized,
{
    pub comment_repo: Arc<R>,
}

impl<R> CommentHandler<R>
where
    R: CommentRepository + ?Sized,
{
    pub fn new(comment_repo: Arc<R>) -> Self {
        CommentHandler { comment_repo }
    }

    /// Stores a reader comment awaiting moderation
    #[instrument(skip(self, form))]
    pub async fn create_comment(&self, form: NewCommentForm) -> Result<CommentResponse, AppError> {
        let insert = CommentInsert::try_from(form)?;

        let comment = self.comment_repo.create_comment(&insert).await?;
        tracing::info!(comment_id = %comment.id, post_id = %comment.post_id, "Comment submitted for moderation");

        Ok(comment.into())
    }
}
