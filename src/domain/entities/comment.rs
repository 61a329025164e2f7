use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::entities::validation::{new_validation_error, validate_uuid, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub name: String,
    pub email: String,
    pub comment: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

/// A validated comment ready to persist. Carries no `approved` flag: new
/// comments always start unapproved.
#[derive(Debug, Clone)]
pub struct CommentInsert {
    pub post_id: Uuid,
    pub name: String,
    pub email: String,
    pub comment: String,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub post: Uuid,
    pub name: String,
    pub email: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        CommentResponse {
            id: comment.id,
            post: comment.post_id,
            name: comment.name,
            email: comment.email,
            comment: comment.comment,
            created_at: comment.created_at,
        }
    }
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NewCommentForm {
    #[validate(required, custom(function = "validate_uuid"))]
    pub post: Option<String>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(email, length(min = 1, max = MAX_EMAIL_LENGTH))]
    pub email: String,

    #[validate(length(min = 1))]
    pub comment: String,
}

impl TryFrom<NewCommentForm> for CommentInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewCommentForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let post_id = match value.post.as_deref().map(Uuid::parse_str) {
            Some(Ok(id)) => id,
            _ => {
                let mut errors = ValidationErrors::new();
                errors.add("post", new_validation_error("invalid_pk", "Invalid pk - object does not exist."));
                return Err(errors);
            }
        };

        Ok(CommentInsert {
            post_id,
            name: value.name,
            email: value.email,
            comment: value.comment,
        })
    }
}
