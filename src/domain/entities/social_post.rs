use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::entities::validation::{new_validation_error, validate_url};

/// Supported platforms, in display order: stored key and human-readable label.
pub const PLATFORM_CHOICES: &[(&str, &str)] = &[
    ("twitter", "Twitter"),
    ("github", "GitHub"),
    ("linkedin", "LinkedIn"),
    ("medium", "Medium"),
    ("dev", "Dev.to"),
];

/// Display label for a stored platform key. Unknown keys come back unchanged.
pub fn platform_display(platform: &str) -> &str {
    PLATFORM_CHOICES
        .iter()
        .find(|(key, _)| *key == platform)
        .map(|(_, label)| *label)
        .unwrap_or(platform)
}

pub fn validate_platform(platform: &str) -> Result<(), ValidationError> {
    if PLATFORM_CHOICES.iter().any(|(key, _)| *key == platform) {
        Ok(())
    } else {
        Err(new_validation_error("invalid_choice", "Select a valid platform."))
    }
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct SocialPost {
    pub id: Uuid,
    pub platform: String,
    pub content: String,
    pub url: String,
    pub posted_at: DateTime<Utc>,
    pub likes: i32,
    pub comments: i32,
    pub shares: i32,
    pub image_url: Option<String>,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialPostResponse {
    pub id: Uuid,
    pub platform: String,
    pub platform_display: String,
    pub content: String,
    pub url: String,
    pub posted_at: DateTime<Utc>,
    pub likes: i32,
    pub comments: i32,
    pub shares: i32,
    pub image_url: Option<String>,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewSocialPost {
    #[validate(custom(function = "validate_platform"))]
    pub platform: String,

    #[validate(length(min = 1))]
    pub content: String,

    #[validate(custom(function = "validate_url"))]
    pub url: String,

    pub posted_at: DateTime<Utc>,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub likes: i32,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub comments: i32,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub shares: i32,

    #[serde(default)]
    #[validate(custom(function = "validate_url"))]
    pub image_url: Option<String>,
}

impl From<SocialPost> for SocialPostResponse {
    fn from(post: SocialPost) -> Self {
        SocialPostResponse {
            platform_display: platform_display(&post.platform).to_string(),
            id: post.id,
            platform: post.platform,
            content: post.content,
            url: post.url,
            posted_at: post.posted_at,
            likes: post.likes,
            comments: post.comments,
            shares: post.shares,
            image_url: post.image_url,
            fetched_at: post.fetched_at,
        }
    }
}
