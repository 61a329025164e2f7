use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::{
    constants::WORDS_PER_MINUTE,
    entities::{
        comment::CommentResponse,
        validation::{new_validation_error, validate_slug, MAX_IMAGE_PATH_LENGTH, MAX_NAME_LENGTH, MAX_TITLE_LENGTH},
    },
    utils::media_url::MediaUrl,
};

// ───── Constants ──────────────────────────────────────────────────────
const MAX_SLUG_LENGTH: u64 = 200;
const MAX_EXCERPT_LENGTH: u64 = 300;
const MAX_TAGS_LENGTH: u64 = 200;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub author: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub category: String,
    /// Comma-separated.
    pub tags: String,
    pub published: bool,
    pub featured: bool,
    pub views: i32,
    /// Minutes.
    pub reading_time: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated post with its slug and reading time resolved.
#[derive(Debug, Clone, Validate)]
pub struct BlogPostInsert {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_SLUG_LENGTH), custom(function = "validate_slug"))]
    pub slug: String,

    pub author: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub category: String,
    pub tags: String,
    pub published: bool,
    pub featured: bool,
    pub reading_time: i32,
}

// ───── API Response Models ──────────────────────────────────────────

/// List projection: no content, plus the number of approved comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct BlogPostListResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub author: String,
    pub excerpt: String,
    pub featured_image: Option<String>,
    pub category: String,
    pub tags: String,
    pub views: i32,
    pub reading_time: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub featured: bool,
    pub comments_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPostDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub author: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub category: String,
    pub tags: String,
    pub views: i32,
    pub reading_time: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comments: Vec<CommentResponse>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewBlogPost {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,

    /// Derived from the title when absent or blank.
    #[serde(default)]
    #[validate(length(max = MAX_SLUG_LENGTH), custom(function = "validate_slug"))]
    pub slug: Option<String>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub author: String,

    #[validate(length(min = 1, max = MAX_EXCERPT_LENGTH))]
    pub excerpt: String,

    #[validate(length(min = 1))]
    pub content: String,

    #[serde(default)]
    #[validate(length(max = MAX_IMAGE_PATH_LENGTH))]
    pub featured_image: Option<String>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub category: String,

    #[serde(default)]
    #[validate(length(max = MAX_TAGS_LENGTH))]
    pub tags: String,

    #[serde(default)]
    pub published: bool,

    #[serde(default)]
    pub featured: bool,

    /// Estimated from the content when absent.
    #[serde(default)]
    #[validate(range(min = 1))]
    pub reading_time: Option<i32>,
}

// ───── Derivations ──────────────────────────────────────────────────

/// Lowercase, hyphenated slug for a title; `"My First Post!!!"` gives `"my-first-post"`.
pub fn slug_from_title(title: &str) -> String {
    let mut slug = slug::slugify(title);
    if slug.len() > MAX_SLUG_LENGTH as usize {
        slug.truncate(MAX_SLUG_LENGTH as usize);
        while slug.ends_with('-') {
            slug.pop();
        }
    }
    slug
}

pub fn estimate_reading_time(content: &str) -> i32 {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as i32
}

// ───── Conversions ──────────────────────────────────────────────────

impl TryFrom<NewBlogPost> for BlogPostInsert {
    type Error = ValidationErrors;

    fn try_from(mut value: NewBlogPost) -> Result<Self, Self::Error> {
        value.slug = value.slug.filter(|s| !s.trim().is_empty());
        value.validate()?;

        let slug = match value.slug {
            Some(s) => s,
            None => {
                let generated = slug_from_title(&value.title);
                if generated.is_empty() {
                    let mut errors = ValidationErrors::new();
                    errors.add("slug", new_validation_error("slug_empty", "Title does not produce a usable slug; please provide one"));
                    return Err(errors);
                }
                generated
            }
        };

        let reading_time = value.reading_time
            .unwrap_or_else(|| estimate_reading_time(&value.content));

        let insert = BlogPostInsert {
            title: value.title,
            slug,
            author: value.author,
            excerpt: value.excerpt,
            content: value.content,
            featured_image: value.featured_image.filter(|s| !s.trim().is_empty()),
            category: value.category,
            tags: value.tags,
            published: value.published,
            featured: value.featured,
            reading_time,
        };

        insert.validate()?;
        Ok(insert)
    }
}

impl BlogPostListResponse {
    pub fn with_media_url(mut self, media: &MediaUrl) -> Self {
        self.featured_image = media.resolve(self.featured_image);
        self
    }
}

impl BlogPost {
    pub fn into_detail_response(
        self,
        comments: Vec<CommentResponse>,
        media: &MediaUrl,
    ) -> BlogPostDetailResponse {
        BlogPostDetailResponse {
            id: self.id,
            title: self.title,
            slug: self.slug,
            author: self.author,
            excerpt: self.excerpt,
            content: self.content,
            featured_image: media.resolve(self.featured_image),
            category: self.category,
            tags: self.tags,
            views: self.views,
            reading_time: self.reading_time,
            created_at: self.created_at,
            updated_at: self.updated_at,
            comments,
        }
    }
}
