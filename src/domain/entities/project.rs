use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::validation::{validate_url, MAX_IMAGE_PATH_LENGTH, MAX_TITLE_LENGTH},
    utils::media_url::MediaUrl,
};

const MAX_TECHNOLOGIES_LENGTH: u64 = 300;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub technologies: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewProject {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1))]
    pub description: String,

    /// Path relative to the media store, e.g. `projects/shot.png`.
    #[validate(length(max = MAX_IMAGE_PATH_LENGTH))]
    pub image: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub github_url: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub live_url: Option<String>,

    #[validate(length(min = 1, max = MAX_TECHNOLOGIES_LENGTH))]
    pub technologies: String,

    #[serde(default)]
    pub featured: bool,
}

impl Project {
    pub fn with_media_url(mut self, media: &MediaUrl) -> Self {
        self.image = media.resolve(self.image);
        self
    }
}
