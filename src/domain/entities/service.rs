use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::validation::{MAX_NAME_LENGTH, MAX_TITLE_LENGTH};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub price_range: Option<String>,
    pub delivery_time: Option<String>,
    /// One feature per line.
    pub features: String,
    pub featured: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub price_range: Option<String>,
    pub delivery_time: Option<String>,
    pub features: String,
    pub features_list: Vec<String>,
    pub featured: bool,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewService {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1))]
    pub description: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub icon: String,

    #[serde(default)]
    #[validate(length(max = MAX_NAME_LENGTH))]
    pub price_range: Option<String>,

    #[serde(default)]
    #[validate(length(max = MAX_NAME_LENGTH))]
    pub delivery_time: Option<String>,

    #[serde(default)]
    pub features: String,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub order: i32,
}

/// Splits newline-separated features into trimmed, non-empty entries, in order.
pub fn features_list(features: &str) -> Vec<String> {
    features
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

impl From<Service> for ServiceResponse {
    fn from(service: Service) -> Self {
        ServiceResponse {
            features_list: features_list(&service.features),
            id: service.id,
            title: service.title,
            description: service.description,
            icon: service.icon,
            price_range: service.price_range,
            delivery_time: service.delivery_time,
            features: service.features,
            featured: service.featured,
            order: service.sort_order,
        }
    }
}
