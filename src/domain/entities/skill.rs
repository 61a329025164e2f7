use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::validation::MAX_NAME_LENGTH;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    /// Intended 0-100, not enforced.
    pub proficiency: i32,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewSkill {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub category: String,

    #[serde(default)]
    pub proficiency: i32,

    #[serde(default)]
    #[validate(length(max = MAX_NAME_LENGTH))]
    pub icon: String,
}
