use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::skill::{NewSkill, Skill},
    errors::AppError,
    repositories::sqlx_repo::SqlxSkillRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
    async fn create_skill(&self, skill: &NewSkill) -> Result<Skill, AppError>;
    async fn update_skill(&self, id: &Uuid, skill: &NewSkill) -> Result<Skill, AppError>;
    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxSkillRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxSkillRepo { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(r#"SELECT * FROM skills ORDER BY category, name"#)
            .fetch_all(&self.pool)
            .await?;

        Ok(skills)
    }

    async fn create_skill(&self, skill: &NewSkill) -> Result<Skill, AppError> {
        skill.validate()?;

        let created = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (name, category, proficiency, icon)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#
        )
        .bind(&skill.name)
        .bind(&skill.category)
        .bind(skill.proficiency)
        .bind(&skill.icon)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_skill(&self, id: &Uuid, skill: &NewSkill) -> Result<Skill, AppError> {
        skill.validate()?;

        sqlx::query_as::<_, Skill>(
            r#"
            UPDATE skills SET name = $1, category = $2, proficiency = $3, icon = $4
            WHERE id = $5
            RETURNING *
            "#
        )
        .bind(&skill.name)
        .bind(&skill.category)
        .bind(skill.proficiency)
        .bind(&skill.icon)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Skill not found".into()))
    }

    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|result| {
                if result.rows_affected() == 0 {
                    Err(AppError::NotFound("Skill not found".into()))
                } else {
                    Ok(())
                }
            })?
    }
}
