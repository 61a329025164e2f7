use std::sync::Arc;

use tracing::instrument;

use crate::{entities::skill::Skill, errors::AppError, repositories::skill::SkillRepository};

pub struct SkillHandler<R>
where
    R: SkillRepository + ?Sized,
{
    pub skill_repo: Arc<R>,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository + ?Sized,
{
    pub fn new(skill_repo: Arc<R>) -> Self {
        SkillHandler { skill_repo }
    }

    #[instrument(skip(self))]
    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.skill_repo.list_skills().await
    }
}
