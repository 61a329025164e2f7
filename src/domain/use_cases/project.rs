use std::sync::Arc;

use tracing::instrument;

use crate::{
    entities::project::Project,
    errors::AppError,
    repositories::project::ProjectRepository,
    utils::{media_url::MediaUrl, valid_uuid::valid_uuid},
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository + ?Sized,
{
    pub project_repo: Arc<R>,
    media: MediaUrl,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository + ?Sized,
{
    pub fn new(project_repo: Arc<R>, media: MediaUrl) -> Self {
        ProjectHandler { project_repo, media }
    }

    /// Lists every project, newest first
    #[instrument(skip(self))]
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = self.project_repo.list_projects().await?;

        Ok(projects
            .into_iter()
            .map(|project| project.with_media_url(&self.media))
            .collect())
    }

    /// Retrieves a project by its ID
    #[instrument(skip(self))]
    pub async fn get_project(&self, id: &str) -> Result<Project, AppError> {
        let valid_id = valid_uuid(id, "Project")?;

        let project = self.project_repo.get_project_by_id(&valid_id).await?;

        Ok(project.with_media_url(&self.media))
    }
}
