use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;
pub mod telemetry;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, utils, web};

use repositories::{
    blog_post::BlogPostRepository,
    comment::CommentRepository,
    contact::ContactRepository,
    health::HealthRepository,
    project::ProjectRepository,
    service::ServiceRepository,
    skill::SkillRepository,
    social_post::SocialPostRepository,
};
use shared_repos::SharedRepositories;
use use_cases::{
    blog::BlogPostHandler,
    comment::CommentHandler,
    contact::ContactHandler,
    project::ProjectHandler,
    service::ServiceHandler,
    skill::SkillHandler,
    social::SocialPostHandler,
};
use utils::media_url::MediaUrl;

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub skill_handler: AppSkillHandler,
    pub contact_handler: AppContactHandler,
    pub blog_handler: AppBlogPostHandler,
    pub comment_handler: AppCommentHandler,
    pub service_handler: AppServiceHandler,
    pub social_handler: AppSocialPostHandler,
    pub health_repo: Arc<dyn HealthRepository>,
}

pub type AppProjectHandler = ProjectHandler<dyn ProjectRepository>;
pub type AppSkillHandler = SkillHandler<dyn SkillRepository>;
pub type AppContactHandler = ContactHandler<dyn ContactRepository>;
pub type AppBlogPostHandler = BlogPostHandler<dyn BlogPostRepository, dyn CommentRepository>;
pub type AppCommentHandler = CommentHandler<dyn CommentRepository>;
pub type AppServiceHandler = ServiceHandler<dyn ServiceRepository>;
pub type AppSocialPostHandler = SocialPostHandler<dyn SocialPostRepository>;

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        Self::from_repos(SharedRepositories::new(pool), MediaUrl::new(config.media_url.as_str()))
    }

    pub fn from_repos(repos: SharedRepositories, media: MediaUrl) -> Self {
        AppState {
            project_handler: ProjectHandler::new(repos.project_repo, media.clone()),
            skill_handler: SkillHandler::new(repos.skill_repo),
            contact_handler: ContactHandler::new(repos.contact_repo),
            blog_handler: BlogPostHandler::new(repos.blog_post_repo, repos.comment_repo.clone(), media),
            comment_handler: CommentHandler::new(repos.comment_repo),
            service_handler: ServiceHandler::new(repos.service_repo),
            social_handler: SocialPostHandler::new(repos.social_post_repo),
            health_repo: repos.health_repo,
        }
    }
}
