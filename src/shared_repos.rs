use std::sync::Arc;

use crate::repositories::{
    blog_post::BlogPostRepository,
    comment::CommentRepository,
    contact::ContactRepository,
    health::HealthRepository,
    project::ProjectRepository,
    service::ServiceRepository,
    skill::SkillRepository,
    social_post::SocialPostRepository,
    sqlx_repo::{
        SqlxBlogPostRepo, SqlxCommentRepo, SqlxContactRepo, SqlxHealthRepo,
        SqlxProjectRepo, SqlxServiceRepo, SqlxSkillRepo, SqlxSocialPostRepo,
    },
};

/// One handle per store. Swap any of them out to run the app against fakes.
#[derive(Clone)]
pub struct SharedRepositories {
    pub project_repo: Arc<dyn ProjectRepository>,
    pub skill_repo: Arc<dyn SkillRepository>,
    pub contact_repo: Arc<dyn ContactRepository>,
    pub blog_post_repo: Arc<dyn BlogPostRepository>,
    pub comment_repo: Arc<dyn CommentRepository>,
    pub service_repo: Arc<dyn ServiceRepository>,
    pub social_post_repo: Arc<dyn SocialPostRepository>,
    pub health_repo: Arc<dyn HealthRepository>,
}

impl SharedRepositories {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SharedRepositories {
            project_repo: Arc::new(SqlxProjectRepo::new(pool.clone())),
            skill_repo: Arc::new(SqlxSkillRepo::new(pool.clone())),
            contact_repo: Arc::new(SqlxContactRepo::new(pool.clone())),
            blog_post_repo: Arc::new(SqlxBlogPostRepo::new(pool.clone())),
            comment_repo: Arc::new(SqlxCommentRepo::new(pool.clone())),
            service_repo: Arc::new(SqlxServiceRepo::new(pool.clone())),
            social_post_repo: Arc::new(SqlxSocialPostRepo::new(pool.clone())),
            health_repo: Arc::new(SqlxHealthRepo::new(pool)),
        }
    }
}
