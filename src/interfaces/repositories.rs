pub mod blog_post;
pub mod comment;
pub mod contact;
pub mod health;
pub mod project;
pub mod service;
pub mod skill;
pub mod social_post;
pub mod sqlx_repo;
