pub mod blog_posts;
pub mod comments;
pub mod contact;
pub mod home;
pub mod projects;
pub mod services;
pub mod skills;
pub mod social_posts;
pub mod system;
