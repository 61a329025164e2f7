pub mod blog_post;
pub mod comment;
pub mod contact;
pub mod project;
pub mod service;
pub mod skill;
pub mod social_post;
pub mod validation;
