use chrono::{DateTime, Utc};
use portfolio_api::entities::{
    blog_post::NewBlogPost,
    project::NewProject,
    service::NewService,
    skill::NewSkill,
    social_post::NewSocialPost,
};
use uuid::Uuid;

/// Short random suffix so fixtures never collide with rows left by earlier runs.
pub fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, &Uuid::new_v4().simple().to_string()[..12])
}

pub fn blog_post(title: impl Into<String>, category: impl Into<String>) -> NewBlogPost {
    NewBlogPost {
        title: title.into(),
        slug: None,
        author: "Test Author".into(),
        excerpt: "A short excerpt".into(),
        content: "Lorem ipsum dolor sit amet ".repeat(80),
        featured_image: Some("blog/cover.png".into()),
        category: category.into(),
        tags: "rust,testing".into(),
        published: true,
        featured: false,
        reading_time: None,
    }
}

pub fn featured(mut post: NewBlogPost) -> NewBlogPost {
    post.featured = true;
    post
}

pub fn draft(mut post: NewBlogPost) -> NewBlogPost {
    post.published = false;
    post
}

pub fn project(title: impl Into<String>) -> NewProject {
    NewProject {
        title: title.into(),
        description: "Integration test project".into(),
        image: Some("projects/screenshot.png".into()),
        github_url: Some("https://github.com/example/project".into()),
        live_url: None,
        technologies: "Rust, actix-web, PostgreSQL".into(),
        featured: false,
    }
}

pub fn skill(name: impl Into<String>) -> NewSkill {
    NewSkill {
        name: name.into(),
        category: "Backend".into(),
        proficiency: 90,
        icon: "rust".into(),
    }
}

pub fn service(title: impl Into<String>, order: i32, features: &str) -> NewService {
    NewService {
        title: title.into(),
        description: "Integration test service".into(),
        icon: "code".into(),
        price_range: Some("$500 - $2000".into()),
        delivery_time: None,
        features: features.into(),
        featured: false,
        order,
    }
}

pub fn social_post(platform: &str, posted_at: DateTime<Utc>) -> NewSocialPost {
    NewSocialPost {
        platform: platform.into(),
        content: unique("post"),
        url: format!("https://example.com/{}", unique(platform)),
        posted_at,
        likes: 1,
        comments: 0,
        shares: 0,
        image_url: None,
    }
}
