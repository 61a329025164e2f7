mod test_content;
mod test_utils;

use futures::future::join_all;
use portfolio_api::{
    entities::blog_post::BlogPostInsert,
    errors::AppError,
    repositories::blog_post::BlogPostRepository,
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_content::*;
use test_utils::*;
use uuid::Uuid;

#[actix_rt::test]
#[ignore = "requires PostgreSQL at APP_TEST_DATABASE_URL"]
async fn post_without_slug_is_stored_under_slugified_title() {
    let app = TestApp::spawn().await;
    sqlx::query("DELETE FROM blog_posts WHERE slug = 'my-first-post'")
        .execute(&app.db_pool)
        .await
        .unwrap();

    let post = app.seed_blog_post(blog_post("My First Post!!!", unique("cat"))).await;
    assert_eq!(post.slug, "my-first-post");
    assert_eq!(post.views, 0);
    assert_eq!(post.reading_time, 2);

    let response = app.get("/api/blog/my-first-post/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["slug"], "my-first-post");
    assert_eq!(body["featured_image"], "https://cdn.example.com/media/blog/cover.png");

    app.repos.blog_post_repo.delete_blog_post(&post.id).await.unwrap();
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL at APP_TEST_DATABASE_URL"]
async fn concurrent_reads_count_every_view() {
    let app = TestApp::spawn().await;
    let post = app.seed_blog_post(blog_post(unique("Popular"), unique("cat"))).await;
    let path = format!("/api/blog/{}/", post.slug);

    let responses = join_all((0..50).map(|_| app.get(&path))).await;
    assert!(responses.iter().all(|r| r.status() == StatusCode::OK));

    let stored = app.repos.blog_post_repo.get_blog_post_by_id(&post.id).await.unwrap();
    assert_eq!(stored.views, 50);
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL at APP_TEST_DATABASE_URL"]
async fn featured_filter_only_returns_published_featured_posts() {
    let app = TestApp::spawn().await;
    let category = unique("Cat");

    let featured_post = app.seed_blog_post(featured(blog_post(unique("Featured"), &category))).await;
    let plain = app.seed_blog_post(blog_post(unique("Plain"), &category)).await;
    let hidden = app.seed_blog_post(draft(featured(blog_post(unique("Hidden"), &category)))).await;

    let path = format!("/api/blog/?featured=true&category={}", category.to_lowercase());
    let body: Vec<Value> = app.get(&path).await.json().await.unwrap();
    let ids: Vec<_> = body.iter().map(|p| p["id"].as_str().unwrap().to_string()).collect();
    assert_eq!(ids, vec![featured_post.id.to_string()]);
    assert!(body[0].get("content").is_none());

    let path = format!("/api/blog?category={}", category);
    let body: Vec<Value> = app.get(&path).await.json().await.unwrap();
    let ids: Vec<_> = body.iter().map(|p| p["id"].as_str().unwrap().to_string()).collect();
    assert_eq!(ids, vec![plain.id.to_string(), featured_post.id.to_string()]);

    let response = app.get(&format!("/api/blog/{}", hidden.slug)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL at APP_TEST_DATABASE_URL"]
async fn detail_lists_only_approved_comments() {
    let app = TestApp::spawn().await;
    let category = unique("cat");
    let post = app.seed_blog_post(blog_post(unique("Discussed"), &category)).await;

    let mut created = Vec::new();
    for text in ["First!", "Spam"] {
        let response = app.post_json("/api/comments/", &json!({
            "post": post.id,
            "name": "Reader",
            "email": "reader@example.com",
            "comment": text,
        })).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = response.json().await.unwrap();
        assert!(body.get("approved").is_none());
        created.push(body["id"].as_str().unwrap().parse::<Uuid>().unwrap());
    }

    app.approve_comment(created[0]).await;

    let detail: Value = app.get(&format!("/api/blog/{}", post.slug)).await.json().await.unwrap();
    let comments = detail["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["comment"], "First!");
    assert_eq!(comments[0]["post"], post.id.to_string());

    let list: Vec<Value> = app.get(&format!("/api/blog/?category={}", category)).await.json().await.unwrap();
    assert_eq!(list[0]["comments_count"], 1);
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL at APP_TEST_DATABASE_URL"]
async fn comment_on_missing_post_is_a_post_field_error() {
    let app = TestApp::spawn().await;

    let response = app.post_json("/api/comments", &json!({
        "post": Uuid::new_v4(),
        "name": "Reader",
        "email": "reader@example.com",
        "comment": "Hello?",
    })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["details"][0]["field"], "post");
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL at APP_TEST_DATABASE_URL"]
async fn deleting_post_removes_its_comments() {
    let app = TestApp::spawn().await;
    let post = app.seed_blog_post(blog_post(unique("Doomed"), unique("cat"))).await;

    app.post_json("/api/comments", &json!({
        "post": post.id,
        "name": "Reader",
        "email": "reader@example.com",
        "comment": "Pending moderation",
    })).await;

    let comments = app.repos.comment_repo.list_comments_for_post(&post.id).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert!(!comments[0].approved);

    app.repos.blog_post_repo.delete_blog_post(&post.id).await.unwrap();

    let (remaining,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments WHERE post_id = $1")
        .bind(post.id)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);

    let err = app.repos.blog_post_repo.delete_blog_post(&post.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL at APP_TEST_DATABASE_URL"]
async fn deleting_comment_leaves_post_and_siblings() {
    let app = TestApp::spawn().await;
    let post = app.seed_blog_post(blog_post(unique("Moderated"), unique("cat"))).await;

    for text in ["Keep me", "Remove me"] {
        let response = app.post_json("/api/comments", &json!({
            "post": post.id,
            "name": "Reader",
            "email": "reader@example.com",
            "comment": text,
        })).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let comments = app.repos.comment_repo.list_comments_for_post(&post.id).await.unwrap();
    let doomed = comments.iter().find(|c| c.comment == "Remove me").unwrap().id;

    app.repos.comment_repo.delete_comment(&doomed).await.unwrap();

    let remaining = app.repos.comment_repo.list_comments_for_post(&post.id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].comment, "Keep me");
    assert!(app.repos.blog_post_repo.get_blog_post_by_id(&post.id).await.is_ok());

    let err = app.repos.comment_repo.delete_comment(&doomed).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL at APP_TEST_DATABASE_URL"]
async fn categories_cover_published_posts_only() {
    let app = TestApp::spawn().await;
    let visible = unique("Visible");
    let drafted = unique("Drafted");

    app.seed_blog_post(blog_post(unique("Shown"), &visible)).await;
    app.seed_blog_post(blog_post(unique("Shown again"), &visible)).await;
    app.seed_blog_post(draft(blog_post(unique("Draft"), &drafted))).await;

    let categories: Vec<String> = app.get("/api/blog/categories/").await.json().await.unwrap();
    assert_eq!(categories.iter().filter(|c| **c == visible).count(), 1);
    assert!(!categories.contains(&drafted));
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL at APP_TEST_DATABASE_URL"]
async fn duplicate_slug_is_a_slug_field_error() {
    let app = TestApp::spawn().await;
    let title = unique("Same title");

    app.seed_blog_post(blog_post(&title, unique("cat"))).await;

    let insert = BlogPostInsert::try_from(blog_post(&title, unique("cat"))).unwrap();
    let err = app.repos.blog_post_repo.create_blog_post(&insert).await.unwrap_err();

    match err {
        AppError::ValidationError(fields) => assert_eq!(fields[0].field, "slug"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL at APP_TEST_DATABASE_URL"]
async fn update_rederives_blank_slug_and_keeps_views() {
    let app = TestApp::spawn().await;
    let post = app.seed_blog_post(blog_post(unique("Before"), unique("cat"))).await;
    app.get(&format!("/api/blog/{}", post.slug)).await;

    let new_title = unique("After");
    let mut changes = blog_post(&new_title, post.category.clone());
    changes.slug = Some(String::new());
    let insert = BlogPostInsert::try_from(changes).unwrap();

    let updated = app.repos.blog_post_repo.update_blog_post(&post.id, &insert).await.unwrap();
    assert_eq!(updated.slug, new_title.to_lowercase());
    assert_eq!(updated.views, 1);
    assert!(updated.updated_at >= post.updated_at);
}
