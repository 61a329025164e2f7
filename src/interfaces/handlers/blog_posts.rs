use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct BlogPostQuery {
    pub category: Option<String>,
    pub featured: Option<String>,
}

#[instrument(skip(state))]
pub async fn list_blog_posts(
    state: web::Data<AppState>,
    query: web::Query<BlogPostQuery>,
) -> Result<impl Responder, AppError> {
    let BlogPostQuery { category, featured } = query.into_inner();

    let posts = state.blog_handler
        .list_blog_posts(category, featured)
        .await?;

    Ok(HttpResponse::Ok().json(posts))
}

#[instrument(skip(state))]
pub async fn get_blog_post(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let post = state.blog_handler.get_blog_post(&slug).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(state))]
pub async fn list_blog_categories(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let categories = state.blog_handler.list_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}
