use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{errors::AppError, AppState};

/// `limit` stays textual so a non-numeric value is ignored rather than rejected.
#[derive(Debug, Default, Deserialize)]
pub struct SocialPostQuery {
    pub platform: Option<String>,
    pub limit: Option<String>,
}

#[instrument(skip(state))]
pub async fn list_social_posts(
    state: web::Data<AppState>,
    query: web::Query<SocialPostQuery>,
) -> Result<impl Responder, AppError> {
    let SocialPostQuery { platform, limit } = query.into_inner();

    let posts = state.social_handler
        .list_social_posts(platform, limit)
        .await?;

    Ok(HttpResponse::Ok().json(posts))
}
