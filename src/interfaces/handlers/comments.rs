use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::comment::NewCommentForm, errors::AppError, AppState};

#[instrument(skip(state, form))]
pub async fn create_comment(
    state: web::Data<AppState>,
    form: web::Json<NewCommentForm>,
) -> Result<impl Responder, AppError> {
    let comment = state.comment_handler
        .create_comment(form.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(comment))
}
